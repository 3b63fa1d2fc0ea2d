use xorsum_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; diagnostics go to stderr only.
    logging::init_logging().expect("failed to initialize logging");

    std::process::exit(cli::run_from_args());
}
