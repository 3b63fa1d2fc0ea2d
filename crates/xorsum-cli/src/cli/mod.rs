//! CLI for the xorsum checksum tool: argument resolution and reporting.

mod parse;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use xorsum_core::params::{ChecksumParameters, DEFAULT_WORD_SIZE};
use xorsum_core::scan;

const AFTER_HELP: &str = "\
Result:
  The XOR checksum is written to STDOUT as an unsigned integer (checksum
  bytes interpreted in little endian). On open or read failures a literal
  `0` is written to STDOUT instead and the diagnostics go to STDERR.";

/// Calculate XOR checksum over a file.
#[derive(Debug, Parser)]
#[command(name = "xorsum", version)]
#[command(about = "Calculate XOR checksum over a file")]
#[command(after_help = AFTER_HELP, after_long_help = AFTER_HELP)]
pub struct Cli {
    /// Input file.
    #[arg(value_name = "file-name")]
    pub file_name: PathBuf,

    /// Size in bytes of the checksum value (valid range: 1..8), e.g. 4
    /// means the checksum consists of 4 bytes and the input file is
    /// processed in blocks of 4 bytes.
    #[arg(value_name = "word-size", value_parser = parse::lenient_u64, default_value_t = DEFAULT_WORD_SIZE)]
    pub word_size: u64,

    /// Offset in bytes of the first byte included in the checksum
    /// calculation.
    #[arg(value_name = "offset", value_parser = parse::lenient_u64, default_value_t = 0)]
    pub offset: u64,

    /// Length in bytes of the section included in the checksum calculation
    /// (default: size of the input file minus offset).
    #[arg(value_name = "length", value_parser = parse::lenient_u64)]
    pub length: Option<u64>,
}

/// Parse the command line, run the scan, report. Returns the process exit
/// code: 0 on success, 1 on usage errors and scan failures.
pub fn run_from_args() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    let params = match ChecksumParameters::new(cli.word_size, cli.offset, cli.length) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("xorsum: incorrect argument -- {err}");
            eprint!("{}", Cli::command().render_long_help());
            return 1;
        }
    };
    tracing::debug!(
        word_size = params.word_size(),
        offset = params.offset(),
        length = ?params.length(),
        "resolved parameters"
    );

    match scan::checksum_file(&cli.file_name, &params) {
        Ok(checksum) => {
            println!("{checksum}");
            0
        }
        Err(err) => {
            eprintln!("xorsum: {err}");
            // Callers that parse stdout unconditionally still get one integer line.
            println!("0");
            1
        }
    }
}

/// Help and version requests exit 0; real argument errors print the error
/// plus the full usage text and exit 1 (not clap's default 2).
fn report_parse_error(err: clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        _ => {
            let _ = err.print();
            eprint!("{}", Cli::command().render_long_help());
            1
        }
    }
}

#[cfg(test)]
mod tests;
