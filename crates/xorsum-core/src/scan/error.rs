//! Scan failure types: open and read errors with the underlying OS error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a checksum scan. Both variants keep the underlying I/O error
/// and its raw OS code so the CLI can report them the way the system tools
/// do (`... -- No such file or directory (0x00000002)`).
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input file could not be opened.
    #[error("can't open '{}' -- {source} ({code:#010x})", .path.display())]
    Open {
        path: PathBuf,
        code: i32,
        source: io::Error,
    },

    /// A read failed after the file was opened. Any bytes already folded
    /// are discarded by the caller.
    #[error("read failed (file '{}') -- {source} ({code:#010x})", .path.display())]
    Read {
        path: PathBuf,
        code: i32,
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        ScanError::Open {
            path: path.to_path_buf(),
            code: source.raw_os_error().unwrap_or(0),
            source,
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        ScanError::Read {
            path: path.to_path_buf(),
            code: source.raw_os_error().unwrap_or(0),
            source,
        }
    }
}
