//! Streaming XOR checksum scan over a byte range of a file.
//!
//! Reads the selected range in fixed-size chunks and folds every byte into
//! a rotating word-wise accumulator. One linear pass; memory use is bounded
//! by the chunk buffer.

mod error;
mod fold;

pub use error::ScanError;
pub use fold::XorAccumulator;

use crate::params::ChecksumParameters;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

const CHUNK_SIZE: usize = 4096;

/// Compute the XOR checksum of the byte range selected by `params`.
///
/// Seeking past end-of-file is not an error: the first read returns zero
/// bytes and the checksum is 0. A `length` larger than the remaining bytes
/// degrades the same way. The file handle is dropped on every exit path.
pub fn checksum_file(path: &Path, params: &ChecksumParameters) -> Result<u64, ScanError> {
    let mut file = File::open(path).map_err(|err| ScanError::open(path, err))?;
    file.seek(SeekFrom::Start(params.offset()))
        .map_err(|err| ScanError::read(path, err))?;

    let mut acc = XorAccumulator::new(params.word_size());
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total_read = 0u64;

    loop {
        // Clamp each chunk so the running total never exceeds the requested length.
        let want = match params.length() {
            Some(length) => (length - total_read).min(CHUNK_SIZE as u64) as usize,
            None => CHUNK_SIZE,
        };
        if want == 0 {
            break;
        }
        let n = file
            .read(&mut buf[..want])
            .map_err(|err| ScanError::read(path, err))?;
        if n == 0 {
            break;
        }
        acc.update(&buf[..n]);
        total_read += n as u64;
    }

    tracing::debug!(total_bytes = total_read, "scan complete");
    Ok(acc.value())
}
