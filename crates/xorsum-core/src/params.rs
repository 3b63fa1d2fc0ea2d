//! Checksum parameters resolved from the command line.

use thiserror::Error;

/// Default word size in bytes when none is given on the command line.
pub const DEFAULT_WORD_SIZE: u64 = 4;

/// Word size outside the supported 1..=8 byte range.
#[derive(Debug, Error)]
#[error("word-size {0} out of bounds (valid range: 1..8)")]
pub struct InvalidWordSize(pub u64);

/// Parameters for one checksum scan: word size in bytes, byte offset of the
/// first byte included, and optional byte count (`None` = rest of the file).
/// Built once from CLI input, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumParameters {
    word_size: u32,
    offset: u64,
    length: Option<u64>,
}

impl ChecksumParameters {
    /// Validate and build. `word_size` must be in 1..=8 so every fold shift
    /// (`8 * position`) stays within a u64.
    ///
    /// `offset` and `length` are not checked against the actual file size;
    /// a range past end-of-file simply scans fewer bytes.
    pub fn new(word_size: u64, offset: u64, length: Option<u64>) -> Result<Self, InvalidWordSize> {
        if !(1..=8).contains(&word_size) {
            return Err(InvalidWordSize(word_size));
        }
        Ok(Self {
            word_size: word_size as u32,
            offset,
            length,
        })
    }

    /// Word size in bytes (1..=8).
    pub fn word_size(&self) -> u32 {
        self.word_size
    }

    /// Byte offset of the first byte included in the scan.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Number of bytes to include, or `None` for the rest of the file.
    pub fn length(&self) -> Option<u64> {
        self.length
    }
}
