//! Rotating word-wise XOR fold.

/// Streaming XOR accumulator over little-endian word slots.
///
/// Bytes are folded in stream order: byte `i` of the current word slot is
/// XORed into bits `8*i .. 8*i+8` of the 64-bit value, and the slot
/// position wraps after `word_size` bytes. The result depends only on the
/// byte stream, never on how it is split into chunks.
#[derive(Debug, Clone)]
pub struct XorAccumulator {
    checksum: u64,
    word_size: u32,
    word_position: u32,
}

impl XorAccumulator {
    /// New accumulator for `word_size`-byte slots. Callers obtain
    /// `word_size` from a validated [`ChecksumParameters`], so it is in
    /// 1..=8 and every shift below stays within the u64.
    ///
    /// [`ChecksumParameters`]: crate::params::ChecksumParameters
    pub fn new(word_size: u32) -> Self {
        debug_assert!((1..=8).contains(&word_size));
        Self {
            checksum: 0,
            word_size,
            word_position: 0,
        }
    }

    /// Fold `chunk` into the checksum, continuing the current word slot.
    pub fn update(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            self.checksum ^= u64::from(byte) << (8 * self.word_position);
            self.word_position += 1;
            if self.word_position == self.word_size {
                self.word_position = 0;
            }
        }
    }

    /// The checksum folded so far.
    pub fn value(&self) -> u64 {
        self.checksum
    }
}
