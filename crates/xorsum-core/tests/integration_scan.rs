//! Integration tests: full scans over real files on disk.
//!
//! Exercises the whole engine path (open, seek, chunked reads, fold) with
//! bodies large enough to cross several internal chunk boundaries, and
//! checks the result against a single-shot fold of the same bytes.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use xorsum_core::params::ChecksumParameters;
use xorsum_core::scan::{checksum_file, XorAccumulator};

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn checksum_matches_single_shot_fold_across_chunks() {
    // Three full chunks plus a tail, so the read loop crosses boundaries.
    let body: Vec<u8> = (0u8..=255).cycle().take(3 * 4096 + 123).collect();
    let f = write_temp(&body);
    for word_size in 1..=8u64 {
        let params = ChecksumParameters::new(word_size, 0, None).unwrap();
        let got = checksum_file(f.path(), &params).unwrap();
        let mut acc = XorAccumulator::new(word_size as u32);
        acc.update(&body);
        assert_eq!(got, acc.value(), "word size {word_size}");
    }
}

#[test]
fn offset_and_length_bound_honored_across_chunks() {
    let body: Vec<u8> = (0u8..200).cycle().take(10_000).collect();
    let f = write_temp(&body);
    let params = ChecksumParameters::new(4, 1_000, Some(5_000)).unwrap();
    let got = checksum_file(f.path(), &params).unwrap();
    let mut acc = XorAccumulator::new(4);
    acc.update(&body[1_000..6_000]);
    assert_eq!(got, acc.value());
}

#[test]
fn checksum_is_deterministic() {
    let body: Vec<u8> = (0u8..=255).cycle().take(2 * 4096).collect();
    let f = write_temp(&body);
    let params = ChecksumParameters::new(6, 17, Some(7_000)).unwrap();
    let first = checksum_file(f.path(), &params).unwrap();
    let second = checksum_file(f.path(), &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn known_checksum_vectors() {
    let f = write_temp(&[0x01, 0x02, 0x03, 0x04, 0x05]);
    let params = ChecksumParameters::new(4, 0, Some(5)).unwrap();
    assert_eq!(checksum_file(f.path(), &params).unwrap(), 67305988);

    let f = write_temp(&[0x10, 0x20, 0x30, 0x40, 0x50]);
    let params = ChecksumParameters::new(4, 3, Some(2)).unwrap();
    assert_eq!(checksum_file(f.path(), &params).unwrap(), 20544);
}

#[test]
fn upper_bits_stay_zero_for_narrow_words() {
    let body: Vec<u8> = (1u8..=255).cycle().take(4096 + 57).collect();
    let f = write_temp(&body);
    for word_size in 1..8u64 {
        let params = ChecksumParameters::new(word_size, 0, None).unwrap();
        let got = checksum_file(f.path(), &params).unwrap();
        assert_eq!(got >> (8 * word_size), 0, "word size {word_size}");
    }
}

#[test]
fn open_failure_reports_path_and_os_error() {
    let params = ChecksumParameters::new(4, 0, None).unwrap();
    let err = checksum_file(Path::new("/no/such/xorsum-input"), &params).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("can't open"), "{msg}");
    assert!(msg.contains("/no/such/xorsum-input"), "{msg}");
    assert!(msg.contains("(0x"), "{msg}");
}
