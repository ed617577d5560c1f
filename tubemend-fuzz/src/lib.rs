//! Fuzzing placeholder for tubemend-core sniff/repair
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_sniff

use bytes::Bytes;

pub fn fuzz_sniff(data: &[u8]) {
    // Classification only - should never panic
    let _ = tubemend_core::sniff(data);
}

pub fn fuzz_repair(data: &[u8]) {
    // Total function - should never panic and always produce a buffer
    let out = tubemend_core::repair(Bytes::copy_from_slice(data)).into_bytes();
    assert!(tubemend_core::sniff(&out).is_valid());
}

pub fn fuzz_extract_video_id(data: &[u8]) {
    if let Ok(url) = std::str::from_utf8(data) {
        let _ = tubemend_core::video::extract_video_id(url);
    }
}
