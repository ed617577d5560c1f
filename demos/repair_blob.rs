//! Sniff and repair a payload with leading garbage
//!
//! Run with: cargo run --example repair_blob

use bytes::Bytes;
use tubemend_core::{
    repair::{repair, RepairOutcome},
    sniff::sniff,
};

fn main() {
    // Simulate what a converter endpoint might actually return: some chunk
    // framing noise, then the real audio starting with an ID3 tag.
    let mut blob = b"1f40\r\nX-Debug: upstream-7\r\n".to_vec();
    blob.extend_from_slice(b"ID3\x04\x00\x00\x00\x00\x00\x00");
    blob.resize(2048, 0xAA);

    println!("fetched blob: {} bytes", blob.len());
    println!("sniff: {:?}", sniff(&blob));

    match repair(Bytes::from(blob)) {
        RepairOutcome::Truncated { offset, marker, data } => {
            println!(
                "repair dropped {} leading bytes ({:?} marker), {} bytes remain",
                offset,
                marker,
                data.len()
            );
            println!("repaired sniff: {:?}", sniff(&data));
        }
        RepairOutcome::Prepended { data } => {
            println!("no marker found, prepended header: {} bytes", data.len());
        }
    }

    // And the hopeless case: nothing resembling MP3 anywhere.
    let hopeless = Bytes::from(vec![0u8; 100]);
    let outcome = repair(hopeless);
    println!(
        "hopeless blob repaired to {} bytes (prepended: {})",
        outcome.data().len(),
        outcome.was_prepended()
    );
}
