use std::fs;
use tempfile::tempdir;

use tubemend_cli::commands::check;

/// Helper: a plausible MP3 file starting with an ID3 tag
fn id3_payload() -> Vec<u8> {
    let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
    data.resize(2048, 0xAA);
    data
}

/// Helper: junk with a frame sync marker buried inside
fn buried_sync_payload(offset: usize) -> Vec<u8> {
    let mut data = vec![0x20u8; offset + 512];
    data[offset] = 0xFF;
    data[offset + 1] = 0xFB;
    data
}

#[test]
fn test_check_valid_file() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("clean.mp3");
    fs::write(&input_path, id3_payload()).unwrap();

    check::execute(input_path.to_str().unwrap(), None).unwrap();
}

#[test]
fn test_check_json_verdict_valid() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("clean.mp3");
    let json_path = td.path().join("verdict.json");
    fs::write(&input_path, id3_payload()).unwrap();

    check::execute(
        input_path.to_str().unwrap(),
        Some(json_path.to_str().unwrap()),
    )
    .unwrap();

    let verdict: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(verdict["valid"], true);
    assert_eq!(verdict["marker"], "id3v2");
    assert_eq!(verdict["offset"], 0);
    assert!(verdict.get("reason").is_none());
}

#[test]
fn test_check_json_verdict_buried_marker() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("buried.bin");
    let json_path = td.path().join("verdict.json");
    fs::write(&input_path, buried_sync_payload(100)).unwrap();

    check::execute(
        input_path.to_str().unwrap(),
        Some(json_path.to_str().unwrap()),
    )
    .unwrap();

    let verdict: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(verdict["valid"], true);
    assert_eq!(verdict["marker"], "frame_sync");
    assert_eq!(verdict["offset"], 100);
}

#[test]
fn test_check_json_verdict_invalid() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("junk.bin");
    let json_path = td.path().join("verdict.json");
    fs::write(&input_path, vec![0u8; 512]).unwrap();

    check::execute(
        input_path.to_str().unwrap(),
        Some(json_path.to_str().unwrap()),
    )
    .unwrap();

    let verdict: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(verdict["valid"], false);
    assert_eq!(verdict["reason"], "no MP3 marker found");
    assert!(verdict.get("marker").is_none());
}

#[test]
fn test_check_empty_file() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("empty.bin");
    let json_path = td.path().join("verdict.json");
    fs::write(&input_path, b"").unwrap();

    check::execute(
        input_path.to_str().unwrap(),
        Some(json_path.to_str().unwrap()),
    )
    .unwrap();

    let verdict: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(verdict["valid"], false);
}

#[test]
fn test_check_missing_file_errors() {
    let td = tempdir().unwrap();
    let missing = td.path().join("does-not-exist.mp3");

    assert!(check::execute(missing.to_str().unwrap(), None).is_err());
}
