//! Marker patterns and scan limits for MP3 payload inspection

/// ID3v2 tag marker - the usual first three bytes of a tagged MP3 file
pub const ID3_MARKER: &[u8; 3] = b"ID3";

/// First byte of an MPEG audio frame sync word
pub const FRAME_SYNC_BYTE: u8 = 0xFF;

/// Mask for the second sync byte: the top three bits must all be set
/// (together with the first byte this covers the 11-bit sync word)
pub const FRAME_SYNC_MASK: u8 = 0xE0;

/// Scan window for sniffing, in bytes. Markers past this offset leave the
/// buffer classified as suspect regardless of total size.
pub const SNIFF_WINDOW: usize = 4096;

/// Scan window for repair, in bytes. Wider than the sniff window so repair
/// can still locate a marker the sniffer gave up on.
pub const REPAIR_WINDOW: usize = 8192;

/// Generic MPEG frame header prepended as a last resort when no marker can
/// be located: MPEG-1 Layer III, 128 kbps, 44.1 kHz
pub const SYNTH_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x44];

/// Bodies below this size are treated as error pages rather than audio
pub const MIN_PLAUSIBLE_BODY: usize = 1000;

/// MIME type attached to delivered payloads
pub const MP3_MIME: &str = "audio/mpeg";
