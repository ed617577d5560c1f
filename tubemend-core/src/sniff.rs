//! MP3 container sniffing
//!
//! Downstream conversion services declare `audio/mpeg` and then return
//! whatever they feel like. The sniffer decides, from the bytes alone,
//! whether a buffer looks like an MP3 container: an ID3v2 tag or an MPEG
//! frame sync word, at the start or anywhere in a bounded prefix window.
//!
//! This is classification, not validation: a passing buffer is "plausibly
//! MP3", nothing stronger.

use crate::constants::{FRAME_SYNC_BYTE, FRAME_SYNC_MASK, ID3_MARKER, SNIFF_WINDOW};

#[cfg(feature = "logging")]
use tracing::debug;

/// Reason string reported when no marker is found
pub const NO_MARKER_FOUND: &str = "no MP3 marker found";

/// Which marker pattern satisfied the sniff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// ID3v2 tag ("ID3")
    Id3v2,
    /// MPEG audio frame sync word (0xFF followed by a byte with the top
    /// three bits set)
    FrameSync,
}

/// Outcome of sniffing a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffResult {
    /// A marker was found within the scan window
    Valid {
        /// The marker pattern that matched.
        marker: Marker,
        /// Byte offset of the match.
        offset: usize,
    },
    /// No marker anywhere in the scan window
    Invalid {
        /// Human-readable reason. There is only one: [`NO_MARKER_FOUND`].
        reason: &'static str,
    },
}

impl SniffResult {
    /// True when a marker was found
    pub fn is_valid(&self) -> bool {
        matches!(self, SniffResult::Valid { .. })
    }

    /// The rejection reason, if any
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            SniffResult::Valid { .. } => None,
            SniffResult::Invalid { reason } => Some(reason),
        }
    }
}

/// Sniff a buffer for an MP3 container marker
///
/// Checks, in order:
/// 1. ID3v2 tag at offset 0
/// 2. MPEG frame sync at offset 0
/// 3. Either pattern at any offset within the first [`SNIFF_WINDOW`] bytes
///
/// Pure and deterministic; work is bounded by the scan window regardless of
/// buffer size. Buffers shorter than 2 bytes are always invalid.
pub fn sniff(data: &[u8]) -> SniffResult {
    if data.len() >= 3 && &data[..3] == ID3_MARKER {
        return SniffResult::Valid {
            marker: Marker::Id3v2,
            offset: 0,
        };
    }

    if data.len() >= 2 && data[0] == FRAME_SYNC_BYTE && data[1] & FRAME_SYNC_MASK == FRAME_SYNC_MASK
    {
        return SniffResult::Valid {
            marker: Marker::FrameSync,
            offset: 0,
        };
    }

    match find_marker(data, SNIFF_WINDOW) {
        Some((offset, marker)) => {
            #[cfg(feature = "logging")]
            debug!("marker {:?} found at offset {}", marker, offset);

            SniffResult::Valid { marker, offset }
        }
        None => {
            #[cfg(feature = "logging")]
            debug!(
                "no marker in the first {} bytes of a {}-byte buffer",
                SNIFF_WINDOW,
                data.len()
            );

            SniffResult::Invalid {
                reason: NO_MARKER_FOUND,
            }
        }
    }
}

/// Find the first marker within `window`, scanning left to right
///
/// Offsets up to `min(len - 3, window)` inclusive are considered, so the
/// scan never tests a truncated ID3 pattern. At a given offset the ID3
/// check takes priority over the frame-sync check; across offsets the
/// leftmost match wins.
pub(crate) fn find_marker(data: &[u8], window: usize) -> Option<(usize, Marker)> {
    let last = core::cmp::min(data.len().saturating_sub(3), window);
    let hay = &data[..core::cmp::min(data.len(), last + 3)];

    // memmem dispatches to optimized backends (SSE2/AVX2/NEON)
    let id3_at = memchr::memmem::find(hay, ID3_MARKER).filter(|&at| at <= last);

    let sync_at = memchr::memchr_iter(FRAME_SYNC_BYTE, hay)
        .take_while(|&at| at <= last)
        .find(|&at| {
            data.get(at + 1)
                .map_or(false, |&b| b & FRAME_SYNC_MASK == FRAME_SYNC_MASK)
        });

    match (id3_at, sync_at) {
        // The patterns cannot match at the same offset (0x49 != 0xFF), but
        // the tie-break is documented as ID3-first, so <= rather than <.
        (Some(id3), Some(sync)) if id3 <= sync => Some((id3, Marker::Id3v2)),
        (_, Some(sync)) => Some((sync, Marker::FrameSync)),
        (Some(id3), None) => Some((id3, Marker::Id3v2)),
        (None, None) => None,
    }
}
