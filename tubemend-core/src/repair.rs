//! Best-effort header repair for buffers that failed sniffing
//!
//! Some sources prepend garbage before the real payload (partial HTTP chunk
//! framing, diagnostic text). Repair drops everything before the first
//! marker it can find, and when there is no marker at all it prepends a
//! generic MPEG frame header so the result at least starts like an MP3.
//!
//! Repair is total: it never errors and always hands back a usable buffer.
//! "Usable" means sniff-passing, not playable.

use crate::constants::{REPAIR_WINDOW, SYNTH_FRAME_HEADER};
use crate::sniff::{find_marker, Marker};
use bytes::{BufMut, Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// How a buffer was made to start with a recognizable marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// A marker was located and the bytes before it were dropped
    Truncated {
        /// Offset the marker was found at (0 means nothing was dropped).
        offset: usize,
        /// The marker pattern found there.
        marker: Marker,
        /// The resulting buffer, starting at the marker.
        data: Bytes,
    },
    /// No marker in the scan window; a generic frame header was prepended
    /// and the original bytes kept
    Prepended {
        /// The resulting buffer: synthesized header followed by the input.
        data: Bytes,
    },
}

impl RepairOutcome {
    /// Borrow the repaired buffer
    pub fn data(&self) -> &Bytes {
        match self {
            RepairOutcome::Truncated { data, .. } => data,
            RepairOutcome::Prepended { data } => data,
        }
    }

    /// Consume the outcome, keeping only the repaired buffer
    pub fn into_bytes(self) -> Bytes {
        match self {
            RepairOutcome::Truncated { data, .. } => data,
            RepairOutcome::Prepended { data } => data,
        }
    }

    /// True when the last-resort header prepend ran
    pub fn was_prepended(&self) -> bool {
        matches!(self, RepairOutcome::Prepended { .. })
    }
}

/// Repair a buffer so it starts with a recognizable MP3 marker
///
/// Scans the first [`REPAIR_WINDOW`] bytes for a marker (ID3 checked before
/// frame sync at each offset, leftmost match wins):
///
/// - marker at offset `k`: returns `buffer[k..]` as a zero-copy slice
/// - no marker (including empty input): returns
///   [`SYNTH_FRAME_HEADER`] `++ buffer`
///
/// The result is sniff-passing but carries no guarantee of being real
/// audio; callers needing that must decode frames themselves.
pub fn repair(buf: Bytes) -> RepairOutcome {
    match find_marker(&buf, REPAIR_WINDOW) {
        Some((offset, marker)) => {
            #[cfg(feature = "logging")]
            debug!(
                "marker {:?} at offset {}, dropping {} leading bytes",
                marker,
                offset,
                offset
            );

            RepairOutcome::Truncated {
                offset,
                marker,
                data: buf.slice(offset..),
            }
        }
        None => {
            #[cfg(feature = "logging")]
            warn!(
                "no marker in the first {} bytes, prepending a generic frame header",
                REPAIR_WINDOW
            );

            let mut out = BytesMut::with_capacity(SYNTH_FRAME_HEADER.len() + buf.len());
            out.put_slice(&SYNTH_FRAME_HEADER);
            out.put_slice(&buf);
            RepairOutcome::Prepended { data: out.freeze() }
        }
    }
}

/// Repair and return just the resulting buffer
pub fn repair_bytes(buf: Bytes) -> Bytes {
    repair(buf).into_bytes()
}
