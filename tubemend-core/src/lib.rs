//! # Tubemend Core
//!
//! Heuristic inspection and repair of MP3 payloads relayed from third-party
//! conversion services. The services return opaque byte blobs of untrusted
//! format; this crate decides whether a blob looks like an MP3 container and,
//! when it does not, makes it start with a recognizable marker.
//!
//! ## Modules
//!
//! - `constants`: Marker patterns and scan limits
//! - `sniff`: MP3 container sniffing
//! - `repair`: Best-effort header repair
//! - `video`: YouTube URL and video-id handling
//! - `source`: Ordered endpoint configuration (fallback chain)
//! - `accept`: Acceptance policy for fetched payloads

#![warn(missing_docs)]

pub mod accept;
pub mod constants;
pub mod error;
pub mod repair;
pub mod sniff;
pub mod source;
pub mod video;

// Re-export commonly used items
pub use error::RelayError;
pub use repair::{repair, RepairOutcome};
pub use sniff::{sniff, Marker, SniffResult};

/// Result type alias for Tubemend operations
pub type Result<T> = std::result::Result<T, RelayError>;
