//! YouTube URL and video-id handling
//!
//! Endpoint templates take a bare video id, so the one piece of URL work
//! this crate does is pulling the 11-character id out of the usual URL
//! shapes and deriving a safe download filename from an untrusted title.

use crate::error::RelayError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Maximum length of the title portion of a generated filename
const MAX_TITLE_LEN: usize = 100;

/// An 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Validate and wrap a raw id
    pub fn new(raw: &str) -> Result<Self, RelayError> {
        let ok = raw.len() == 11
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if ok {
            Ok(VideoId(raw.to_string()))
        } else {
            Err(RelayError::InvalidVideoId(raw.to_string()))
        }
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = RelayError;

    fn try_from(raw: String) -> Result<Self, RelayError> {
        VideoId::new(&raw)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> String {
        id.0
    }
}

fn video_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?[^#]+&v=))([A-Za-z0-9_-]{11})")
            .expect("literal pattern compiles")
    })
}

/// Extract the video id from a YouTube URL
///
/// Accepts the `watch?v=`, `youtu.be/`, `embed/` and `/v/` forms, with or
/// without scheme and `www.`, and ignores trailing query parameters.
pub fn extract_video_id(url: &str) -> Result<VideoId, RelayError> {
    video_url_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
        .ok_or_else(|| RelayError::InvalidVideoUrl(url.to_string()))
}

/// Derive a safe `.mp3` filename from an untrusted title
///
/// Drops everything but word characters, whitespace and hyphens, collapses
/// whitespace runs to single underscores and caps the title portion, then
/// appends `-<id>.mp3`. A title that cleans down to nothing falls back to
/// [`default_filename`].
pub fn safe_filename(title: &str, id: &VideoId) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();

    let strip = STRIP.get_or_init(|| Regex::new(r"[^\w\s-]").expect("literal pattern compiles"));
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").expect("literal pattern compiles"));

    let cleaned = strip.replace_all(title, "");
    let cleaned = spaces.replace_all(cleaned.trim(), "_");
    let cleaned: String = cleaned.chars().take(MAX_TITLE_LEN).collect();

    if cleaned.is_empty() {
        default_filename(id)
    } else {
        format!("{cleaned}-{id}.mp3")
    }
}

/// Filename used when no title is known
pub fn default_filename(id: &VideoId) -> String {
    format!("youtube-{id}.mp3")
}
