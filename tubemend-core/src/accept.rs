//! Acceptance policy for fetched payloads
//!
//! Conversion services answer with one of three things: the audio bytes, a
//! tiny error page served with an audio content type, or an HTML landing
//! page whose markup contains the real download link. Screening sorts a
//! response into those buckets before any byte-level sniffing; delivery
//! preparation then runs sniff/repair and wraps the result for the sink.

use crate::constants::{MIN_PLAUSIBLE_BODY, MP3_MIME};
use crate::error::RelayError;
use crate::repair::repair;
use crate::sniff::sniff;
use bytes::Bytes;
use regex::Regex;
use std::sync::OnceLock;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// What to do with a fetched response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The body plausibly is the audio payload
    Payload,
    /// The body is an HTML landing page; fetch this direct link instead
    FollowLink(String),
}

/// A payload ready for the delivery sink
///
/// The sink's contract: `data` has either passed `sniff` or been processed
/// by `repair`. Nothing stronger is promised.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// Filename to present the download as
    pub filename: String,
    /// Always [`MP3_MIME`]
    pub content_type: &'static str,
    /// The (possibly repaired) payload bytes
    pub data: Bytes,
    /// True when the payload only passes sniffing because repair ran
    pub repaired: bool,
}

fn direct_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:href|src)="(https://[^"]+\.mp3[^"]*)""#).expect("literal pattern compiles")
    })
}

/// Pull the first direct `.mp3` link out of an HTML landing page
pub fn extract_direct_link(html: &str) -> Option<String> {
    direct_link_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Screen a fetched body using its declared content type and size
///
/// - `text/html` bodies are landing pages: the direct link is extracted, or
///   the endpoint is rejected when there is none
/// - bodies under [`MIN_PLAUSIBLE_BODY`] bytes are rejected as error pages
/// - everything else goes on to sniffing
///
/// The declared content type is untrusted input; it only ever routes a body
/// toward link extraction, never vouches for the bytes.
pub fn screen_body(content_type: Option<&str>, body: &[u8]) -> Result<Screen, RelayError> {
    if let Some(ct) = content_type {
        if ct.contains("text/html") {
            let html = String::from_utf8_lossy(body);
            return match extract_direct_link(&html) {
                Some(link) => {
                    #[cfg(feature = "logging")]
                    debug!("extracted direct link from landing page: {}", link);

                    Ok(Screen::FollowLink(link))
                }
                None => Err(RelayError::NoDirectLink),
            };
        }
    }

    if body.len() < MIN_PLAUSIBLE_BODY {
        return Err(RelayError::BodyTooSmall(body.len()));
    }

    Ok(Screen::Payload)
}

/// Sniff a body, repair it when sniffing fails, and wrap it for the sink
pub fn prepare_delivery(filename: String, body: Bytes) -> Attachment {
    if sniff(&body).is_valid() {
        return Attachment {
            filename,
            content_type: MP3_MIME,
            data: body,
            repaired: false,
        };
    }

    #[cfg(feature = "logging")]
    warn!("payload failed sniffing, running repair");

    Attachment {
        filename,
        content_type: MP3_MIME,
        data: repair(body).into_bytes(),
        repaired: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SYNTH_FRAME_HEADER;

    #[test]
    fn test_extract_href_link() {
        let html = r#"<a class="btn" href="https://cdn.example/files/track.mp3?token=abc">Download</a>"#;
        assert_eq!(
            extract_direct_link(html).as_deref(),
            Some("https://cdn.example/files/track.mp3?token=abc")
        );
    }

    #[test]
    fn test_extract_src_link() {
        let html = r#"<audio src="https://cdn.example/a.mp3"></audio>"#;
        assert_eq!(
            extract_direct_link(html).as_deref(),
            Some("https://cdn.example/a.mp3")
        );
    }

    #[test]
    fn test_extract_no_link() {
        assert_eq!(extract_direct_link("<html><body>sorry</body></html>"), None);
    }

    #[test]
    fn test_screen_html_follows_link() {
        let html = br#"<a href="https://cdn.example/a.mp3">dl</a>"#;
        let screen = screen_body(Some("text/html; charset=utf-8"), html).unwrap();
        assert_eq!(
            screen,
            Screen::FollowLink("https://cdn.example/a.mp3".to_string())
        );
    }

    #[test]
    fn test_screen_html_without_link_is_rejected() {
        assert_eq!(
            screen_body(Some("text/html"), b"<html>nope</html>"),
            Err(RelayError::NoDirectLink)
        );
    }

    #[test]
    fn test_screen_small_body_is_rejected() {
        let body = vec![0u8; 100];
        assert_eq!(
            screen_body(Some("audio/mpeg"), &body),
            Err(RelayError::BodyTooSmall(100))
        );
    }

    #[test]
    fn test_screen_plausible_body_passes() {
        let body = vec![0u8; 2000];
        assert_eq!(screen_body(None, &body), Ok(Screen::Payload));
    }

    #[test]
    fn test_prepare_delivery_clean_payload() {
        let mut body = b"ID3\x04".to_vec();
        body.resize(2000, 0);

        let att = prepare_delivery("a.mp3".to_string(), Bytes::from(body));
        assert!(!att.repaired);
        assert_eq!(att.content_type, "audio/mpeg");
        assert_eq!(&att.data[..3], b"ID3");
    }

    #[test]
    fn test_prepare_delivery_repairs_garbage() {
        let att = prepare_delivery("a.mp3".to_string(), Bytes::from(vec![0u8; 64]));
        assert!(att.repaired);
        assert_eq!(&att.data[..4], &SYNTH_FRAME_HEADER);
        assert_eq!(att.data.len(), 68);
    }
}
