//! Error types for relay operations
//!
//! Sniffing and repair are total functions and never error; everything in
//! here belongs to the layers around them (URL handling, endpoint
//! configuration, payload screening).

/// Errors that can occur while preparing or screening a relayed payload
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RelayError {
    /// The input is not a recognizable YouTube video URL
    #[error("not a recognizable YouTube URL: {0}")]
    InvalidVideoUrl(String),

    /// A video id had the wrong shape
    #[error("invalid video id {0:?}: expected 11 characters of [A-Za-z0-9_-]")]
    InvalidVideoId(String),

    /// An endpoint template rendered to something that is not a URL
    #[error("endpoint {name:?} rendered an invalid URL: {url}")]
    BadEndpoint {
        /// Name of the offending endpoint template.
        name: String,
        /// The rendered string that failed to parse.
        url: String,
    },

    /// The source plan contains no endpoints
    #[error("no endpoints configured")]
    NoEndpoints,

    /// A fetched body is too small to plausibly be audio
    #[error("response body too small to be audio: {0} bytes")]
    BodyTooSmall(usize),

    /// A fetched body is an HTML page with no extractable MP3 link
    #[error("response is an HTML page with no direct MP3 link")]
    NoDirectLink,

    /// Every endpoint in the plan was tried without producing a usable payload
    #[error("all {0} endpoints failed to produce a sniff-passing payload")]
    AllEndpointsFailed(usize),

    /// Endpoint configuration could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// IO error during read/write
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RelayError {
    fn from(err: std::io::Error) -> Self {
        RelayError::Io(err.to_string())
    }
}
