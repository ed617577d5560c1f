//! Ordered endpoint configuration
//!
//! The set of third-party conversion services is configuration, not logic:
//! an ordered list of URL templates, tried front to back until one yields a
//! sniff-passing payload. Nothing here performs I/O; rendering a plan just
//! produces the URLs a caller should fetch, in order.

use crate::error::RelayError;
use crate::video::VideoId;
use serde::{Deserialize, Serialize};
use url::Url;

/// One third-party conversion endpoint
///
/// `url` is a template; `{id}` is replaced with the video id and the
/// optional `{bitrate}` placeholder with the requested bitrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointTemplate {
    /// Short name used in logs and error messages
    pub name: String,
    /// URL template with `{id}` (and optionally `{bitrate}`) placeholders
    pub url: String,
}

impl EndpointTemplate {
    /// Render the template for a concrete video
    pub fn render(&self, id: &VideoId, bitrate: u32) -> Result<Url, RelayError> {
        let rendered = self
            .url
            .replace("{id}", id.as_str())
            .replace("{bitrate}", &bitrate.to_string());

        Url::parse(&rendered).map_err(|_| RelayError::BadEndpoint {
            name: self.name.clone(),
            url: rendered,
        })
    }
}

/// A rendered fetch target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    /// Name of the endpoint the URL came from
    pub name: String,
    /// The concrete URL to fetch
    pub url: Url,
}

/// The ordered fallback chain of conversion endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePlan {
    /// Endpoints in priority order
    pub endpoints: Vec<EndpointTemplate>,
}

impl SourcePlan {
    /// Build a plan from an ordered endpoint list
    pub fn new(endpoints: Vec<EndpointTemplate>) -> Self {
        Self { endpoints }
    }

    /// Parse a plan from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, RelayError> {
        serde_json::from_str(json).map_err(|e| RelayError::Config(e.to_string()))
    }

    /// Number of configured endpoints
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// True when no endpoints are configured
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Render every endpoint for a concrete video, preserving order
    ///
    /// Fails on an empty plan or on a template that renders to a non-URL;
    /// a broken template is a configuration bug, not something to skip
    /// silently at fetch time.
    pub fn render_all(&self, id: &VideoId, bitrate: u32) -> Result<Vec<FetchTarget>, RelayError> {
        if self.endpoints.is_empty() {
            return Err(RelayError::NoEndpoints);
        }

        self.endpoints
            .iter()
            .map(|ep| {
                ep.render(id, bitrate).map(|url| FetchTarget {
                    name: ep.name.clone(),
                    url,
                })
            })
            .collect()
    }
}
