//! Remote sources for artifact downloads
//!
//! The cache only talks to the `ArtifactSource` trait so tests can count and
//! script downloads without a network.

use crate::error::ArtifactError;
use std::io::Read;

/// An open download stream
pub struct Download {
    /// Value of `Content-Length`, when the server sent one
    pub content_length: Option<u64>,
    /// Response body
    pub body: Box<dyn Read + Send>,
}

/// Something that can stream the bytes behind a URL
pub trait ArtifactSource {
    /// Start a download of `url`
    fn fetch(&self, url: &str) -> Result<Download, ArtifactError>;
}

/// Blocking HTTP source backed by `ureq`
pub struct HttpSource {
    agent: ureq::Agent,
}

impl HttpSource {
    /// Create a source with the crate's user agent
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("source-format/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Download, ArtifactError> {
        log::debug!("GET {}", url);

        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(ArtifactError::HttpStatus {
                    url: url.to_string(),
                    code,
                    reason: response.status_text().to_string(),
                })
            }
            Err(err) => {
                return Err(ArtifactError::Network {
                    url: url.to_string(),
                    message: err.to_string(),
                })
            }
        };

        // Only 200 carries the archive; other 2xx/3xx are not usable bodies.
        if response.status() != 200 {
            return Err(ArtifactError::HttpStatus {
                url: url.to_string(),
                code: response.status(),
                reason: response.status_text().to_string(),
            });
        }

        let content_length = response
            .header("Content-Length")
            .and_then(|v| v.trim().parse::<u64>().ok());
        log::debug!("Content-Length: {:?}", content_length);

        Ok(Download {
            content_length,
            body: Box::new(response.into_reader()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_is_network_error() {
        // Nothing listens on the discard port locally.
        let source = HttpSource::new();
        let result = source.fetch("http://127.0.0.1:9/artifact.jar");
        assert!(matches!(result, Err(ArtifactError::Network { .. })));
    }
}
