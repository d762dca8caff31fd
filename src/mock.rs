//! Mock implementations for testing
//!
//! Provides a scripted download source and checker runner so the cache and
//! invoker can be tested without a network or a JVM.

use crate::artifact::{ArtifactSource, Download};
use crate::error::{ArtifactError, FormatterError};
use crate::formatter::args::OUTPUT_FILE_KEY;
use crate::formatter::{CheckerCommand, CheckerExit, ProcessRunner};

use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum MockResponse {
    Body(Vec<u8>),
    BrokenBody(Vec<u8>),
    Status(u16, String),
}

/// Mock download source that records every requested URL
///
/// Clones share the request log, so a test can keep a handle after moving
/// the source into a cache.
#[derive(Debug, Clone)]
pub struct MockSource {
    response: MockResponse,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSource {
    fn new(response: MockResponse) -> Self {
        Self {
            response,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve `body` with a matching content length
    pub fn with_body(body: Vec<u8>) -> Self {
        Self::new(MockResponse::Body(body))
    }

    /// Serve `body`, then fail the stream
    pub fn with_broken_body(body: Vec<u8>) -> Self {
        Self::new(MockResponse::BrokenBody(body))
    }

    /// Answer with an HTTP error status
    pub fn with_status(code: u16, reason: &str) -> Self {
        Self::new(MockResponse::Status(code, reason.to_string()))
    }

    /// Number of fetches made so far
    pub fn fetch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// URLs fetched so far, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl ArtifactSource for MockSource {
    fn fetch(&self, url: &str) -> Result<Download, ArtifactError> {
        self.requests.lock().unwrap().push(url.to_string());

        match &self.response {
            MockResponse::Body(body) => Ok(Download {
                content_length: Some(body.len() as u64),
                body: Box::new(Cursor::new(body.clone())),
            }),
            MockResponse::BrokenBody(body) => Ok(Download {
                content_length: Some(body.len() as u64 * 2),
                body: Box::new(BrokenReader {
                    data: Cursor::new(body.clone()),
                }),
            }),
            MockResponse::Status(code, reason) => Err(ArtifactError::HttpStatus {
                url: url.to_string(),
                code: *code,
                reason: reason.clone(),
            }),
        }
    }
}

struct BrokenReader {
    data: Cursor<Vec<u8>>,
}

impl Read for BrokenReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )),
            n => Ok(n),
        }
    }
}

/// Mock checker runner
///
/// Records each command and writes a canned result into the file named by
/// its `output.file.name=` argument, the way the real jar does.
#[derive(Debug, Default)]
pub struct MockRunner {
    output: Option<String>,
    success: bool,
    stderr: String,
    commands: Mutex<Vec<CheckerCommand>>,
}

impl MockRunner {
    /// Succeeds and writes `json` as the result
    pub fn writing(json: impl Into<String>) -> Self {
        Self {
            output: Some(json.into()),
            success: true,
            ..Self::default()
        }
    }

    /// Succeeds without writing a result
    pub fn silent() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Exits with code 1 and `stderr`, writing no result
    pub fn failing(stderr: &str) -> Self {
        Self {
            success: false,
            stderr: stderr.to_string(),
            ..Self::default()
        }
    }

    /// Builder: set whether the process reports success
    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Commands run so far
    pub fn commands(&self) -> Vec<CheckerCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, command: &CheckerCommand) -> Result<CheckerExit, FormatterError> {
        self.commands.lock().unwrap().push(command.clone());

        if let Some(json) = &self.output {
            let path = command.setting(OUTPUT_FILE_KEY).ok_or_else(|| {
                FormatterError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "missing output file argument",
                ))
            })?;
            std::fs::write(path, json)?;
        }

        Ok(CheckerExit {
            success: self.success,
            code: Some(if self.success { 0 } else { 1 }),
            stdout: String::new(),
            stderr: self.stderr.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_counts_fetches() {
        let source = MockSource::with_body(b"abc".to_vec());
        let handle = source.clone();

        let mut download = source.fetch("https://repo.test/a.jar").unwrap();
        let mut body = Vec::new();
        download.body.read_to_end(&mut body).unwrap();

        assert_eq!(body, b"abc");
        assert_eq!(download.content_length, Some(3));
        assert_eq!(handle.fetch_count(), 1);
    }

    #[test]
    fn test_broken_body_fails_after_data() {
        let source = MockSource::with_broken_body(b"abc".to_vec());
        let mut download = source.fetch("u").unwrap();
        let mut body = Vec::new();
        let err = download.body.read_to_end(&mut body).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(body, b"abc");
    }
}
