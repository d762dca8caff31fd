//! Verification hooks for downloaded archives
//!
//! A verifier runs against the temporary download before it is moved into
//! the cache, so a rejected file never becomes a cached artifact.

use crate::error::ArtifactError;
use std::path::Path;

/// Check applied to a freshly downloaded file
pub trait Verify {
    /// Accept or reject the file at `path`
    fn verify(&self, path: &Path) -> Result<(), ArtifactError>;
}

/// Accepts every download
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVerification;

impl Verify for NoVerification {
    fn verify(&self, _path: &Path) -> Result<(), ArtifactError> {
        Ok(())
    }
}

/// Requires the download to have an exact byte size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedSize(pub u64);

impl Verify for ExpectedSize {
    fn verify(&self, path: &Path) -> Result<(), ArtifactError> {
        let actual = std::fs::metadata(path)?.len();
        if actual != self.0 {
            return Err(ArtifactError::Verification {
                path: path.display().to_string(),
                message: format!("expected {} bytes, got {}", self.0, actual),
            });
        }
        Ok(())
    }
}

/// Pick a verifier from an optional expected size
pub fn from_expected_size(size: Option<u64>) -> Box<dyn Verify> {
    match size {
        Some(bytes) => Box::new(ExpectedSize(bytes)),
        None => Box::new(NoVerification),
    }
}
