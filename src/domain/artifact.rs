//! Artifact coordinates domain type
//!
//! Identifies a versioned archive in a Maven-style repository.

use std::fmt;

/// Maven coordinates of a jar artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinates {
    /// Dot-separated group identifier (e.g., "com.liferay")
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Version string
    pub version: String,
}

impl ArtifactCoordinates {
    /// Create new coordinates
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Same artifact at another version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Jar file name, `<artifact>-<version>.jar`
    pub fn file_name(&self) -> String {
        format!("{}-{}.jar", self.artifact, self.version)
    }
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
