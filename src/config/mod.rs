//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::artifact::locator::PUBLIC_REPOSITORY_URL;
use crate::domain::ArtifactCoordinates;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source Formatter jar version used unless overridden
pub const DEFAULT_FORMATTER_VERSION: &str = "1.0.2";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Formatter archive location and cache
    pub artifact: ArtifactConfig,
    /// Checker process settings
    pub checker: CheckerConfig,
    /// Result rendering settings
    pub output: OutputConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Show a progress bar while downloading
    pub progress: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            progress: true,
        }
    }
}

/// Formatter archive configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Base URL of the Maven-style repository
    pub repository_url: String,
    /// Group identifier
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Jar version
    pub version: String,
    /// Cache directory (defaults to `<data dir>/liferay`)
    pub cache_dir: Option<PathBuf>,
    /// Expected size of a fresh download in bytes
    pub expected_size: Option<u64>,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            repository_url: PUBLIC_REPOSITORY_URL.to_string(),
            group: "com.liferay".to_string(),
            artifact: "com.liferay.source.formatter.standalone".to_string(),
            version: DEFAULT_FORMATTER_VERSION.to_string(),
            cache_dir: None,
            expected_size: None,
        }
    }
}

impl ArtifactConfig {
    /// Coordinates of the configured jar
    pub fn coordinates(&self) -> ArtifactCoordinates {
        ArtifactCoordinates::new(&self.group, &self.artifact, &self.version)
    }

    /// Configured cache directory, or the per-user default
    pub fn resolve_cache_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_cache_dir(),
        }
    }

    /// Reject values that cannot produce a usable download URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("artifact.repository_url", &self.repository_url),
            ("artifact.group", &self.group),
            ("artifact.artifact", &self.artifact),
            ("artifact.version", &self.version),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Checker process configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckerConfig {
    /// Explicit path to the `java` executable
    pub java: Option<PathBuf>,
    /// Extra JVM arguments (e.g., "-Xmx2g")
    pub jvm_args: Vec<String>,
    /// Fail when the checker exits non-zero without writing a result
    pub fail_on_checker_error: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            java: None,
            jvm_args: Vec::new(),
            fail_on_checker_error: true,
        }
    }
}

/// Result rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Stop listing after the first check, as older releases did
    pub first_check_only: bool,
}

/// Per-user cache directory, `<data dir>/liferay`
pub fn default_cache_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|dir| dir.join("liferay"))
        .ok_or(ConfigError::NoDataDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.artifact.version, DEFAULT_FORMATTER_VERSION);
        assert_eq!(config.artifact.group, "com.liferay");
        assert!(config.general.progress);
        assert!(config.checker.fail_on_checker_error);
        assert!(!config.output.first_check_only);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [artifact]
            version = "1.0.5"

            [checker]
            jvm_args = ["-Xmx2g"]
            "#,
        )
        .unwrap();

        assert_eq!(config.artifact.version, "1.0.5");
        assert_eq!(config.artifact.repository_url, PUBLIC_REPOSITORY_URL);
        assert_eq!(config.checker.jvm_args, ["-Xmx2g"]);
        assert!(config.checker.fail_on_checker_error);
    }

    #[test]
    fn test_coordinates() {
        let coords = ArtifactConfig::default().coordinates();
        assert_eq!(
            coords.file_name(),
            "com.liferay.source.formatter.standalone-1.0.2.jar"
        );
    }

    #[test]
    fn test_explicit_cache_dir() {
        let config = ArtifactConfig {
            cache_dir: Some(PathBuf::from("/tmp/sf-cache")),
            ..ArtifactConfig::default()
        };
        assert_eq!(
            config.resolve_cache_dir().unwrap(),
            PathBuf::from("/tmp/sf-cache")
        );
    }

    #[test]
    fn test_validate_rejects_blank_version() {
        let config = ArtifactConfig {
            version: " ".to_string(),
            ..ArtifactConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "artifact.version"
        ));
    }
}
