//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist; without one the default locations are
    /// probed and defaults are kept when none is found.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI progress setting
    pub fn with_progress(mut self, progress: Option<bool>) -> Self {
        if let Some(p) = progress {
            self.config.general.progress = p;
        }
        self
    }

    /// Override with CLI jar version
    pub fn with_version(mut self, version: Option<String>) -> Self {
        if let Some(v) = version {
            self.config.artifact.version = v;
        }
        self
    }

    /// Override with CLI cache directory
    pub fn with_cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir {
            self.config.artifact.cache_dir = Some(d);
        }
        self
    }

    /// Override with CLI java path
    pub fn with_java(mut self, java: Option<PathBuf>) -> Self {
        if let Some(j) = java {
            self.config.checker.java = Some(j);
        }
        self
    }

    /// Override with CLI first-check-only flag
    pub fn with_first_check_only(mut self, first_only: Option<bool>) -> Self {
        if let Some(f) = first_only {
            self.config.output.first_check_only = f;
        }
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.artifact.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
