//! Unified error types for source-format
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid user input (arguments, directories)
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while acquiring the formatter archive
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Error while running the formatter
    #[error("Formatter error: {0}")]
    Formatter(#[from] FormatterError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from user input validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// More than one positional directory was given
    #[error("too many arguments")]
    TooManyArguments,

    /// The target directory does not exist
    #[error("{0} does not exist")]
    DirectoryNotFound(String),

    /// Options were built without a base directory
    #[error("specify base directory")]
    EmptyBaseDirectory,
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Per-user data directory could not be determined
    #[error("Cannot determine the user data directory; set [artifact].cache_dir or --cache-dir")]
    NoDataDirectory,

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from downloading and caching the formatter archive
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// Request could not be sent or the connection failed
    #[error("Download of {url} failed: {message}")]
    Network { url: String, message: String },

    /// Repository answered with something other than 200 OK
    #[error("Received HTTP status code: {code} {reason} ({url})")]
    HttpStatus {
        url: String,
        code: u16,
        reason: String,
    },

    /// Downloaded file did not pass verification
    #[error("Verification of {path} failed: {message}")]
    Verification { path: String, message: String },

    /// Filesystem error in the cache directory
    #[error("Cache IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from invoking the external checker
#[derive(Error, Debug)]
pub enum FormatterError {
    /// Options failed validation
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] DomainError),

    /// No Java runtime could be located
    #[error("Java runtime not found: {0}")]
    RuntimeNotFound(String),

    /// The checker process could not be started
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The checker exited unsuccessfully and produced no result
    #[error("Source Formatter exited with {status} and produced no result{detail}")]
    CheckerFailed { status: String, detail: String },

    /// The result file could not be read
    #[error("Cannot read result file: {0}")]
    Io(#[from] std::io::Error),

    /// The result file is not valid result JSON
    #[error("Cannot decode result file: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
