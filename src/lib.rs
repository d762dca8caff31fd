//! source-format - Liferay Source Formatter front end
//!
//! This library downloads a versioned Source Formatter jar into a per-user
//! cache, runs it against a directory and renders its JSON result.
//!
//! # Modules
//!
//! - [`artifact`]: Repository URLs, downloads and the jar cache
//! - [`cli`]: Command-line interface definitions and output
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Run options and checker results
//! - [`error`]: Error types
//! - [`formatter`]: Checker process invocation

pub mod artifact;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
