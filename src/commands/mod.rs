//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod cache;
pub mod format;

pub use cache::run_cache;
pub use format::run_format;
