//! Source Formatter process invocation
//!
//! Translates run options into jar arguments, locates a Java runtime and
//! reads back the checker's JSON result.

pub mod args;
pub mod invoker;
pub mod runtime;

pub use invoker::FormatterInvoker;
pub use runtime::{CheckerCommand, CheckerExit, ProcessRunner, RuntimeLocator, SystemRunner};
