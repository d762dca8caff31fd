//! Domain models for source-format
//!
//! Run options, artifact coordinates and the checker's result document.

pub mod artifact;
pub mod options;
pub mod result;

pub use artifact::ArtifactCoordinates;
pub use options::Options;
pub use result::{CheckResult, ResultSet, Violation};
