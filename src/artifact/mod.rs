//! Formatter archive acquisition
//!
//! Builds repository URLs, downloads jars over HTTP and keeps them in a
//! per-user cache directory.

pub mod cache;
pub mod locator;
pub mod source;
pub mod verify;

pub use cache::{ArtifactCache, CachedArtifact};
pub use source::{ArtifactSource, Download, HttpSource};
pub use verify::{ExpectedSize, NoVerification, Verify};
