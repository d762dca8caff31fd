//! Run options domain type
//!
//! Options are built once from the command line and never mutated afterwards.

use crate::error::DomainError;
use std::path::{Path, PathBuf};

/// User-supplied configuration for one formatter run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    base_dir: PathBuf,
    checks: Vec<String>,
    filetypes: Vec<String>,
    skip_checks: Vec<String>,
    include_generated: bool,
    include_subrepositories: bool,
}

impl Options {
    /// Create options for the given base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Only run the named checks
    pub fn with_checks(mut self, checks: Vec<String>) -> Self {
        self.checks = normalize(checks);
        self
    }

    /// Restrict checks to these file extensions
    pub fn with_filetypes(mut self, filetypes: Vec<String>) -> Self {
        self.filetypes = normalize(filetypes);
        self
    }

    /// Skip the named checks
    pub fn with_skip_checks(mut self, skip_checks: Vec<String>) -> Self {
        self.skip_checks = normalize(skip_checks);
        self
    }

    /// Include generated files
    pub fn with_generated(mut self, include: bool) -> Self {
        self.include_generated = include;
        self
    }

    /// Include subrepositories
    pub fn with_subrepositories(mut self, include: bool) -> Self {
        self.include_subrepositories = include;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn checks(&self) -> &[String] {
        &self.checks
    }

    pub fn filetypes(&self) -> &[String] {
        &self.filetypes
    }

    pub fn skip_checks(&self) -> &[String] {
        &self.skip_checks
    }

    pub fn include_generated(&self) -> bool {
        self.include_generated
    }

    pub fn include_subrepositories(&self) -> bool {
        self.include_subrepositories
    }

    /// Check that the options can be handed to the formatter
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(DomainError::EmptyBaseDirectory);
        }
        Ok(())
    }
}

// Drops blanks left by inputs like `--only=A,,B` or a trailing comma.
fn normalize(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let opts = Options::new("./")
            .with_checks(vec!["GradleImportsCheck".to_string()])
            .with_filetypes(vec!["java".to_string(), "xml".to_string()])
            .with_generated(true);

        assert_eq!(opts.base_dir(), Path::new("./"));
        assert_eq!(opts.checks(), ["GradleImportsCheck"]);
        assert_eq!(opts.filetypes().len(), 2);
        assert!(opts.skip_checks().is_empty());
        assert!(opts.include_generated());
        assert!(!opts.include_subrepositories());
    }

    #[test]
    fn test_options_empty_base_dir() {
        let opts = Options::new("");
        assert_eq!(opts.validate(), Err(DomainError::EmptyBaseDirectory));
    }

    #[test]
    fn test_options_blank_entries_dropped() {
        let opts = Options::new(".").with_skip_checks(vec![
            "JavaStylingCheck".to_string(),
            " ".to_string(),
            String::new(),
        ]);
        assert_eq!(opts.skip_checks(), ["JavaStylingCheck"]);
    }
}
