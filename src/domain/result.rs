//! Checker result domain types
//!
//! Mirrors the JSON document the Source Formatter writes to its output file:
//! `{ checks: [{ name, violations: [{ fileName, message, lineNumber }] }],
//! modifiedFileNames: [...], violationsCount: N }`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Everything one checker run reported
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Per-check results, in checker order
    #[serde(rename = "checks", default, deserialize_with = "null_as_default")]
    pub results: Vec<CheckResult>,
    /// Files the checker rewrote
    #[serde(default, deserialize_with = "null_as_default")]
    pub modified_file_names: Vec<String>,
    /// Total reported by the checker
    #[serde(default)]
    pub violations_count: usize,
}

impl ResultSet {
    /// Whether the checker reported no violations
    pub fn is_clean(&self) -> bool {
        self.violations_count == 0
    }

    /// Total number of violations actually listed
    pub fn counted_violations(&self) -> usize {
        self.results.iter().map(|r| r.violations.len()).sum()
    }
}

/// Violations reported by a single check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub violations: Vec<Violation>,
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "no_line")]
    pub line_number: i64,
}

impl Violation {
    /// Sentinel the checker uses when a violation has no line
    pub const NO_LINE: i64 = -1;

    pub fn new(file_name: impl Into<String>, message: impl Into<String>, line_number: i64) -> Self {
        Self {
            file_name: file_name.into(),
            message: message.into(),
            line_number,
        }
    }

    /// Line number, unless the checker reported the sentinel
    pub fn line(&self) -> Option<i64> {
        (self.line_number != Self::NO_LINE).then_some(self.line_number)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line() {
            Some(line) => write!(f, "{}: {} (line: {})", self.file_name, self.message, line),
            None => write!(f, "{}: {}", self.file_name, self.message),
        }
    }
}

fn no_line() -> i64 {
    Violation::NO_LINE
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
