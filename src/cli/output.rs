//! Output formatting utilities
//!
//! Provides text and JSON output for CLI commands, including the violation
//! report for a checker run.

use crate::artifact::CachedArtifact;
use crate::cli::args::OutputFormat;
use crate::domain::ResultSet;
use serde::{Serialize, Serializer};
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TextDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TextDisplay>(
    writer: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{}", data.to_text())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(writer, "{}", json)?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as terminal text
pub trait TextDisplay {
    /// Format as text, without a trailing newline
    fn to_text(&self) -> String;
}

/// How a checker run ended, from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No violations
    Clean,
    /// The checker reported this many violations
    Violations(usize),
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Violations(_) => 1,
        }
    }
}

/// Violation report for one checker run
pub struct Report<'a> {
    result_set: &'a ResultSet,
    first_check_only: bool,
}

impl<'a> Report<'a> {
    /// Report listing every check that has violations
    pub fn new(result_set: &'a ResultSet) -> Self {
        Self {
            result_set,
            first_check_only: false,
        }
    }

    /// Stop after the first check, whatever it contains
    pub fn with_first_check_only(mut self, first_only: bool) -> Self {
        self.first_check_only = first_only;
        self
    }

    /// Success or failure, decided by the checker's own count
    pub fn outcome(&self) -> Outcome {
        if self.result_set.is_clean() {
            Outcome::Clean
        } else {
            Outcome::Violations(self.result_set.violations_count)
        }
    }
}

impl Serialize for Report<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.result_set.serialize(serializer)
    }
}

impl TextDisplay for Report<'_> {
    fn to_text(&self) -> String {
        if self.result_set.is_clean() {
            return "No violations found 🌱".to_string();
        }

        let mut output = format!(
            "Number of violations: {}\n\n",
            self.result_set.violations_count
        );

        for check in &self.result_set.results {
            if !self.first_check_only && check.violations.is_empty() {
                continue;
            }

            output.push_str(&format!("Check: {}\n", check.name));
            for violation in &check.violations {
                output.push_str(&format!("\t{}\n", violation));
            }

            if self.first_check_only {
                break;
            }
        }

        output.truncate(output.trim_end_matches('\n').len());
        output
    }
}

/// Cache directory contents
#[derive(Debug, Clone, Serialize)]
pub struct CacheListing {
    pub directory: String,
    pub artifacts: Vec<CachedArtifact>,
}

impl TextDisplay for CacheListing {
    fn to_text(&self) -> String {
        let mut output = format!("Cache directory: {}\n", self.directory);

        if self.artifacts.is_empty() {
            output.push_str("  No cached jars");
            return output;
        }

        for artifact in &self.artifacts {
            output.push_str(&format!(
                "  {} ({} bytes)\n",
                artifact.file_name, artifact.size_bytes
            ));
        }

        output.truncate(output.trim_end_matches('\n').len());
        output
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TextDisplay for Message {
    fn to_text(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CheckResult, Violation};
    use std::path::PathBuf;

    fn result_set() -> ResultSet {
        ResultSet {
            results: vec![
                CheckResult {
                    name: "EmptyCheck".to_string(),
                    violations: vec![],
                },
                CheckResult {
                    name: "JavaStylingCheck".to_string(),
                    violations: vec![
                        Violation::new("A.java", "Missing blank line", 12),
                        Violation::new("B.java", "Bad import order", -1),
                    ],
                },
                CheckResult {
                    name: "XMLCheck".to_string(),
                    violations: vec![Violation::new("c.xml", "Unsorted attributes", 3)],
                },
            ],
            modified_file_names: vec![],
            violations_count: 3,
        }
    }

    #[test]
    fn test_clean_report() {
        let set = ResultSet::default();
        let report = Report::new(&set);
        assert_eq!(report.to_text(), "No violations found 🌱");
        assert_eq!(report.outcome(), Outcome::Clean);
        assert_eq!(report.outcome().exit_code(), 0);
    }

    #[test]
    fn test_zero_count_wins_over_listed_checks() {
        let mut set = result_set();
        set.violations_count = 0;
        let report = Report::new(&set);
        assert_eq!(report.outcome(), Outcome::Clean);
        assert_eq!(report.to_text(), "No violations found 🌱");
    }

    #[test]
    fn test_report_lists_every_check_with_violations() {
        let set = result_set();
        let report = Report::new(&set);

        assert_eq!(
            report.to_text(),
            "Number of violations: 3\n\n\
             Check: JavaStylingCheck\n\
             \tA.java: Missing blank line (line: 12)\n\
             \tB.java: Bad import order\n\
             Check: XMLCheck\n\
             \tc.xml: Unsorted attributes (line: 3)"
        );
        assert_eq!(report.outcome(), Outcome::Violations(3));
        assert_eq!(report.outcome().exit_code(), 1);
    }

    #[test]
    fn test_report_first_check_only() {
        let mut set = result_set();
        set.results.remove(0);
        let report = Report::new(&set).with_first_check_only(true);

        let text = report.to_text();
        assert!(text.contains("Check: JavaStylingCheck"));
        assert!(!text.contains("XMLCheck"));
        assert_eq!(report.outcome(), Outcome::Violations(3));
    }

    #[test]
    fn test_report_first_check_only_stops_at_empty_check() {
        let set = result_set();
        let report = Report::new(&set).with_first_check_only(true);

        assert_eq!(report.to_text(), "Number of violations: 3\n\nCheck: EmptyCheck");
        assert_eq!(report.outcome(), Outcome::Violations(3));
        assert_eq!(report.outcome().exit_code(), 1);
    }

    #[test]
    fn test_report_json_matches_checker_schema() {
        let set = result_set();
        let mut buf = Vec::new();
        write_output(&mut buf, &Report::new(&set), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["violationsCount"], 3);
        assert_eq!(value["checks"][1]["name"], "JavaStylingCheck");
        assert_eq!(value["checks"][1]["violations"][1]["lineNumber"], -1);
    }

    #[test]
    fn test_cache_listing_text() {
        let listing = CacheListing {
            directory: "/home/u/.local/share/liferay".to_string(),
            artifacts: vec![CachedArtifact {
                file_name: "sf-1.0.2.jar".to_string(),
                path: PathBuf::from("/home/u/.local/share/liferay/sf-1.0.2.jar"),
                size_bytes: 2048,
            }],
        };
        let text = listing.to_text();
        assert!(text.starts_with("Cache directory: /home/u/.local/share/liferay"));
        assert!(text.ends_with("sf-1.0.2.jar (2048 bytes)"));
    }

    #[test]
    fn test_message_display() {
        let msg = Message {
            message: "Operation completed".to_string(),
            success: true,
        };

        assert!(msg.to_text().starts_with('✓'));
    }
}
