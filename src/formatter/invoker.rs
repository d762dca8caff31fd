//! Source Formatter invocation
//!
//! Runs the jar once against a base directory and reads back the JSON result
//! it writes to a temporary file.

use crate::domain::{Options, ResultSet};
use crate::error::FormatterError;
use crate::formatter::args::checker_arguments;
use crate::formatter::runtime::{CheckerCommand, ProcessRunner, RuntimeLocator};

use std::fs;
use std::path::Path;

/// Runs the checker and decodes its result file
pub struct FormatterInvoker<R: ProcessRunner> {
    runner: R,
    locator: RuntimeLocator,
    jvm_args: Vec<String>,
    fail_on_checker_error: bool,
}

impl<R: ProcessRunner> FormatterInvoker<R> {
    /// Create an invoker using `runner` and the runtime found by `locator`
    pub fn new(runner: R, locator: RuntimeLocator) -> Self {
        Self {
            runner,
            locator,
            jvm_args: Vec::new(),
            fail_on_checker_error: true,
        }
    }

    /// Extra arguments for the JVM, placed before `-jar`
    pub fn with_jvm_args(mut self, jvm_args: Vec<String>) -> Self {
        self.jvm_args = jvm_args;
        self
    }

    /// Treat a failed checker that wrote no result as an error
    pub fn with_fail_on_checker_error(mut self, fail: bool) -> Self {
        self.fail_on_checker_error = fail;
        self
    }

    /// Process runner used for the checker
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the checker on `options.base_dir()` using `jar`
    ///
    /// The checker may rewrite files under the base directory. An empty
    /// result file means no violations.
    pub fn format(&self, options: &Options, jar: &Path) -> Result<ResultSet, FormatterError> {
        options.validate()?;

        // Removed on drop, on every return path below.
        let output = tempfile::Builder::new()
            .prefix("temp-")
            .suffix(".json")
            .tempfile()?
            .into_temp_path();

        let args = checker_arguments(options, jar, &output, &self.jvm_args);
        let program = self.locator.locate()?;
        let exit = self.runner.run(&CheckerCommand { program, args })?;

        if !exit.success {
            log::warn!("Source Formatter exited with {}", exit.status_text());
        }

        let data = fs::read(&output)?;
        log::debug!("Result file {} has {} bytes", output.display(), data.len());

        if data.iter().all(u8::is_ascii_whitespace) {
            if !exit.success && self.fail_on_checker_error {
                return Err(FormatterError::CheckerFailed {
                    status: exit.status_text(),
                    detail: exit
                        .last_error_line()
                        .map(|line| format!(": {}", line))
                        .unwrap_or_default(),
                });
            }
            return Ok(ResultSet::default());
        }

        let result: ResultSet = serde_json::from_slice(&data)?;

        let counted = result.counted_violations();
        if counted != result.violations_count {
            log::warn!(
                "Checker reported {} violations but listed {}",
                result.violations_count,
                counted
            );
        }

        Ok(result)
    }
}
