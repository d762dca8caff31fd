//! Java runtime lookup and process execution
//!
//! These seams let the invoker be tested with a scripted runner instead of a
//! real JVM.

use crate::error::FormatterError;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A fully resolved checker invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl CheckerCommand {
    /// Value of a `key=value` argument, if present and valid UTF-8
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.args.iter().find_map(|arg| {
            arg.to_str()?
                .strip_prefix(key)?
                .strip_prefix('=')
        })
    }
}

impl fmt::Display for CheckerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How the checker process ended
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckerExit {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CheckerExit {
    /// Human-readable exit status
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }

    /// Last non-blank line the checker wrote to stderr
    pub fn last_error_line(&self) -> Option<&str> {
        self.stderr
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| !line.is_empty())
    }
}

/// Trait for running the checker to completion
pub trait ProcessRunner {
    /// Run `command` synchronously
    fn run(&self, command: &CheckerCommand) -> Result<CheckerExit, FormatterError>;
}

/// Runs the checker as a child process of this one
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CheckerCommand) -> Result<CheckerExit, FormatterError> {
        log::debug!("Running {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| FormatterError::Spawn {
                program: command.program.display().to_string(),
                source,
            })?;

        let exit = CheckerExit {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        for line in exit.stdout.lines() {
            log::debug!("[stdout] {}", line);
        }
        for line in exit.stderr.lines() {
            log::debug!("[stderr] {}", line);
        }

        Ok(exit)
    }
}

/// Finds a `java` executable
#[derive(Debug, Clone, Default)]
pub struct RuntimeLocator {
    configured: Option<PathBuf>,
    java_home: Option<PathBuf>,
}

impl RuntimeLocator {
    /// Locator honouring an explicit path and `JAVA_HOME`
    pub fn new(configured: Option<PathBuf>) -> Self {
        Self {
            configured,
            java_home: std::env::var_os("JAVA_HOME").map(PathBuf::from),
        }
    }

    /// Override the `JAVA_HOME` value
    pub fn with_java_home(mut self, java_home: Option<PathBuf>) -> Self {
        self.java_home = java_home;
        self
    }

    /// Resolve the executable: configured path, then `JAVA_HOME`, then `PATH`
    pub fn locate(&self) -> Result<PathBuf, FormatterError> {
        if let Some(path) = &self.configured {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(FormatterError::RuntimeNotFound(format!(
                "{} is not a file",
                path.display()
            )));
        }

        if let Some(home) = &self.java_home {
            let candidate = home.join("bin").join(java_executable());
            if candidate.is_file() {
                return Ok(candidate);
            }
            log::debug!("JAVA_HOME has no {}", candidate.display());
        }

        which::which("java")
            .map_err(|e| FormatterError::RuntimeNotFound(format!("java: {}", e)))
    }
}

fn java_executable() -> &'static str {
    if cfg!(windows) {
        "java.exe"
    } else {
        "java"
    }
}
