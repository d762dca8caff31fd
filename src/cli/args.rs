//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::Options;
use crate::error::DomainError;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const EXAMPLES: &str = "\
Examples:
  # Run Source Formatter on directory '~/code'
  $ source-format ~/code

  # Run only 'GradleDependenciesCheck' and 'GradleImportsCheck'
  $ source-format --only=GradleDependenciesCheck,GradleImportsCheck

  # Run only on Java and XML files
  $ source-format --filetypes=java,xml

  # Skip running 'JavaStylingCheck'
  $ source-format --skip=JavaStylingCheck";

/// Liferay Source Formatter CLI
///
/// Run Liferay Source Formatter as a CLI.
#[derive(Parser, Debug)]
#[command(name = "source-format")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SOURCE_FORMAT_CONFIG")]
    pub config: Option<String>,

    /// Directory holding downloaded Source Formatter jars
    #[arg(long, global = true, env = "SOURCE_FORMAT_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Source Formatter jar version to use
    #[arg(long, global = true, value_name = "VERSION")]
    pub jar_version: Option<String>,

    /// Path to the java executable
    #[arg(long, global = true, value_name = "PATH")]
    pub java: Option<PathBuf>,

    /// Hide the download progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse arguments, exiting with clap's message on failure
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_args(args).unwrap_or_else(|e| e.exit())
    }

    /// Parse arguments, reading a subcommand name as a directory when a
    /// directory of that name exists and the subcommand parse fails
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_with(args, |arg| Path::new(arg).is_dir())
    }

    fn try_parse_with<I, T>(args: I, is_dir: impl Fn(&OsStr) -> bool) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let err = match Self::try_parse_from(&args) {
            Ok(cli) => return Ok(cli),
            Err(err) => err,
        };

        let command = Self::command();
        let shadowed = args.iter().skip(1).position(|arg| {
            command.get_subcommands().any(|sub| arg == sub.get_name()) && is_dir(arg.as_os_str())
        });

        match shadowed {
            Some(index) => {
                // Everything after `--` is positional, so clap skips the
                // subcommand lookup for the directory.
                let mut rewritten = args.clone();
                let dir = rewritten.remove(index + 1);
                rewritten.push(OsString::from("--"));
                rewritten.push(dir);
                Self::try_parse_from(rewritten).map_err(|_| err)
            }
            None => Err(err),
        }
    }
}

/// Arguments for a formatter run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Directory to format (default: current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<String>,

    /// Only run specified checks
    #[arg(long, value_delimiter = ',', value_name = "CHECKS")]
    pub only: Vec<String>,

    /// Run checks only on specified filetypes
    #[arg(long, value_delimiter = ',', value_name = "EXTENSIONS")]
    pub filetypes: Vec<String>,

    /// Skip specified checks
    #[arg(long, value_delimiter = ',', value_name = "CHECKS")]
    pub skip: Vec<String>,

    /// Format generated files
    #[arg(long)]
    pub generated: bool,

    /// Format subrepositories
    #[arg(long)]
    pub subrepositories: bool,

    /// Stop the report after the first check
    #[arg(long)]
    pub first_check_only: bool,
}

impl RunArgs {
    /// Validate the positional directory and build run options
    ///
    /// Touches nothing but the filesystem metadata of the directory.
    pub fn to_options(&self) -> Result<Options, DomainError> {
        let base_dir = match self.directories.as_slice() {
            [] => "./",
            [dir] => dir.as_str(),
            _ => return Err(DomainError::TooManyArguments),
        };

        if !Path::new(base_dir).exists() {
            return Err(DomainError::DirectoryNotFound(base_dir.to_string()));
        }

        Ok(Options::new(base_dir)
            .with_checks(self.only.clone())
            .with_filetypes(self.filetypes.clone())
            .with_skip_checks(self.skip.clone())
            .with_generated(self.generated)
            .with_subrepositories(self.subrepositories))
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage downloaded Source Formatter jars
    Cache(CacheArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for cache commands
#[derive(Parser, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Print the cache directory
    Path,

    /// List cached jars
    List,

    /// Download the configured jar without running it
    Fetch,

    /// Delete all cached jars
    Clean,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
