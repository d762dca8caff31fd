//! source-format - Liferay Source Formatter CLI
//!
//! Runs the Liferay Source Formatter against a directory and prints the
//! violations it reports.

use source_format::cli::args::{generate_completions, Cli, Commands};
use source_format::cli::output::Outcome;
use source_format::commands::{run_cache, run_format};
use source_format::config::{Config, ConfigBuilder};
use source_format::error::{AppError, ArtifactError, FormatterError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse_args(std::env::args_os());

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    };

    // Initialize logging; verbose comes from the flag or the config file
    let default_filter = if config.general.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(&cli, &config) {
        Ok(Outcome::Clean) => {}
        Ok(outcome @ Outcome::Violations(_)) => {
            eprintln!("Source Formatter issues found.");
            std::process::exit(outcome.exit_code());
        }
        Err(e) => {
            log::debug!("{:?}", e);
            print_error(&e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<Outcome, AppError> {
    match &cli.command {
        None => run_format(&cli.run, config, cli.format),

        Some(Commands::Cache(args)) => {
            run_cache(args, config, cli.format)?;
            Ok(Outcome::Clean)
        }

        Some(Commands::Completions { shell }) => {
            generate_completions(*shell);
            Ok(Outcome::Clean)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_progress(cli.no_progress.then_some(false))
        .with_version(cli.jar_version.clone())
        .with_cache_dir(cli.cache_dir.clone())
        .with_java(cli.java.clone())
        .with_first_check_only(cli.run.first_check_only.then_some(true))
        .build()?;
    Ok(config)
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Formatter(FormatterError::RuntimeNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Source Formatter needs a Java runtime.");
            eprintln!("      Install a JDK, set JAVA_HOME, or pass --java <path>.");
        }
        AppError::Artifact(ArtifactError::HttpStatus { code: 404, .. }) => {
            eprintln!();
            eprintln!("Hint: Check that the Source Formatter version exists (--jar-version).");
        }
        _ => {}
    }
}
