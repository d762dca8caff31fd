//! Format command implementation
//!
//! Downloads the formatter jar if needed, runs it on the target directory and
//! reports its violations.

use crate::artifact::{verify, ArtifactCache, ArtifactSource, HttpSource};
use crate::cli::args::{OutputFormat, RunArgs};
use crate::cli::output::{write_output, Outcome, Report};
use crate::config::Config;
use crate::domain::Options;
use crate::error::Result;
use crate::formatter::{FormatterInvoker, ProcessRunner, RuntimeLocator, SystemRunner};

use std::io::{self, Write};

/// Execute a formatter run
pub fn run_format(args: &RunArgs, config: &Config, format: OutputFormat) -> Result<Outcome> {
    // Argument errors must surface before any download or process starts.
    let options = args.to_options()?;

    let cache_dir = config.artifact.resolve_cache_dir()?;
    log::debug!("Cache directory: {}", cache_dir.display());

    let cache = ArtifactCache::new(
        cache_dir,
        config.artifact.repository_url.clone(),
        HttpSource::new(),
    )
    .with_progress(config.general.progress);
    let invoker = build_invoker(SystemRunner, config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    format_directory(&options, config, &cache, &invoker, format, &mut handle)
}

/// Invoker configured from the `[checker]` section
pub fn build_invoker<R: ProcessRunner>(runner: R, config: &Config) -> FormatterInvoker<R> {
    FormatterInvoker::new(runner, RuntimeLocator::new(config.checker.java.clone()))
        .with_jvm_args(config.checker.jvm_args.clone())
        .with_fail_on_checker_error(config.checker.fail_on_checker_error)
}

/// Fetch the configured jar, run it on `options` and write the report to `out`
pub fn format_directory<S, R, W>(
    options: &Options,
    config: &Config,
    cache: &ArtifactCache<S>,
    invoker: &FormatterInvoker<R>,
    format: OutputFormat,
    out: &mut W,
) -> Result<Outcome>
where
    S: ArtifactSource,
    R: ProcessRunner,
    W: Write,
{
    let verifier = verify::from_expected_size(config.artifact.expected_size);
    let jar = cache.ensure(&config.artifact.coordinates(), verifier.as_ref())?;

    let result_set = invoker.format(options, &jar)?;

    let report = Report::new(&result_set).with_first_check_only(config.output.first_check_only);
    write_output(out, &report, format)?;

    Ok(report.outcome())
}
