//! Cache command implementation
//!
//! Inspects and maintains the directory of downloaded jars.

use crate::artifact::{verify, ArtifactCache, HttpSource};
use crate::cli::args::{CacheArgs, CacheCommands, OutputFormat};
use crate::cli::output::{print_output, CacheListing, Message};
use crate::config::Config;
use crate::error::Result;

/// Execute cache commands
pub fn run_cache(args: &CacheArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let cache_dir = config.artifact.resolve_cache_dir()?;

    let cache = ArtifactCache::new(
        cache_dir,
        config.artifact.repository_url.clone(),
        HttpSource::new(),
    )
    .with_progress(config.general.progress);

    match &args.command {
        CacheCommands::Path => {
            println!("{}", cache.dir().display());
        }
        CacheCommands::List => {
            let listing = CacheListing {
                directory: cache.dir().display().to_string(),
                artifacts: cache.list()?,
            };
            print_output(&listing, format)?;
        }
        CacheCommands::Fetch => {
            let coords = config.artifact.coordinates();
            let already = cache.is_cached(&coords);
            let verifier = verify::from_expected_size(config.artifact.expected_size);
            let path = cache.ensure(&coords, verifier.as_ref())?;

            let message = if already {
                format!("{} already cached at {}", coords, path.display())
            } else {
                format!("Installed {} at {}", coords, path.display())
            };
            print_output(
                &Message {
                    message,
                    success: true,
                },
                format,
            )?;
        }
        CacheCommands::Clean => {
            let removed = cache.clean()?;
            print_output(
                &Message {
                    message: format!("Removed {} cached jar(s)", removed),
                    success: true,
                },
                format,
            )?;
        }
    }

    Ok(())
}
