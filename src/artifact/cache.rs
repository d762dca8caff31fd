//! Local artifact cache
//!
//! Keeps one jar per artifact version in a per-user directory. A missing jar
//! is downloaded once into a staging file next to its final path and renamed
//! into place only after the whole body was written and verified.

use crate::artifact::locator;
use crate::artifact::source::ArtifactSource;
use crate::artifact::verify::Verify;
use crate::domain::ArtifactCoordinates;
use crate::error::ArtifactError;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const STAGING_PREFIX: &str = ".download-";

/// A jar found in the cache directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedArtifact {
    pub file_name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Download-once cache of versioned jars
pub struct ArtifactCache<S: ArtifactSource> {
    dir: PathBuf,
    repository_url: String,
    source: S,
    show_progress: bool,
}

impl<S: ArtifactSource> ArtifactCache<S> {
    /// Create a cache rooted at `dir` that downloads from `repository_url`
    pub fn new(dir: impl Into<PathBuf>, repository_url: impl Into<String>, source: S) -> Self {
        Self {
            dir: dir.into(),
            repository_url: repository_url.into(),
            source,
            show_progress: true,
        }
    }

    /// Enable or disable the terminal progress bar
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the jar for `coords` lives, whether or not it exists yet
    pub fn jar_path(&self, coords: &ArtifactCoordinates) -> PathBuf {
        self.dir.join(coords.file_name())
    }

    /// Whether the jar for `coords` is already cached
    pub fn is_cached(&self, coords: &ArtifactCoordinates) -> bool {
        self.jar_path(coords).is_file()
    }

    /// Make sure the jar for `coords` is present and return its path
    ///
    /// An existing file is trusted as-is: no request is made and the
    /// verifier is not consulted.
    pub fn ensure(
        &self,
        coords: &ArtifactCoordinates,
        verifier: &dyn Verify,
    ) -> Result<PathBuf, ArtifactError> {
        create_private_dir(&self.dir)?;

        let path = self.jar_path(coords);
        if path.exists() {
            log::debug!("Using cached {}", path.display());
            return Ok(path);
        }

        let url = locator::jar_url(
            &self.repository_url,
            &coords.group,
            &coords.artifact,
            &coords.version,
        );
        log::info!("Downloading {} from {}", coords, url);

        let download = self.source.fetch(&url)?;

        // Dropping `staging` on any early return removes the partial file.
        let mut staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(".jar")
            .tempfile_in(&self.dir)?;

        let progress = self.progress_bar(download.content_length, &coords.file_name());
        let copied = io::copy(&mut progress.wrap_read(download.body), staging.as_file_mut());
        progress.finish_and_clear();
        let written = copied?;
        staging.as_file().sync_all()?;
        log::debug!("Downloaded {} bytes", written);

        verifier.verify(staging.path())?;

        staging
            .persist(&path)
            .map_err(|e| ArtifactError::Io(e.error))?;
        log::debug!("Installed {}", path.display());

        Ok(path)
    }

    /// Jars currently in the cache, sorted by file name
    pub fn list(&self) -> Result<Vec<CachedArtifact>, ArtifactError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut artifacts = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !file_name.ends_with(".jar") || file_name.starts_with(STAGING_PREFIX) {
                continue;
            }
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            artifacts.push(CachedArtifact {
                file_name,
                path: entry.path(),
                size_bytes: metadata.len(),
            });
        }

        artifacts.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(artifacts)
    }

    /// Delete every cached jar, returning how many were removed
    pub fn clean(&self) -> Result<usize, ArtifactError> {
        let artifacts = self.list()?;
        for artifact in &artifacts {
            fs::remove_file(&artifact.path)?;
            log::debug!("Removed {}", artifact.path.display());
        }
        Ok(artifacts.len())
    }

    fn progress_bar(&self, length: Option<u64>, file_name: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = match length {
            Some(len) => ProgressBar::new(len).with_style(
                ProgressStyle::with_template("{msg} {spinner} [{bar:16}] {bytes}/{total_bytes}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            ),
            None => ProgressBar::new_spinner().with_style(
                ProgressStyle::with_template("{msg} {spinner} {bytes}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            ),
        };

        bar.with_message(format!("Installing {}", file_name))
    }
}

/// Create `dir` and its parents, owner-only on Unix
fn create_private_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)
}
