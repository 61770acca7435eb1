//! Copies the publishing table into the docs directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::spec::{CopyEntry, CopySpec};

/// Configuration for a publish run.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Directory that source and docs paths are relative to (empty = working directory)
    pub root: PathBuf,

    /// Destination directory, must already exist
    pub docs_dir: PathBuf,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            docs_dir: PathBuf::from("docs"),
        }
    }
}

/// Result of a publish run.
#[derive(Debug)]
pub struct PublishResult {
    /// Number of files copied
    pub files: usize,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Directory the files were written to
    pub output_dir: PathBuf,
}

/// Errors that can occur while publishing.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Source not found: {}: {message}", .path.display())]
    SourceNotFound { path: PathBuf, message: String },

    #[error("Failed to write destination: {}: {message}", .path.display())]
    DestinationWrite { path: PathBuf, message: String },
}

/// Copies every entry of a [`CopySpec`] into the docs directory.
pub struct Publisher {
    config: PublishConfig,
}

impl Publisher {
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    /// Directory files are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.config.root.join(&self.config.docs_dir)
    }

    /// Run the copy pass followed by the post-process pass.
    pub fn publish(&self, spec: &CopySpec) -> Result<PublishResult, PublishError> {
        let start = Instant::now();

        let files = self.copy_all(spec)?;
        self.post_process(spec)?;

        Ok(PublishResult {
            files,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.output_dir(),
        })
    }

    /// Copy every entry, stopping at the first failure.
    ///
    /// Existing destination files are overwritten. Files copied before a
    /// failure are left in place.
    pub fn copy_all(&self, spec: &CopySpec) -> Result<usize, PublishError> {
        let output_dir = self.output_dir();
        let mut copied = 0;

        for entry in spec {
            self.copy_entry(entry, &output_dir)?;
            copied += 1;
        }

        Ok(copied)
    }

    /// Edit files after they have been copied.
    ///
    /// Currently does nothing and touches no files.
    // TODO: load the compressed bundles from docs/index.html instead of the
    // uncompressed ones, change its <title>, and drop the path and media
    // properties from the workspace options.
    pub fn post_process(&self, spec: &CopySpec) -> Result<(), PublishError> {
        tracing::debug!("Post-processing {} published files (no-op)", spec.len());
        Ok(())
    }

    fn copy_entry(&self, entry: &CopyEntry, output_dir: &Path) -> Result<(), PublishError> {
        let src = self.config.root.join(entry.resolved_source());
        let dest = output_dir.join(&entry.destination);

        check_source(&src)?;

        fs::copy(&src, &dest).map_err(|e| PublishError::DestinationWrite {
            path: dest.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!("Copied {} -> {}", src.display(), dest.display());

        Ok(())
    }
}

/// Make sure the source is a regular file that can be opened for reading.
fn check_source(path: &Path) -> Result<(), PublishError> {
    let not_found = |message: String| PublishError::SourceNotFound {
        path: path.to_path_buf(),
        message,
    };

    let file = File::open(path).map_err(|e| not_found(e.to_string()))?;
    let metadata = file.metadata().map_err(|e| not_found(e.to_string()))?;

    if !metadata.is_file() {
        return Err(not_found("not a regular file".to_string()));
    }

    Ok(())
}
