//! Copy pass over the demo table.

use anyhow::{Context, Result};
use typeddocs_publish::{CopySpec, PublishConfig, Publisher};

/// Publish the demo table relative to the working directory.
pub fn run() -> Result<()> {
    let config = PublishConfig::default();
    let spec = CopySpec::typed_demo();

    tracing::info!(
        "Publishing {} files to {}",
        spec.len(),
        config.docs_dir.display()
    );

    let result = Publisher::new(config)
        .publish(&spec)
        .context("Failed to update docs")?;

    tracing::info!("Copied {} files in {}ms", result.files, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
