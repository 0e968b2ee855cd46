//! Pairs a real song id with its synthetic counterpart

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use crate::{catalog, config::Config};

/// Resolves the synthetic filename for `real_id`, optionally copying the audio
/// file out of a local dataset copy next to the synthetic catalog.
pub fn find(
    config: &Config,
    real_id: &str,
    copy_from: Option<&Path>,
) -> anyhow::Result<(String, Option<PathBuf>)> {
    let filename = catalog::lookup_synthetic_filename(&config.dataset.fake_songs, real_id)?;
    println!("{real_id} -> {filename}");

    let Some(download_dir) = copy_from else {
        return Ok((filename, None));
    };

    let source = download_dir.join("fake_songs").join(&filename);
    if !source.exists() {
        bail!("File {} not found in downloaded dataset", source.display());
    }

    let dest_dir = config
        .dataset
        .fake_songs
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let dest = dest_dir.join(&filename);
    std::fs::copy(&source, &dest)
        .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))?;

    println!("Copied {filename} to {}", dest_dir.display());
    Ok((filename, Some(dest)))
}
