//! Catalog -> grouping -> emission: one playlist pair per large enough category

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    catalog::loader,
    config::{Config, Thresholds},
    domain::dimension::Dimension,
    emit::{self, html, m3u, sanitize_filename},
    grouping::Grouping,
};

#[derive(Debug)]
pub struct CreatedPlaylist {
    pub dimension: Dimension,
    pub key: String,
    pub members: usize,
    pub m3u: PathBuf,
    pub html: PathBuf,
}

#[derive(Debug, Default)]
pub struct CategoryReport {
    pub created: Vec<CreatedPlaylist>,
    /// buckets below their dimension's threshold
    pub below_threshold: usize,
}

impl CategoryReport {
    pub fn count(&self, dimension: Dimension) -> usize {
        self.created
            .iter()
            .filter(|p| p.dimension == dimension)
            .count()
    }
}

/// Loads both catalogs from the configured paths and writes every category playlist.
pub fn run(config: &Config) -> anyhow::Result<CategoryReport> {
    println!("Reading real songs...");
    let real = loader::load_real(&config.dataset.real_songs)?;

    println!("Reading synthetic songs...");
    let synthetic = loader::load_synthetic(&config.dataset.fake_songs)?;

    let real_groups = Grouping::build(&real, Dimension::REAL);
    let synthetic_groups = Grouping::build(&synthetic, Dimension::SYNTHETIC);

    emit_all(
        &config.output.dir,
        &config.thresholds,
        &[&real_groups, &synthetic_groups],
    )
}

/// Writes `<out>/by_<dimension>/<key>.{m3u,html}` for every bucket meeting its threshold.
pub fn emit_all(
    out_dir: &Path,
    thresholds: &Thresholds,
    groupings: &[&Grouping<'_>],
) -> anyhow::Result<CategoryReport> {
    for dimension in Dimension::EMISSION_ORDER {
        let dir = out_dir.join(dimension.dir_name());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut report = CategoryReport::default();

    for &dimension in Dimension::EMISSION_ORDER {
        let Some(buckets) = groupings.iter().find_map(|g| g.dimension(dimension)) else {
            continue;
        };
        let threshold = thresholds.get(dimension);
        let dir = out_dir.join(dimension.dir_name());
        let mut used_names = HashSet::new();

        println!("\nCreating {dimension}-based playlists...");

        let below = buckets.len() - buckets.qualifying(threshold).count();
        if below > 0 {
            log::debug!("{below} {dimension} buckets have fewer than {threshold} songs");
        }
        report.below_threshold += below;

        for bucket in buckets.qualifying(threshold) {
            let name = sanitize_filename(&bucket.key);
            if name.is_empty() {
                log::warn!(
                    "{dimension} '{}' has no usable characters for a file name, skipping",
                    bucket.key
                );
                continue;
            }
            if !used_names.insert(name.clone()) {
                log::warn!(
                    "{dimension} '{}' maps to the same file name as an earlier {dimension}, skipping",
                    bucket.key
                );
                continue;
            }

            let m3u_path = dir.join(format!("{name}.m3u"));
            emit::write_artifact(
                &m3u_path,
                &m3u::render(&dimension.playlist_title(&bucket.key), &bucket.members),
            )?;

            let html_path = dir.join(format!("{name}.html"));
            emit::write_artifact(
                &html_path,
                &html::render(
                    &dimension.page_title(&bucket.key, bucket.len()),
                    &bucket.members,
                ),
            )?;

            println!(
                "  Created playlist for {dimension} '{}' ({} songs)",
                bucket.key,
                bucket.len()
            );
            report.created.push(CreatedPlaylist {
                dimension,
                key: bucket.key.clone(),
                members: bucket.len(),
                m3u: m3u_path,
                html: html_path,
            });
        }
    }

    log::info!(
        "Created {} category playlists, {} categories below threshold",
        report.created.len(),
        report.below_threshold
    );
    Ok(report)
}
