//! Flat song list: exported from the real catalog, turned into playlists of every format

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    catalog::{error::CatalogError, listing, loader},
    config::Config,
    domain::song::SongRecord,
    emit::{
        self, html, json,
        launcher::{self, Shell},
        m3u, xspf,
    },
};

const PLAYLIST_NAME: &str = "Real Songs Playlist";

/// Writes the flat song list for the configured real catalog.
pub fn export(config: &Config) -> anyhow::Result<usize> {
    let records = loader::load_real(&config.dataset.real_songs)?;
    let path = &config.dataset.song_list;

    ensure_parent(path)?;
    emit::write_artifact(path, &listing::export(&records))?;

    println!(
        "Processing complete. {} songs written to {}.",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

#[derive(Debug)]
pub struct SongListReport {
    pub songs: usize,
    pub suspect_splits: usize,
    pub skipped_lines: usize,
    pub files: Vec<PathBuf>,
}

/// Reads the flat song list and writes it out as m3u, xspf, json, html and a launcher script.
pub fn create_playlists(config: &Config) -> anyhow::Result<SongListReport> {
    let input = &config.dataset.song_list;
    if !input.exists() {
        return Err(CatalogError::FileNotFound(input.clone()).into());
    }

    println!("Parsing {}...", input.display());
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let parsed = listing::parse(&text);
    let records = parsed.records();
    let refs: Vec<&SongRecord> = records.iter().collect();
    println!("Found {} songs", records.len());

    let out_dir = &config.output.dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let shell = Shell::native();

    let mut files = Vec::new();
    let mut write = |name: String, contents: String, script: bool| -> anyhow::Result<()> {
        let path = out_dir.join(name);
        if script {
            emit::write_script(&path, &contents)?;
        } else {
            emit::write_artifact(&path, &contents)?;
        }
        println!("Created {}", path.display());
        files.push(path);
        Ok(())
    };

    write("real_songs.m3u".into(), m3u::render(PLAYLIST_NAME, &refs), false)?;
    write("real_songs.xspf".into(), xspf::render(PLAYLIST_NAME, &refs), false)?;
    write(
        "real_songs.json".into(),
        json::render(PLAYLIST_NAME, &format!("Generated from {source_name}"), &refs)?,
        false,
    )?;
    write(
        "real_songs.html".into(),
        html::render(&format!("{PLAYLIST_NAME} ({} songs)", refs.len()), &refs),
        false,
    )?;
    write(
        format!("play_all_vlc.{}", shell.script_extension()),
        launcher::render(PLAYLIST_NAME, &refs, shell, &config.player.vlc_windows_path)?,
        true,
    )?;

    let suspect_splits = parsed.suspect_count();
    if suspect_splits > 0 {
        println!(
            "{suspect_splits} lines had an uncertain title/artist split, check the warnings above"
        );
    }

    Ok(SongListReport {
        songs: records.len(),
        suspect_splits,
        skipped_lines: parsed.skipped.len(),
        files,
    })
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}
