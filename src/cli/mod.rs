use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::pipeline::{categories, song_list, synthetic, youtube};

#[derive(Parser)]
#[command(name = "sonics-playlists")]
#[command(version = "0.1")]
#[command(about = "Playlist generator for the SONICS real/synthetic song dataset")]
pub struct Cli {
    /// Path to a config TOML file. Built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create per-category playlists (genre, mood, artist, year, ...)
    Categories,
    /// Write the flat song list from the real songs catalog
    ExportList,
    /// Create m3u, xspf, json, html and a VLC launcher from the flat song list
    Playlists,
    /// Create mpv and web player playlists that work with yt-dlp
    Youtube,
    /// Find the synthetic song paired with a real song id, e.g. real_04742
    FindFake {
        real_id: String,
        /// Copy the audio file out of the local dataset copy at dataset.download_dir
        #[arg(long)]
        copy: bool,
    },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::Config::load_or_default(cli.config.as_deref())?;

    match &cli.command {
        Commands::Categories => {
            let report = categories::run(&cfg)?;

            println!("\nCategory-based playlists created!");
            println!("Check the following directories:");
            for dimension in crate::domain::dimension::Dimension::EMISSION_ORDER {
                println!(
                    "  - {}/ ({} playlists)",
                    cfg.output.dir.join(dimension.dir_name()).display(),
                    report.count(*dimension)
                );
            }
        }

        Commands::ExportList => {
            song_list::export(&cfg)?;
        }

        Commands::Playlists => {
            let report = song_list::create_playlists(&cfg)?;
            println!(
                "\nAll playlists for {} songs created in '{}'",
                report.songs,
                cfg.output.dir.display()
            );
        }

        Commands::Youtube => {
            youtube::run(&cfg)?;
            println!(
                "\nSolutions created! Check {}",
                cfg.output.dir.join(youtube::SOLUTIONS_DIR).display()
            );
        }

        Commands::FindFake { real_id, copy } => {
            let copy_from = if *copy {
                let dir = cfg.dataset.download_dir.as_deref().ok_or_else(|| {
                    anyhow::anyhow!("--copy needs dataset.download_dir set in the config")
                })?;
                Some(dir)
            } else {
                None
            };
            synthetic::find(&cfg, real_id, copy_from)?;
        }
    }

    Ok(())
}
