//! Outputs that play real songs through yt-dlp instead of raw watch urls

use std::path::PathBuf;

use anyhow::Context;

use crate::{
    catalog::loader,
    config::Config,
    domain::song::SongRecord,
    emit::{self, m3u, mpv, web_player},
};

pub const SOLUTIONS_DIR: &str = "working_solutions";

const README: &str = r#"# YouTube Playlist Solutions

## The Problem
Direct YouTube URLs don't work with mpv/VLC due to anti-bot protections (HTTP 403 errors).

## Working Solutions

### 1. mpv + yt-dlp (Recommended for terminal)
```bash
# Install yt-dlp first
pip install yt-dlp

# Then run the script
./play_with_mpv.sh        # Play all songs
./play_with_mpv.sh 5      # Play song #5
```

### 2. Web Player (Recommended for GUI)
Open `web_player.html` in your browser. Features:
- Embedded YouTube players
- Playlist navigation
- Copy URLs to clipboard
- Direct YouTube links

### 3. VLC with yt-dlp
```bash
vlc "$(yt-dlp -g 'https://www.youtube.com/watch?v=VIDEO_ID')"
```

### 4. Browser-based (Simplest)
Open the HTML playlists in your browser and click the YouTube links.

## Why Direct URLs Don't Work
YouTube uses dynamic URLs that expire, bot detection, geographic
restrictions and rate limiting. yt-dlp extracts the actual stream URLs
when the song is played.
"#;

/// Writes the mpv script, web player, playable m3u and instructions for the real catalog.
pub fn run(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let records = loader::load_real(&config.dataset.real_songs)?;
    let refs: Vec<&SongRecord> = records.iter().collect();

    let dir = config.output.dir.join(SOLUTIONS_DIR);
    std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    println!("Creating working YouTube playlist solutions...");

    let mpv_path = dir.join("play_with_mpv.sh");
    emit::write_script(
        &mpv_path,
        &mpv::render(
            "YouTube Playlist (mpv + yt-dlp)",
            &refs,
            &config.player.mpv_ytdl_format,
        )?,
    )?;
    println!("Created mpv script: {}", mpv_path.display());

    let player_path = dir.join("web_player.html");
    emit::write_artifact(&player_path, &web_player::render("YouTube Web Player", &refs))?;
    println!("Created web player: {}", player_path.display());

    let m3u_path = dir.join("playlist.m3u");
    emit::write_artifact(&m3u_path, &m3u::render_playable("YouTube Playlist", &refs))?;
    println!("Created playlist: {}", m3u_path.display());

    let readme_path = dir.join("README.md");
    emit::write_artifact(&readme_path, README)?;
    println!("Created instructions: {}", readme_path.display());

    Ok(vec![mpv_path, player_path, m3u_path, readme_path])
}
