use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

use crate::{domain::dimension::Dimension, emit::launcher::DEFAULT_WINDOWS_VLC};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub dataset: Dataset,
    pub output: Output,
    pub thresholds: Thresholds,
    pub player: Player,
}

impl Config {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }

    /// Config from the given file, or the built-in defaults when no file is given
    pub fn load_or_default(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Config::default()),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Dataset {
    pub real_songs: PathBuf,
    pub fake_songs: PathBuf,
    pub song_list: PathBuf,
    /// local copy of the full dataset, with a `fake_songs/` directory of audio files
    pub download_dir: Option<PathBuf>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            real_songs: PathBuf::from("dataset/real_songs.csv"),
            fake_songs: PathBuf::from("dataset/fake_songs.csv"),
            song_list: PathBuf::from("dataset/all_real_songs.txt"),
            download_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Output {
    pub dir: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("playlists"),
        }
    }
}

/// Per-dimension overrides of the minimum bucket size
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub artist: Option<usize>,
    pub year: Option<usize>,
    pub decade: Option<usize>,
    pub label: Option<usize>,
    pub genre: Option<usize>,
    pub mood: Option<usize>,
    pub topic: Option<usize>,
    pub style: Option<usize>,
    pub algorithm: Option<usize>,
}

impl Thresholds {
    pub fn get(&self, dimension: Dimension) -> usize {
        let configured = match dimension {
            Dimension::Artist => self.artist,
            Dimension::Year => self.year,
            Dimension::Decade => self.decade,
            Dimension::Label => self.label,
            Dimension::Genre => self.genre,
            Dimension::Mood => self.mood,
            Dimension::Topic => self.topic,
            Dimension::Style => self.style,
            Dimension::Algorithm => self.algorithm,
        };
        configured.unwrap_or_else(|| dimension.default_threshold())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Player {
    pub vlc_windows_path: String,
    pub mpv_ytdl_format: String,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            vlc_windows_path: DEFAULT_WINDOWS_VLC.to_string(),
            mpv_ytdl_format: "best".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
[dataset]
real_songs = "/data/sonics/real_songs.csv"
download_dir = "/data/sonics/full"

[output]
dir = "/tmp/playlists"

[thresholds]
artist = 2
decade = 20

[player]
mpv_ytdl_format = "bestaudio"
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(
            cfg.dataset.real_songs,
            PathBuf::from("/data/sonics/real_songs.csv")
        );
        // untouched fields keep their defaults
        assert_eq!(
            cfg.dataset.fake_songs,
            PathBuf::from("dataset/fake_songs.csv")
        );
        assert_eq!(
            cfg.dataset.download_dir,
            Some(PathBuf::from("/data/sonics/full"))
        );
        assert_eq!(cfg.output.dir, PathBuf::from("/tmp/playlists"));

        assert_eq!(cfg.thresholds.get(Dimension::Artist), 2);
        assert_eq!(cfg.thresholds.get(Dimension::Decade), 20);
        assert_eq!(cfg.thresholds.get(Dimension::Genre), 5);

        assert_eq!(cfg.player.mpv_ytdl_format, "bestaudio");
        assert_eq!(cfg.player.vlc_windows_path, DEFAULT_WINDOWS_VLC);

        Ok(())
    }

    #[test]
    fn test_empty_config_is_default() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("")?;

        assert_eq!(cfg.dataset.real_songs, PathBuf::from("dataset/real_songs.csv"));
        assert_eq!(cfg.output.dir, PathBuf::from("playlists"));
        assert_eq!(cfg.thresholds.get(Dimension::Algorithm), 10);

        Ok(())
    }

    #[test]
    fn test_unknown_dimension_is_rejected() {
        let parsed: Result<Config, _> = toml::from_str("[thresholds]\ntempo = 3\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(Config::load(std::path::Path::new("/no/such/config.toml")).is_err());
        assert!(Config::load_or_default(None).is_ok());
    }
}
