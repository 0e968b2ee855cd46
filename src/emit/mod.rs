//! Playlist formatters.
//!
//! Every emitter is a pure function of an ordered record sequence and a
//! title. Writing the rendered text to disk is done separately.

use std::path::Path;

use thiserror::Error;

pub mod html;
pub mod json;
pub mod launcher;
pub mod m3u;
pub mod mpv;
pub mod web_player;
pub mod xspf;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot quote for the shell: {0}")]
    Quote(#[from] shlex::QuoteError),
}

/// Keeps alphanumerics, spaces, hyphens and underscores, then trims.
///
/// This is the only rule used to turn a category value into a path segment.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Escapes text for use inside xml and html, both in content and attributes.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Like [`escape_markup`], but also drops the control characters xml 1.0 has no room for.
pub fn escape_xml(text: &str) -> String {
    let allowed: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    escape_markup(&allowed)
}

fn is_xml_char(c: char) -> bool {
    !matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Quotes a value as a single word for bash.
pub fn shell_quote(text: &str) -> Result<String, EmitError> {
    Ok(shlex::try_quote(text)?.into_owned())
}

/// Quotes a value as a single argument on a batch file line.
pub fn cmd_quote(text: &str) -> String {
    let escaped = single_line(text).replace('%', "%%").replace('"', "\"\"");
    format!("\"{escaped}\"")
}

/// Folds line breaks into spaces, for text that has to stay on one script line.
pub fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

pub fn write_artifact(path: &Path, contents: &str) -> Result<(), EmitError> {
    std::fs::write(path, contents).map_err(|source| EmitError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Writes a script and marks it executable where the platform has such a bit.
pub fn write_script(path: &Path, contents: &str) -> Result<(), EmitError> {
    write_artifact(path, contents)?;
    make_executable(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), EmitError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|source| {
        EmitError::Io {
            path: path.display().to_string(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), EmitError> {
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::song::{RealAttrs, SongRecord, SyntheticAttrs};

    pub fn real(filename: &str, title: &str, artist: &str, id: &str) -> SongRecord {
        SongRecord::real(
            filename,
            title,
            artist,
            RealAttrs {
                year: Some("1994".into()),
                duration: Some("215".into()),
                label: None,
                url: crate::playback::watch_url(id),
            },
        )
    }

    pub fn fake(filename: &str, algorithm: &str, genre: &str) -> SongRecord {
        SongRecord::synthetic(
            filename,
            SyntheticAttrs {
                id: "1".into(),
                algorithm: Some(algorithm.into()),
                style: Some("upbeat".into()),
                genre: Some(genre.into()),
                mood: Some("happy".into()),
                topic: Some("love".into()),
                duration: Some("120".into()),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("Hip-Hop/Rap"), "Hip-HopRap");
        assert_eq!(sanitize_filename("  r&b_soul  "), "rb_soul");
        assert_eq!(sanitize_filename("Beyoncé"), "Beyoncé");
        assert_eq!(sanitize_filename("?!"), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for name in ["Hip-Hop/Rap", " a.b c ", "AC/DC", "1990s", "Sigur Rós", "_-_"] {
            let once = sanitize_filename(name);
            assert_eq!(sanitize_filename(&once), once);
        }
    }

    #[test]
    fn escape_markup_covers_special_characters() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_xml_drops_control_characters() {
        assert_eq!(escape_xml("a\u{1}b\u{1B}c & d"), "abc &amp; d");
        assert_eq!(escape_xml("tab\there\nline"), "tab\there\nline");
    }

    #[test]
    fn shell_quote_keeps_value_as_one_word() -> anyhow::Result<()> {
        let quoted = shell_quote("a b$(x)'c")?;
        assert_eq!(shlex::split(&quoted), Some(vec!["a b$(x)'c".to_string()]));
        assert!(shell_quote("nul\0byte").is_err());
        Ok(())
    }

    #[test]
    fn cmd_quote_escapes_percent_and_quotes() {
        assert_eq!(cmd_quote(r#"50% "off""#), r#""50%% ""off""""#);
        assert_eq!(cmd_quote("a\r\nb"), r#""a  b""#);
    }

    #[cfg(unix)]
    #[test]
    fn scripts_are_executable() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new()?;
        let path = tmp.path().join("play.sh");
        write_script(&path, "#!/bin/bash\n")?;

        let mode = std::fs::metadata(&path)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        Ok(())
    }

    #[test]
    fn write_artifact_reports_path_on_failure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.m3u");

        let err = write_artifact(&path, "x").unwrap_err();
        assert!(err.to_string().contains("out.m3u"));
    }
}
