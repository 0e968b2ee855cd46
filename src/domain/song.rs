use serde::{Deserialize, Serialize};

/// One song of a catalog.
///
/// Records are built once while loading a source file and never mutated
/// afterwards. Grouping and emission only ever borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub filename: String,
    pub title: String,
    pub artist: String,
    #[serde(flatten)]
    pub kind: SongKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SongKind {
    Real(RealAttrs),
    Synthetic(SyntheticAttrs),
}

/// Attributes of a recorded song. A real song always has a playback url,
/// rows without one never become records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealAttrs {
    pub year: Option<String>,
    pub duration: Option<String>,
    pub label: Option<String>,
    pub url: String,
}

/// Attributes of a generated song. There is nothing to play back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SyntheticAttrs {
    pub id: String,
    pub algorithm: Option<String>,
    pub style: Option<String>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub topic: Option<String>,
    pub duration: Option<String>,
}

impl SongRecord {
    pub fn real(filename: &str, title: &str, artist: &str, attrs: RealAttrs) -> Self {
        Self {
            filename: filename.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            kind: SongKind::Real(attrs),
        }
    }

    /// Synthetic songs carry no title or artist of their own, so the filename
    /// and the generating algorithm stand in for them.
    pub fn synthetic(filename: &str, attrs: SyntheticAttrs) -> Self {
        Self {
            filename: filename.to_string(),
            title: filename.to_string(),
            artist: attrs.algorithm.clone().unwrap_or_default(),
            kind: SongKind::Synthetic(attrs),
        }
    }

    pub fn playback_url(&self) -> Option<&str> {
        match &self.kind {
            SongKind::Real(attrs) => Some(&attrs.url),
            SongKind::Synthetic(_) => None,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self.kind, SongKind::Real(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_record_has_no_url() {
        let record = SongRecord::synthetic(
            "fake_1.mp3",
            SyntheticAttrs {
                id: "1".into(),
                algorithm: Some("suno".into()),
                ..Default::default()
            },
        );

        assert_eq!(record.playback_url(), None);
        assert!(!record.is_real());
        assert_eq!(record.title, "fake_1.mp3");
        assert_eq!(record.artist, "suno");
    }

    #[test]
    fn record_serializes_with_type_tag() -> anyhow::Result<()> {
        let record = SongRecord::real(
            "real_1.mp3",
            "Song",
            "Band",
            RealAttrs {
                year: Some("1994".into()),
                duration: None,
                label: None,
                url: "https://www.youtube.com/watch?v=abc".into(),
            },
        );

        let value = serde_json::to_value(&record)?;
        assert_eq!(value["type"], "real");
        assert_eq!(value["year"], "1994");
        assert_eq!(value["url"], "https://www.youtube.com/watch?v=abc");

        let back: SongRecord = serde_json::from_value(value)?;
        assert_eq!(back, record);
        Ok(())
    }
}
