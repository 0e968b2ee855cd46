use serde::{Deserialize, Serialize};

use crate::{domain::song::SongRecord, emit::EmitError};

#[derive(Serialize)]
struct Document<'a> {
    name: &'a str,
    description: &'a str,
    tracks: &'a [&'a SongRecord],
}

/// A playlist document read back from disk.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PlaylistDocument {
    pub name: String,
    pub description: String,
    pub tracks: Vec<SongRecord>,
}

/// Pretty-printed `{name, description, tracks}` with every record serialized as is.
pub fn render(
    title: &str,
    description: &str,
    records: &[&SongRecord],
) -> Result<String, EmitError> {
    let document = Document {
        name: title,
        description,
        tracks: records,
    };
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    Ok(text)
}

pub fn parse(text: &str) -> Result<PlaylistDocument, EmitError> {
    Ok(serde_json::from_str(text)?)
}
