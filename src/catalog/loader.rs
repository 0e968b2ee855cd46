//! Reads the dataset metadata CSV files into song records

use std::{fs::File, path::Path};

use csv::StringRecord;

use crate::{
    catalog::error::CatalogError,
    domain::song::{RealAttrs, SongRecord, SyntheticAttrs},
    playback,
};

pub mod columns {
    pub const FILENAME: &str = "filename";
    pub const TITLE: &str = "title";
    pub const ARTIST: &str = "artist";
    pub const YEAR: &str = "year";
    pub const DURATION: &str = "duration";
    pub const LABEL: &str = "label";
    pub const YOUTUBE_ID: &str = "youtube_id";

    pub const ID: &str = "id";
    pub const ALGORITHM: &str = "algorithm";
    pub const STYLE: &str = "style";
    pub const GENRE: &str = "genre";
    pub const MOOD: &str = "mood";
    pub const TOPIC: &str = "topic";
}

use columns::*;

/// Loads real songs. Rows without a youtube id are unplayable and left out.
pub fn load_real(path: &Path) -> Result<Vec<SongRecord>, CatalogError> {
    let mut reader = open(path)?;
    let header = Header::read(&mut reader)?;

    let filename = header.required(FILENAME)?;
    let title = header.required(TITLE)?;
    let artist = header.required(ARTIST)?;
    let youtube_id = header.required(YOUTUBE_ID)?;
    let year = header.optional(YEAR);
    let duration = header.optional(DURATION);
    let label = header.optional(LABEL);

    let mut records = Vec::new();
    let mut skipped = 0;
    for record in reader.records() {
        let record = record?;
        let row = Row::new(&record);

        let youtube_id = row.required(youtube_id, YOUTUBE_ID)?.trim();
        let filename = row.required(filename, FILENAME)?;
        let title = row.required(title, TITLE)?;
        let artist = row.required(artist, ARTIST)?;
        if youtube_id.is_empty() {
            skipped += 1;
            continue;
        }

        records.push(SongRecord::real(
            filename,
            title,
            artist,
            RealAttrs {
                year: row.optional(year),
                duration: row.optional(duration),
                label: row.optional(label),
                url: playback::watch_url(youtube_id),
            },
        ));
    }

    if skipped > 0 {
        log::debug!(
            "{}: skipped {skipped} rows without a youtube id",
            path.display()
        );
    }
    log::info!("Loaded {} real songs from {}", records.len(), path.display());
    Ok(records)
}

/// Loads generated songs. Every row becomes a record.
pub fn load_synthetic(path: &Path) -> Result<Vec<SongRecord>, CatalogError> {
    let mut reader = open(path)?;
    let header = Header::read(&mut reader)?;

    let id = header.required(ID)?;
    let filename = header.required(FILENAME)?;
    let algorithm = header.required(ALGORITHM)?;
    let style = header.required(STYLE)?;
    let genre = header.required(GENRE)?;
    let mood = header.required(MOOD)?;
    let topic = header.required(TOPIC)?;
    let duration = header.optional(DURATION);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = Row::new(&record);

        let attrs = SyntheticAttrs {
            id: row.required(id, ID)?.trim().to_string(),
            algorithm: row.present(algorithm, ALGORITHM)?,
            style: row.present(style, STYLE)?,
            genre: row.present(genre, GENRE)?,
            mood: row.present(mood, MOOD)?,
            topic: row.present(topic, TOPIC)?,
            duration: row.optional(duration),
        };
        records.push(SongRecord::synthetic(row.required(filename, FILENAME)?, attrs));
    }

    log::info!(
        "Loaded {} synthetic songs from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn open(path: &Path) -> Result<csv::Reader<File>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }
    // short rows are reported per column rather than as a length mismatch
    Ok(csv::ReaderBuilder::new().flexible(true).from_path(path)?)
}

struct Header(StringRecord);

impl Header {
    fn read(reader: &mut csv::Reader<File>) -> Result<Self, CatalogError> {
        Ok(Self(reader.headers()?.clone()))
    }

    fn optional(&self, column: &str) -> Option<usize> {
        self.0.iter().position(|name| name.trim() == column)
    }

    fn required(&self, column: &'static str) -> Result<usize, CatalogError> {
        self.optional(column)
            .ok_or(CatalogError::MalformedRow { line: 1, column })
    }
}

struct Row<'r> {
    record: &'r StringRecord,
    line: u64,
}

impl<'r> Row<'r> {
    fn new(record: &'r StringRecord) -> Self {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        Self { record, line }
    }

    fn required(&self, index: usize, column: &'static str) -> Result<&'r str, CatalogError> {
        self.record.get(index).ok_or(CatalogError::MalformedRow {
            line: self.line,
            column,
        })
    }

    /// required column whose value may still be blank
    fn present(
        &self,
        index: usize,
        column: &'static str,
    ) -> Result<Option<String>, CatalogError> {
        Ok(non_blank(self.required(index, column)?))
    }

    fn optional(&self, index: Option<usize>) -> Option<String> {
        index
            .and_then(|index| self.record.get(index))
            .and_then(non_blank)
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
