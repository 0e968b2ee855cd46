//! Flat text song list: one `filename title artist url` line per real song.
//!
//! The list carries no column boundaries, so reading it back relies on a
//! heuristic split of the text between filename and url. Splits that are
//! likely wrong are flagged instead of silently accepted.

use crate::domain::song::{RealAttrs, SongRecord};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Renders real songs as a flat list. Synthetic songs have no url and are left out.
pub fn export(records: &[SongRecord]) -> String {
    let mut out = String::new();
    for record in records {
        if let Some(url) = record.playback_url() {
            out.push_str(&format!(
                "{} {} {} {url}\n",
                record.filename, record.title, record.artist
            ));
        }
    }
    out
}

/// Which rule separated title from artist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// `title - artist`
    Dash,
    /// `title by artist`, matched case-insensitively
    By,
    /// no separator, the last word was taken as the artist
    LastWord,
    /// too few words to split, the artist is unknown
    Unsplit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub line_num: usize,
    pub record: SongRecord,
    pub rule: SplitRule,
    /// true when the title/artist split is likely wrong
    pub suspect: bool,
}

#[derive(Debug, Default)]
pub struct ParsedListing {
    pub lines: Vec<ParsedLine>,
    /// line numbers skipped for having too few parts
    pub skipped: Vec<usize>,
}

impl ParsedListing {
    pub fn records(&self) -> Vec<SongRecord> {
        self.lines.iter().map(|l| l.record.clone()).collect()
    }

    pub fn suspect_count(&self) -> usize {
        self.lines.iter().filter(|l| l.suspect).count()
    }
}

pub fn parse(text: &str) -> ParsedListing {
    let mut listing = ParsedListing::default();

    for (index, line) in text.lines().enumerate() {
        let line_num = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(' ').collect();
        if parts.len() < 4 {
            log::warn!("Line {line_num} has insufficient parts: {line}");
            listing.skipped.push(line_num);
            continue;
        }

        let filename = parts[0];
        let url = parts[parts.len() - 1];
        let middle = parts[1..parts.len() - 1].join(" ");

        let (title, artist, rule) = split_title_artist(&middle);
        let suspect = match rule {
            SplitRule::Dash => middle.matches(" - ").count() > 1,
            SplitRule::By => false,
            SplitRule::LastWord | SplitRule::Unsplit => true,
        };
        if suspect {
            log::warn!(
                "Line {line_num}: uncertain title/artist split ({rule:?}) of '{middle}'"
            );
        }

        listing.lines.push(ParsedLine {
            line_num,
            record: SongRecord::real(
                filename,
                &title,
                &artist,
                RealAttrs {
                    year: None,
                    duration: None,
                    label: None,
                    url: url.to_string(),
                },
            ),
            rule,
            suspect,
        });
    }

    listing
}

/// Splits free text into (title, artist), trying each rule in turn.
pub fn split_title_artist(text: &str) -> (String, String, SplitRule) {
    if let Some((title, artist)) = text.split_once(" - ") {
        return (title.trim().into(), artist.trim().into(), SplitRule::Dash);
    }

    let lower = text.to_lowercase();
    if let Some((title, artist)) = lower.split_once(" by ") {
        return (
            title.trim().into(),
            title_case(artist).trim().into(),
            SplitRule::By,
        );
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    match words.split_last() {
        Some((artist, title)) if title.len() >= 2 => {
            (title.join(" "), artist.to_string(), SplitRule::LastWord)
        }
        _ => (text.trim().into(), UNKNOWN_ARTIST.into(), SplitRule::Unsplit),
    }
}

/// Upper-cases the first letter of every run of letters, lower-cases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
