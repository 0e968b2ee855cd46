//! Partitions a catalog into buckets along categorical dimensions

use std::collections::{BTreeMap, HashMap};

use crate::domain::{
    dimension::Dimension,
    song::{SongKind, SongRecord},
};

const SENTINELS: &[&str] = &["", "unknown", "none", "null"];

/// Returns the trimmed value, or None if it is a placeholder for missing data.
pub fn category_key(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if SENTINELS.contains(&trimmed.to_lowercase().as_str()) {
        None
    } else {
        Some(trimmed)
    }
}

/// A year qualifies for grouping only when it is made of ASCII digits.
pub fn year_key(year: &str) -> Option<&str> {
    let year = year.trim();
    if !year.is_empty() && year.bytes().all(|b| b.is_ascii_digit()) {
        Some(year)
    } else {
        None
    }
}

/// `1994` -> `1990s`
pub fn decade_key(year: &str) -> String {
    let prefix: String = year.chars().take(3).collect();
    format!("{prefix}0s")
}

/// Songs sharing one value of one dimension, in first-seen order.
#[derive(Debug)]
pub struct Bucket<'a> {
    pub dimension: Dimension,
    pub key: String,
    pub members: Vec<&'a SongRecord>,
}

impl Bucket<'_> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Buckets of a single dimension, iterated in the order their keys were first seen.
#[derive(Debug, Default)]
pub struct DimensionBuckets<'a> {
    buckets: Vec<Bucket<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> DimensionBuckets<'a> {
    fn push(&mut self, dimension: Dimension, key: &str, record: &'a SongRecord) {
        if let Some(&i) = self.index.get(key) {
            self.buckets[i].members.push(record);
        } else {
            self.index.insert(key.to_string(), self.buckets.len());
            self.buckets.push(Bucket {
                dimension,
                key: key.to_string(),
                members: vec![record],
            });
        }
    }

    pub fn get(&self, key: &str) -> Option<&Bucket<'a>> {
        self.index.get(key).map(|&i| &self.buckets[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket<'a>> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets holding at least `threshold` members
    pub fn qualifying(&self, threshold: usize) -> impl Iterator<Item = &Bucket<'a>> {
        self.buckets.iter().filter(move |b| b.len() >= threshold)
    }
}

/// Result of one grouping pass. Holds every bucket regardless of size,
/// thresholds are applied by whoever consumes it.
#[derive(Debug, Default)]
pub struct Grouping<'a> {
    dimensions: BTreeMap<Dimension, DimensionBuckets<'a>>,
}

impl<'a> Grouping<'a> {
    /// Single pass over the records, adding each one to every requested
    /// dimension it has a usable value for.
    pub fn build(records: &'a [SongRecord], dimensions: &[Dimension]) -> Self {
        let mut grouping = Grouping::default();
        for &dimension in dimensions {
            grouping.dimensions.entry(dimension).or_default();
        }

        for record in records {
            for (dimension, key) in keys_for(record) {
                if let Some(buckets) = grouping.dimensions.get_mut(&dimension) {
                    buckets.push(dimension, &key, record);
                }
            }
        }

        grouping
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionBuckets<'a>> {
        self.dimensions.get(&dimension)
    }

    pub fn bucket(&self, dimension: Dimension, key: &str) -> Option<&Bucket<'a>> {
        self.dimension(dimension).and_then(|d| d.get(key))
    }
}

/// Every (dimension, key) pair a record belongs to.
fn keys_for(record: &SongRecord) -> Vec<(Dimension, String)> {
    let mut keys = Vec::new();
    let mut add = |dimension: Dimension, value: Option<&str>| {
        if let Some(key) = value.and_then(category_key) {
            keys.push((dimension, key.to_string()));
        }
    };

    match &record.kind {
        SongKind::Real(attrs) => {
            add(Dimension::Artist, Some(record.artist.as_str()));

            // decade is derived from the very key the year bucket uses
            if let Some(year) = attrs.year.as_deref().and_then(year_key) {
                add(Dimension::Year, Some(year));
                add(Dimension::Decade, Some(decade_key(year).as_str()));
            }

            add(Dimension::Label, attrs.label.as_deref());
        }
        SongKind::Synthetic(attrs) => {
            add(Dimension::Genre, attrs.genre.as_deref());
            add(Dimension::Mood, attrs.mood.as_deref());
            add(Dimension::Topic, attrs.topic.as_deref());
            add(Dimension::Style, attrs.style.as_deref());
            add(Dimension::Algorithm, attrs.algorithm.as_deref());
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::song::{RealAttrs, SyntheticAttrs};

    fn real(filename: &str, artist: &str, year: Option<&str>, label: Option<&str>) -> SongRecord {
        SongRecord::real(
            filename,
            "title",
            artist,
            RealAttrs {
                year: year.map(String::from),
                duration: None,
                label: label.map(String::from),
                url: format!("https://www.youtube.com/watch?v={filename}"),
            },
        )
    }

    fn fake(filename: &str, genre: &str) -> SongRecord {
        SongRecord::synthetic(
            filename,
            SyntheticAttrs {
                id: filename.into(),
                algorithm: Some("X".into()),
                genre: Some(genre.into()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn decade_takes_first_three_digits() {
        assert_eq!(decade_key("1994"), "1990s");
        assert_eq!(decade_key("2005"), "2000s");
    }

    #[test]
    fn sentinels_are_not_keys() {
        for value in ["", "  ", "unknown", "Unknown ", "NONE", "null"] {
            assert_eq!(category_key(value), None, "{value:?}");
        }
        assert_eq!(category_key("  pop "), Some("pop"));
    }

    #[test]
    fn year_must_be_digits() {
        assert_eq!(year_key("1987"), Some("1987"));
        assert_eq!(year_key(" 1987 "), Some("1987"));
        assert_eq!(year_key("unknown"), None);
        assert_eq!(year_key("19a7"), None);
        assert_eq!(year_key(""), None);
    }

    #[test]
    fn year_and_decade_membership_agree() {
        let records = vec![
            real("a", "Band", Some("1987"), None),
            real("b", "Band", Some("unknown"), None),
        ];
        let grouping = Grouping::build(&records, Dimension::REAL);

        let year = grouping.bucket(Dimension::Year, "1987").unwrap();
        assert_eq!(year.members.len(), 1);
        assert_eq!(year.members[0].filename, "a");

        let decade = grouping.bucket(Dimension::Decade, "1980s").unwrap();
        assert_eq!(decade.members.len(), 1);
        assert_eq!(decade.members[0].filename, "a");

        assert_eq!(grouping.dimension(Dimension::Year).unwrap().len(), 1);
        assert_eq!(grouping.dimension(Dimension::Decade).unwrap().len(), 1);
        assert_eq!(grouping.bucket(Dimension::Artist, "Band").unwrap().len(), 2);
    }

    #[test]
    fn buckets_keep_first_seen_order() {
        let records = vec![
            fake("1", "rock"),
            fake("2", "pop"),
            fake("3", "rock"),
            fake("4", "unknown"),
        ];
        let grouping = Grouping::build(&records, &[Dimension::Genre]);
        let genres = grouping.dimension(Dimension::Genre).unwrap();

        let keys: Vec<_> = genres.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["rock", "pop"]);

        let rock: Vec<_> = genres
            .get("rock")
            .unwrap()
            .members
            .iter()
            .map(|r| r.filename.as_str())
            .collect();
        assert_eq!(rock, vec!["1", "3"]);
    }

    #[test]
    fn only_requested_dimensions_are_built() {
        let records = vec![fake("1", "rock")];
        let grouping = Grouping::build(&records, &[Dimension::Genre]);

        assert!(grouping.dimension(Dimension::Algorithm).is_none());
        assert!(grouping.dimension(Dimension::Genre).is_some());
    }

    #[test]
    fn grouping_keeps_small_buckets_and_qualifying_filters_them() {
        let mut records: Vec<_> = (0..5).map(|i| fake(&format!("p{i}"), "pop")).collect();
        records.extend((0..2).map(|i| fake(&format!("r{i}"), "rock")));
        let grouping = Grouping::build(&records, &[Dimension::Genre]);
        let genres = grouping.dimension(Dimension::Genre).unwrap();

        assert_eq!(genres.len(), 2);
        let qualifying: Vec<_> = genres.qualifying(5).map(|b| b.key.as_str()).collect();
        assert_eq!(qualifying, vec!["pop"]);
    }

    #[test]
    fn labels_skip_sentinels() {
        let records = vec![
            real("a", "Band", None, Some("Sony")),
            real("b", "Band", None, Some("none")),
        ];
        let grouping = Grouping::build(&records, Dimension::REAL);
        let labels = grouping.dimension(Dimension::Label).unwrap();

        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("Sony").unwrap().len(), 1);
    }
}
