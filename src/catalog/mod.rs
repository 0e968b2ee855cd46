use std::path::Path;

use crate::{
    catalog::error::CatalogError,
    domain::song::{SongKind, SongRecord},
};

pub mod error;
pub mod listing;
pub mod loader;

/// Parses a `real_XXXXX` identifier into the numeric id shared with the synthetic catalog.
pub fn parse_real_id(real_id: &str) -> Result<u64, CatalogError> {
    let invalid = || CatalogError::InvalidRealId(real_id.to_string());

    let digits = real_id.strip_prefix("real_").ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

/// Finds the synthetic song paired with a real one.
pub fn find_synthetic_for_real<'a>(
    records: &'a [SongRecord],
    real_id: &str,
) -> Result<&'a SongRecord, CatalogError> {
    let wanted = parse_real_id(real_id)?;

    records
        .iter()
        .find(|record| match &record.kind {
            SongKind::Synthetic(attrs) => attrs.id.parse::<u64>().ok() == Some(wanted),
            SongKind::Real(_) => false,
        })
        .ok_or(CatalogError::IdNotFound(wanted))
}

/// Loads the synthetic catalog and resolves a real id against it.
pub fn lookup_synthetic_filename(
    fake_songs: &Path,
    real_id: &str,
) -> Result<String, CatalogError> {
    // validate before touching the file
    parse_real_id(real_id)?;
    let records = loader::load_synthetic(fake_songs)?;
    Ok(find_synthetic_for_real(&records, real_id)?.filename.clone())
}
