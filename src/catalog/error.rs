use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("line {line}: required column '{column}' is missing")]
    MalformedRow { line: u64, column: &'static str },

    #[error("invalid real id '{0}', expected 'real_' followed by digits")]
    InvalidRealId(String),

    #[error("id {0} not found in synthetic catalog")]
    IdNotFound(u64),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
