//! Error types for sheet-localizator-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rebuilding a localization table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cell's position label does not name a column and a row
    #[error("Malformed cell label '{label}': {reason}")]
    MalformedCellLabel { label: String, reason: String },

    /// A configured column code is not a run of letters
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// A title-row cell showed up after the data rows started
    #[error("Cell '{label}' belongs to the title row (<= {title_row}) but follows data rows; the feed must be in row-major order")]
    UnorderedFeed { label: String, title_row: u32 },
}

impl Error {
    /// Create a malformed-label error
    pub fn malformed<L: Into<String>, R: Into<String>>(label: L, reason: R) -> Self {
        Error::MalformedCellLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }
}
