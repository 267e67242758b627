//! # sheet-localizator
//!
//! Turns a publicly shared spreadsheet into a localization table.
//!
//! The sheet is laid out with keys in one column and one column per language,
//! each language named in the title row:
//!
//! | A          | B      | C      |
//! |------------|--------|--------|
//! | Key        | EN     | FI     |
//! | greeting   | Hello  | Hei    |
//! | farewell   | Bye    | Heippa |
//!
//! ## Example
//!
//! ```rust
//! use sheet_localizator::prelude::*;
//!
//! let feed = JsonFeed::text(r#"{"feed": {"entry": [
//!     {"title": {"$t": "A1"}, "content": {"$t": "Key"}},
//!     {"title": {"$t": "B1"}, "content": {"$t": "EN"}},
//!     {"title": {"$t": "A2"}, "content": {"$t": "greeting"}},
//!     {"title": {"$t": "B2"}, "content": {"$t": "Hello"}}
//! ]}}"#);
//!
//! let localizator = SheetLocalizator::new(feed);
//! let en = localizator.localize(Some("EN")).unwrap();
//! assert_eq!(en["greeting"], "Hello");
//! ```

pub mod prelude;
mod source;

pub use source::{FeedSource, JsonFeed};

// Re-export core types
pub use sheet_localizator_core::{
    available_languages, build_localizations, decode, decode_cells, resolve_localizations,
    CellLabel, ColumnCode, DecodedCell, HeaderRow, KeyMap, LocalizationMap, LocalizationOptions,
    MalformedCellPolicy, RawCell, Resolution, DEFAULT_KEY_COLUMN, DEFAULT_LANGUAGE,
    DEFAULT_TITLE_ROW,
};

// Re-export feed types
pub use sheet_localizator_feed::{feed_url, FeedError, FeedReader, FeedResult, FEED_URL_TEMPLATE};

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading a feed or rebuilding its table
#[derive(Debug, Error)]
pub enum Error {
    /// The feed could not be loaded
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// The cells could not be turned into a table
    #[error("{0}")]
    Table(#[from] sheet_localizator_core::Error),
}

/// Localization tables for one sheet
///
/// The feed is loaded once per call and then transformed; nothing is cached
/// between calls.
#[derive(Debug, Clone)]
pub struct SheetLocalizator<S> {
    source: S,
    options: LocalizationOptions,
}

impl<S: FeedSource> SheetLocalizator<S> {
    /// Create a localizator with default options
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: LocalizationOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: LocalizationOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options
    pub fn options(&self) -> &LocalizationOptions {
        &self.options
    }

    /// Table for `language` (or the default language); empty if the sheet
    /// has no such language
    pub fn localize(&self, language: Option<&str>) -> Result<LocalizationMap> {
        Ok(self.resolve(language)?.into_map())
    }

    /// Table for `language`, reporting a language missing from the sheet
    pub fn resolve(&self, language: Option<&str>) -> Result<Resolution> {
        let cells = self.source.cells()?;
        Ok(resolve_localizations(&cells, language, &self.options)?)
    }

    /// Languages named in the title row
    pub fn languages(&self) -> Result<Vec<String>> {
        let cells = self.source.cells()?;
        Ok(available_languages(&cells, &self.options)?)
    }
}
