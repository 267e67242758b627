//! Table reconstruction
//!
//! Rebuilds the sheet from its decoded cells and projects one language column
//! onto the key column:
//!
//! 1. decode every cell ([`decode_cells`])
//! 2. split off the title row ([`HeaderRow`])
//! 3. find the column labeled with the requested language
//! 4. index the key column by row ([`KeyMap`])
//! 5. emit `key -> value` for each language cell whose row has a key

mod header;
mod keys;

pub use header::HeaderRow;
pub use keys::KeyMap;

use crate::cell::{decode, ColumnCode, DecodedCell, RawCell};
use crate::error::Result;
use crate::options::{LocalizationOptions, MalformedCellPolicy};
use std::collections::BTreeMap;

/// Final `key -> localized value` table
pub type LocalizationMap = BTreeMap<String, String>;

/// Outcome of a lookup that tells a missing language apart from an empty sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The language column exists; the map may still be empty
    Found(LocalizationMap),
    /// No title-row cell carries the requested language
    LanguageNotFound {
        /// The language that was looked up
        language: String,
        /// Languages the title row does carry
        available: Vec<String>,
    },
}

impl Resolution {
    /// Whether the language column was found
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// The map, or `None` if the language was not found
    pub fn map(&self) -> Option<&LocalizationMap> {
        match self {
            Resolution::Found(map) => Some(map),
            Resolution::LanguageNotFound { .. } => None,
        }
    }

    /// The map, empty if the language was not found
    pub fn into_map(self) -> LocalizationMap {
        match self {
            Resolution::Found(map) => map,
            Resolution::LanguageNotFound { .. } => LocalizationMap::new(),
        }
    }
}

/// Decode every raw cell according to the malformed-cell policy
pub fn decode_cells(cells: &[RawCell], options: &LocalizationOptions) -> Result<Vec<DecodedCell>> {
    let mut decoded = Vec::with_capacity(cells.len());
    for raw in cells {
        match decode(raw) {
            Ok(cell) => decoded.push(cell),
            Err(e) if options.malformed_cells == MalformedCellPolicy::Skip => {
                log::warn!("Skipping cell: {e}");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(decoded)
}

/// Build the localization table for `language`
///
/// Falls back to `options.default_language` when `language` is `None`. A
/// language missing from the title row yields an empty map, the same as a
/// sheet without entries; use [`resolve_localizations`] to tell them apart.
///
/// The cells must be in row-major order (title row first).
pub fn build_localizations(
    cells: &[RawCell],
    language: Option<&str>,
    options: &LocalizationOptions,
) -> Result<LocalizationMap> {
    resolve_localizations(cells, language, options).map(Resolution::into_map)
}

/// Build the localization table for `language`, reporting a missing language
pub fn resolve_localizations(
    cells: &[RawCell],
    language: Option<&str>,
    options: &LocalizationOptions,
) -> Result<Resolution> {
    let language = options.language_or_default(language);
    let decoded = decode_cells(cells, options)?;
    let (header, data) = HeaderRow::split(&decoded, options.title_row)?;

    let column = match header.language_column(language) {
        Some(column) => column,
        None => {
            log::debug!(
                "Language '{language}' not in title row ({} cells)",
                header.len()
            );
            return Ok(Resolution::LanguageNotFound {
                language: language.to_string(),
                available: header.languages(&options.key_column),
            });
        }
    };

    let keys = KeyMap::collect(data, &options.key_column);
    let map = project(data, column, &keys);

    log::debug!(
        "Built {} '{language}' entries from column {column} ({} cells, {} keys)",
        map.len(),
        decoded.len(),
        keys.len()
    );

    Ok(Resolution::Found(map))
}

/// Languages offered by the title row, excluding the key column's title
pub fn available_languages(cells: &[RawCell], options: &LocalizationOptions) -> Result<Vec<String>> {
    let decoded = decode_cells(cells, options)?;
    let (header, _) = HeaderRow::split(&decoded, options.title_row)?;
    Ok(header.languages(&options.key_column))
}

fn project(data: &[DecodedCell], column: &ColumnCode, keys: &KeyMap) -> LocalizationMap {
    let mut map = LocalizationMap::new();
    for cell in data.iter().filter(|cell| &cell.column == column) {
        match keys.get(cell.row) {
            Some(key) => {
                map.insert(key.to_string(), cell.value.clone());
            }
            None => log::trace!("No key for {}, dropped", cell.label()),
        }
    }
    map
}
