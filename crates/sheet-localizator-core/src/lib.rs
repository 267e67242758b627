//! # sheet-localizator-core
//!
//! Core logic of the sheet-localizator library.
//!
//! A shared spreadsheet is published as a flat list of labeled cells. This crate
//! rebuilds the grid from that list and projects it into a single-language
//! localization table:
//! - [`RawCell`] - A cell as delivered by the feed (label + content)
//! - [`CellLabel`] and [`DecodedCell`] - The typed position of a cell
//! - [`HeaderRow`] and [`KeyMap`] - The reconstructed table structure
//! - [`build_localizations`] - The `key -> value` projection for one language
//!
//! ## Example
//!
//! ```rust
//! use sheet_localizator_core::{build_localizations, LocalizationOptions, RawCell};
//!
//! let cells = vec![
//!     RawCell::new("A1", "Key"),
//!     RawCell::new("B1", "EN"),
//!     RawCell::new("A2", "greeting"),
//!     RawCell::new("B2", "Hello"),
//! ];
//!
//! let map = build_localizations(&cells, Some("EN"), &LocalizationOptions::default()).unwrap();
//! assert_eq!(map.get("greeting").map(String::as_str), Some("Hello"));
//! ```

pub mod cell;
pub mod error;
pub mod options;
pub mod table;

// Re-exports for convenience
pub use cell::{decode, CellLabel, ColumnCode, DecodedCell, RawCell};
pub use error::{Error, Result};
pub use options::{LocalizationOptions, MalformedCellPolicy};
pub use table::{
    available_languages, build_localizations, decode_cells, resolve_localizations, HeaderRow,
    KeyMap, LocalizationMap, Resolution,
};

/// Column holding the lookup keys unless configured otherwise
pub const DEFAULT_KEY_COLUMN: &str = "A";

/// Row holding the language labels unless configured otherwise (1-based)
pub const DEFAULT_TITLE_ROW: u32 = 1;

/// Language used when the caller does not ask for one
pub const DEFAULT_LANGUAGE: &str = "FI";
