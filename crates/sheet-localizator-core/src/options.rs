//! Localization options

use crate::cell::ColumnCode;
use crate::{DEFAULT_KEY_COLUMN, DEFAULT_LANGUAGE, DEFAULT_TITLE_ROW};

/// What to do with a cell whose label does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MalformedCellPolicy {
    /// Fail the whole parse
    #[default]
    Abort,
    /// Log the cell and leave it out
    Skip,
}

/// Options for rebuilding a localization table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LocalizationOptions {
    /// Column holding the lookup keys (default: A)
    pub key_column: ColumnCode,
    /// Row holding the language labels, 1-based (default: 1)
    pub title_row: u32,
    /// Language used when none is requested (default: FI)
    pub default_language: String,
    /// Handling of malformed cell labels (default: abort)
    pub malformed_cells: MalformedCellPolicy,
}

impl LocalizationOptions {
    /// Set the key column
    pub fn key_column(mut self, column: ColumnCode) -> Self {
        self.key_column = column;
        self
    }

    /// Set the title row
    pub fn title_row(mut self, row: u32) -> Self {
        self.title_row = row;
        self
    }

    /// Set the fallback language
    pub fn default_language<S: Into<String>>(mut self, language: S) -> Self {
        self.default_language = language.into();
        self
    }

    /// Set the malformed-cell policy
    pub fn malformed_cells(mut self, policy: MalformedCellPolicy) -> Self {
        self.malformed_cells = policy;
        self
    }

    /// The requested language, or the fallback when none was given
    pub fn language_or_default<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        language.unwrap_or(&self.default_language)
    }
}

impl Default for LocalizationOptions {
    fn default() -> Self {
        Self {
            key_column: ColumnCode(DEFAULT_KEY_COLUMN.to_string()),
            title_row: DEFAULT_TITLE_ROW,
            default_language: DEFAULT_LANGUAGE.to_string(),
            malformed_cells: MalformedCellPolicy::Abort,
        }
    }
}
