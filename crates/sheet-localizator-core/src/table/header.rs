//! Header (title row) detection

use crate::cell::{ColumnCode, DecodedCell};
use crate::error::{Error, Result};

/// The title row of a sheet: column codes paired with language labels
///
/// Detection is positional. The header is the leading run of cells whose row is
/// not past the title row, so the feed must be delivered in row-major order.
/// [`HeaderRow::split`] checks that precondition; reordering the input makes it
/// fail with [`Error::UnorderedFeed`] rather than misclassify cells.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRow<'a> {
    cells: &'a [DecodedCell],
}

impl<'a> HeaderRow<'a> {
    /// Take the leading title-row cells of `decoded`
    pub fn extract(decoded: &'a [DecodedCell], title_row: u32) -> Self {
        let len = decoded
            .iter()
            .position(|cell| cell.row > title_row)
            .unwrap_or(decoded.len());
        Self {
            cells: &decoded[..len],
        }
    }

    /// Split `decoded` into the header and the data cells after it
    ///
    /// Fails if a title-row cell appears among the data cells.
    pub fn split(
        decoded: &'a [DecodedCell],
        title_row: u32,
    ) -> Result<(Self, &'a [DecodedCell])> {
        let header = Self::extract(decoded, title_row);
        let data = &decoded[header.len()..];

        if let Some(cell) = data.iter().find(|cell| cell.row <= title_row) {
            return Err(Error::UnorderedFeed {
                label: cell.label().to_string(),
                title_row,
            });
        }

        Ok((header, data))
    }

    /// Number of header cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the sheet has no header cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Header cells in feed order
    pub fn cells(&self) -> &'a [DecodedCell] {
        self.cells
    }

    /// Column whose label equals `language` exactly (case-sensitive)
    pub fn language_column(&self, language: &str) -> Option<&'a ColumnCode> {
        self.cells
            .iter()
            .find(|cell| cell.value == language)
            .map(|cell| &cell.column)
    }

    /// Language labels, skipping the key column's own title
    pub fn languages(&self, key_column: &ColumnCode) -> Vec<String> {
        self.cells
            .iter()
            .filter(|cell| &cell.column != key_column && !cell.value.is_empty())
            .map(|cell| cell.value.clone())
            .collect()
    }
}
