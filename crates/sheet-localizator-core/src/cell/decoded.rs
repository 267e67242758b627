//! Raw and decoded cells

use super::label::{CellLabel, ColumnCode};
use crate::error::Result;

/// A cell as delivered by the feed: an opaque position label and its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell {
    /// Position label (e.g., "A1")
    pub label: String,
    /// Cell content
    pub content: String,
}

impl RawCell {
    /// Create a raw cell
    pub fn new<L: Into<String>, C: Into<String>>(label: L, content: C) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// A cell with a typed position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCell {
    /// Column letters
    pub column: ColumnCode,
    /// Row number (1-based)
    pub row: u32,
    /// Cell content, unchanged
    pub value: String,
}

impl DecodedCell {
    /// The cell's position
    pub fn label(&self) -> CellLabel {
        CellLabel::new(self.column.clone(), self.row)
    }
}

/// Decode one raw cell
///
/// Fails with [`Error::MalformedCellLabel`](crate::Error::MalformedCellLabel)
/// when the label does not parse.
pub fn decode(raw: &RawCell) -> Result<DecodedCell> {
    let CellLabel { column, row } = CellLabel::parse(&raw.label)?;
    Ok(DecodedCell {
        column,
        row,
        value: raw.content.clone(),
    })
}
