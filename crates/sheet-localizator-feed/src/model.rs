//! Serde model of the cell feed document
//!
//! Only the fields used to rebuild the sheet are modeled; everything else in
//! the document is ignored.

use serde::Deserialize;
use sheet_localizator_core::RawCell;

#[derive(Debug, Deserialize)]
pub(crate) struct CellFeed {
    pub(crate) feed: Feed,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feed {
    /// Missing when the sheet has no cells
    #[serde(default)]
    pub(crate) entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Entry {
    /// Position label, e.g. "A1"
    pub(crate) title: Text,
    pub(crate) content: Text,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Text {
    #[serde(rename = "$t", default)]
    pub(crate) text: String,
}

impl From<Entry> for RawCell {
    fn from(entry: Entry) -> Self {
        RawCell::new(entry.title.text, entry.content.text)
    }
}
