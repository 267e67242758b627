//! Row -> key lookup built from the key column

use crate::cell::{ColumnCode, DecodedCell};
use ahash::AHashMap;

/// Keys of a sheet, indexed by row number
#[derive(Debug, Default, Clone)]
pub struct KeyMap {
    keys: AHashMap<u32, String>,
}

impl KeyMap {
    /// Collect the key column out of the data cells
    ///
    /// A later cell for the same row replaces an earlier one.
    pub fn collect(data: &[DecodedCell], key_column: &ColumnCode) -> Self {
        let mut keys = AHashMap::new();
        for cell in data.iter().filter(|cell| &cell.column == key_column) {
            keys.insert(cell.row, cell.value.clone());
        }
        Self { keys }
    }

    /// Key of a row, if the row has one
    pub fn get(&self, row: u32) -> Option<&str> {
        self.keys.get(&row).map(String::as_str)
    }

    /// Number of keyed rows
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no row has a key
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
