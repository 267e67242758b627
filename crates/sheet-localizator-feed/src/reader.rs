//! Cell feed reader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::FeedResult;
use crate::model::CellFeed;
use sheet_localizator_core::RawCell;

/// Reads a JSON cell feed into raw cells, in feed order
pub struct FeedReader;

impl FeedReader {
    /// Read a feed document from a file
    pub fn read_file<P: AsRef<Path>>(path: P) -> FeedResult<Vec<RawCell>> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a feed document from a reader
    pub fn read<R: Read>(reader: R) -> FeedResult<Vec<RawCell>> {
        let feed: CellFeed = serde_json::from_reader(reader)?;
        Ok(Self::into_cells(feed))
    }

    /// Read a feed document from a string
    pub fn read_str(json: &str) -> FeedResult<Vec<RawCell>> {
        let feed: CellFeed = serde_json::from_str(json)?;
        Ok(Self::into_cells(feed))
    }

    fn into_cells(feed: CellFeed) -> Vec<RawCell> {
        let cells: Vec<RawCell> = feed.feed.entry.into_iter().map(RawCell::from).collect();
        log::debug!("Read {} cells from feed", cells.len());
        cells
    }
}
