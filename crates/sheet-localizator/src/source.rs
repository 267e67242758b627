//! Feed sources

use std::path::PathBuf;

use crate::{FeedReader, FeedResult, RawCell};

/// Something that can hand over a sheet's complete cell list
///
/// This is the seam for fetching: an HTTP client, a fixture, a cache of a
/// previous download. Implementations must return every cell, in feed order.
pub trait FeedSource {
    /// Load all cells of the sheet
    fn cells(&self) -> FeedResult<Vec<RawCell>>;
}

impl FeedSource for Vec<RawCell> {
    fn cells(&self) -> FeedResult<Vec<RawCell>> {
        Ok(self.clone())
    }
}

impl<T: FeedSource + ?Sized> FeedSource for &T {
    fn cells(&self) -> FeedResult<Vec<RawCell>> {
        (**self).cells()
    }
}

/// A JSON feed document, already downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonFeed {
    /// Feed document stored in a file
    File(PathBuf),
    /// Feed document held in memory
    Text(String),
}

impl JsonFeed {
    /// Feed stored at `path`
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        JsonFeed::File(path.into())
    }

    /// Feed held in memory
    pub fn text<S: Into<String>>(json: S) -> Self {
        JsonFeed::Text(json.into())
    }
}

impl FeedSource for JsonFeed {
    fn cells(&self) -> FeedResult<Vec<RawCell>> {
        match self {
            JsonFeed::File(path) => {
                log::debug!("Loading feed from '{}'", path.display());
                FeedReader::read_file(path)
            }
            JsonFeed::Text(json) => FeedReader::read_str(json),
        }
    }
}
