//! # sheet-localizator-feed
//!
//! Reader for the JSON cell feed of a publicly shared spreadsheet.

mod error;
mod model;
mod reader;
mod endpoint;

pub use error::{FeedError, FeedResult};
pub use reader::FeedReader;
pub use endpoint::{feed_url, FEED_URL_TEMPLATE};
