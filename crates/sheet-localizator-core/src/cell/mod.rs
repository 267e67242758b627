//! Cell-related types and the cell decoder
//!
//! This module contains:
//! - [`RawCell`] - A cell exactly as the feed delivers it
//! - [`CellLabel`] - A cell's parsed position (e.g., "B12")
//! - [`ColumnCode`] - The letter part of a position
//! - [`DecodedCell`] - A cell with a typed position and its content

mod decoded;
mod label;

pub use decoded::{decode, DecodedCell, RawCell};
pub use label::{CellLabel, ColumnCode};
