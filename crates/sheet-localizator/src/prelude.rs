//! Prelude module - common imports for sheet-localizator users
//!
//! ```rust
//! use sheet_localizator::prelude::*;
//! ```

pub use crate::{
    // Core types
    build_localizations,
    ColumnCode,
    // Error types
    Error,
    // Sources
    FeedSource,
    JsonFeed,
    LocalizationMap,
    LocalizationOptions,
    MalformedCellPolicy,
    RawCell,
    Resolution,
    Result,
    // Main type
    SheetLocalizator,
};
