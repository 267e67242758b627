//! Feed URL templating

use crate::error::{FeedError, FeedResult};
use url::Url;

/// Public cell feed of a shared sheet's first worksheet; `SHEET_ID` is replaced
pub const FEED_URL_TEMPLATE: &str =
    "https://spreadsheets.google.com/feeds/cells/SHEET_ID/od6/public/basic?hl=en_US&alt=json";

/// URL of the public cell feed for `sheet_id`
///
/// # Examples
/// ```
/// use sheet_localizator_feed::feed_url;
///
/// let url = feed_url("1AbC-d_9").unwrap();
/// assert_eq!(url.path(), "/feeds/cells/1AbC-d_9/od6/public/basic");
/// assert!(feed_url("../admin").is_err());
/// ```
pub fn feed_url(sheet_id: &str) -> FeedResult<Url> {
    let id = sheet_id.trim();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(FeedError::InvalidSheetId(sheet_id.to_string()));
    }

    Ok(Url::parse(&FEED_URL_TEMPLATE.replace("SHEET_ID", id))?)
}
