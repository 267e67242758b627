//! Cell label and column code types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The letter part of a cell position (e.g., "A", "AB")
///
/// Always stored in upper case, so `"a"` and `"A"` name the same column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ColumnCode(pub(crate) String);

impl ColumnCode {
    /// Parse a column code from its letters
    ///
    /// # Examples
    /// ```
    /// use sheet_localizator_core::ColumnCode;
    ///
    /// let col = ColumnCode::parse("b").unwrap();
    /// assert_eq!(col.as_str(), "B");
    /// assert!(ColumnCode::parse("B2").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidColumn("empty column".into()));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidColumn(format!(
                "invalid column letter '{}' in '{}'",
                c, s
            )));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// The column letters
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ColumnCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColumnCode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ColumnCode> for String {
    fn from(col: ColumnCode) -> Self {
        col.0
    }
}

impl PartialEq<str> for ColumnCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColumnCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A parsed cell position (e.g., "A1", "$C$12")
///
/// Rows are 1-based, as they appear in the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellLabel {
    /// Column letters
    pub column: ColumnCode,
    /// Row number (1-based)
    pub row: u32,
}

impl CellLabel {
    /// Create a label from an already-parsed column and row
    pub fn new(column: ColumnCode, row: u32) -> Self {
        Self { column, row }
    }

    /// Parse a label from A1-style notation
    ///
    /// The whole label must be consumed: letters, then digits, with an optional
    /// `$` before either part. Anything else is a malformed label.
    ///
    /// # Examples
    /// ```
    /// use sheet_localizator_core::CellLabel;
    ///
    /// let label = CellLabel::parse("B12").unwrap();
    /// assert_eq!(label.column.as_str(), "B");
    /// assert_eq!(label.row, 12);
    ///
    /// assert!(CellLabel::parse("12").is_err());
    /// assert!(CellLabel::parse("B").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let label = s;
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::malformed(label, "empty label"));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        // Column letters
        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(Error::malformed(label, "no column letters"));
        }
        let column = ColumnCode(s[col_start..pos].to_ascii_uppercase());

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        // Row digits
        let row_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == row_start {
            return Err(Error::malformed(label, "no row number"));
        }
        if pos != bytes.len() {
            return Err(Error::malformed(
                label,
                format!("unexpected trailing '{}'", &s[pos..]),
            ));
        }

        let row: u32 = s[row_start..pos]
            .parse()
            .map_err(|_| Error::malformed(label, "row number out of range"))?;
        if row == 0 {
            return Err(Error::malformed(label, "row number must be >= 1"));
        }

        Ok(Self { column, row })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", self.column, self.row)
    }
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
