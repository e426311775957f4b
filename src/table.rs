//! Column extraction from header-first delimited records.
//!
//! Item and purchase-order numbers usually arrive as one column of an
//! invoice or packing-list export. A [`ColumnSpec`] names that column by a
//! primary header plus fallbacks, since the exports disagree on spelling
//! (`ITEM NO.` vs `ITEM NO`). A column with none of its headers present is
//! reported as [`ColumnValues::Unavailable`]; the rest of the file is still
//! usable.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, Read},
    path::Path,
};

use csv::{ByteRecord, ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::Token;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default)]
    pub fallbacks: Vec<String>,
}

impl ColumnSpec {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            fallbacks: Vec::new(),
        }
    }

    pub fn with_fallback<S: Into<String>>(mut self, header: S) -> Self {
        self.fallbacks.push(header.into());
        self
    }

    pub fn item_no() -> Self {
        Self::new("ITEM NO.").with_fallback("ITEM NO")
    }

    pub fn po_no() -> Self {
        Self::new("PO/NO.").with_fallback("PO.NO")
    }

    /// Primary header first, then fallbacks in order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.fallbacks.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValues {
    Found { header: String, values: Vec<Token> },
    Unavailable { column: String },
}

impl ColumnValues {
    pub fn values(&self) -> Option<&[Token]> {
        match self {
            ColumnValues::Found { values, .. } => Some(values),
            ColumnValues::Unavailable { .. } => None,
        }
    }
}

/// Rows are kept as raw bytes; only the fields of a selected column are
/// decoded, lossily, so stray non-UTF-8 bytes elsewhere never fail a load.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<ByteRecord>,
}

impl Table {
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);
        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();
        let records = reader.byte_records().collect::<Result<Vec<_>, _>>()?;
        debug!(
            columns = headers.len(),
            rows = records.len(),
            "delimited records loaded"
        );
        Ok(Self { headers, records })
    }

    #[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self, TableError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, delimiter)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-blank, trimmed, de-duplicated values of `spec`, in first-seen order.
    pub fn column(&self, spec: &ColumnSpec) -> ColumnValues {
        let Some((header, index)) = spec
            .headers()
            .find_map(|h| self.position(h).map(|index| (h, index)))
        else {
            warn!(column = %spec.name, "column not found, data unavailable");
            return ColumnValues::Unavailable {
                column: spec.name.clone(),
            };
        };

        let mut seen = HashSet::new();
        let values: Vec<Token> = self
            .records
            .iter()
            .filter_map(|record| record.get(index))
            .map(|field| String::from_utf8_lossy(field).trim().to_string())
            .filter(|value| !value.is_empty())
            .filter(|value| seen.insert(value.clone()))
            .map(Token::from)
            .collect();

        debug!(header, values = values.len(), "column extracted");
        ColumnValues::Found {
            header: header.to_string(),
            values,
        }
    }

    fn position(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.as_str() == header)
    }
}

pub fn load_column<R: Read>(
    reader: R,
    spec: &ColumnSpec,
    delimiter: u8,
) -> Result<ColumnValues, TableError> {
    Ok(Table::from_reader(reader, delimiter)?.column(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INVOICE: &str = "\
PO/NO.,ITEM NO.,DESCRIPTION OF GOODS,QTY
b3549,1016B,widget,4
a8921, 1015 ,gadget,2
b3549,1016B,widget,1
a8921,,spare,3
tb666,1234,\"bolt, m4\",9
";

    fn texts(values: &ColumnValues) -> Vec<&str> {
        values
            .values()
            .unwrap_or_default()
            .iter()
            .map(Token::as_str)
            .collect()
    }

    #[test]
    fn test_column_dedups_and_skips_blanks() {
        let table = Table::from_reader(INVOICE.as_bytes(), b',').unwrap();
        assert_eq!(table.len(), 5);
        let items = table.column(&ColumnSpec::item_no());
        assert_eq!(texts(&items), vec!["1016B", "1015", "1234"]);
        let pos = table.column(&ColumnSpec::po_no());
        assert_eq!(texts(&pos), vec!["b3549", "a8921", "tb666"]);
    }

    #[test]
    fn test_fallback_header() {
        let csv = "PO.NO,ITEM NO\nx1,9\n";
        let values = load_column(csv.as_bytes(), &ColumnSpec::item_no(), b',').unwrap();
        assert_eq!(
            values,
            ColumnValues::Found {
                header: "ITEM NO".to_string(),
                values: vec![Token::from("9")],
            }
        );
    }

    #[test]
    fn test_missing_column_is_unavailable() {
        let values = load_column(INVOICE.as_bytes(), &ColumnSpec::new("NOTES"), b',').unwrap();
        assert_eq!(
            values,
            ColumnValues::Unavailable {
                column: "NOTES".to_string()
            }
        );
        assert!(values.values().is_none());
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "A,B\n1,2\n3\n4,5\n";
        let values = load_column(csv.as_bytes(), &ColumnSpec::new("B"), b',').unwrap();
        assert_eq!(texts(&values), vec!["2", "5"]);
    }

    #[test]
    fn test_other_delimiter() {
        let csv = "ITEM NO.;QTY\na2;1\na10;2\n";
        let values = load_column(csv.as_bytes(), &ColumnSpec::item_no(), b';').unwrap();
        assert_eq!(texts(&values), vec!["a2", "a10"]);
    }

    #[test]
    fn test_headers_are_trimmed() {
        let table = Table::from_reader(" ITEM NO. , QTY\n7,1\n".as_bytes(), b',').unwrap();
        assert_eq!(table.headers().collect::<Vec<_>>(), vec!["ITEM NO.", "QTY"]);
        assert_eq!(texts(&table.column(&ColumnSpec::item_no())), vec!["7"]);
    }

    #[test]
    fn test_latin1_byte_in_other_column_is_ignored() {
        let csv = b"ITEM NO.,DESCRIPTION OF GOODS\na2,caf\xE9\na10,bolt\n";
        let values = load_column(&csv[..], &ColumnSpec::item_no(), b',').unwrap();
        assert_eq!(
            values,
            ColumnValues::Found {
                header: "ITEM NO.".to_string(),
                values: vec![Token::from("a2"), Token::from("a10")],
            }
        );
    }

    #[test]
    fn test_invalid_utf8_in_selected_column_is_replaced() {
        let csv = b"ITEM NO.\nx\xFF1\nx\xFE1\na2\n";
        let table = Table::from_reader(&csv[..], b',').unwrap();
        // both bad bytes decode to U+FFFD, so the two rows collapse
        assert_eq!(
            texts(&table.column(&ColumnSpec::item_no())),
            vec!["x\u{FFFD}1", "a2"]
        );
    }

    #[test]
    fn test_missing_file() {
        let result = Table::from_path("/definitely/not/here.csv", b',');
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
