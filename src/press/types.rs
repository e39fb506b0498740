use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::borrow::Cow;

use crate::press::error::PressError;

/// Filename used when the input document does not name one.
pub const DEFAULT_FILENAME: &str = "export.csv";

/// One data row: column name to cell value, in the order the keys appeared
/// in the input. Requires serde_json's `preserve_order` feature.
pub type Row = Map<String, Value>;

/// The input document describing one tabular data set.
///
/// All three fields are optional; an explicit JSON `null` is treated the
/// same as an absent field. Unknown top-level keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSpec {
    /// Data rows, in output order.
    pub rows: Option<Vec<Row>>,

    /// Explicit header order. When present and non-empty it fully
    /// determines the header line; no validation against row keys.
    pub order: Option<Vec<String>>,

    /// Output filename; [`DEFAULT_FILENAME`] when absent.
    pub filename: Option<String>,
}

impl TableSpec {
    /// Parse a spec from raw JSON text.
    pub fn from_json(raw: &str) -> Result<Self, PressError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The data rows, empty when the field was absent.
    pub fn rows(&self) -> &[Row] {
        self.rows.as_deref().unwrap_or(&[])
    }
}

/// A single cell value, borrowed from a row.
///
/// Rows are dynamically typed JSON objects; this narrows a cell to the
/// scalar-or-null values the CSV output can carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Number(&'a Number),
    Text(&'a str),
}

impl<'a> Scalar<'a> {
    /// Narrow a cell value to a scalar. Arrays and objects are rejected.
    pub fn from_value(column: &str, value: &'a Value) -> Result<Self, PressError> {
        match value {
            Value::Null => Ok(Scalar::Null),
            Value::Bool(b) => Ok(Scalar::Bool(*b)),
            Value::Number(n) => Ok(Scalar::Number(n)),
            Value::String(s) => Ok(Scalar::Text(s)),
            Value::Array(_) | Value::Object(_) => Err(PressError::UnsupportedCell {
                column: column.to_string(),
            }),
        }
    }

    /// The CSV text form of this scalar. Null renders as the empty field,
    /// booleans and numbers as their JSON text.
    pub fn to_field(self) -> Cow<'a, str> {
        match self {
            Scalar::Null => Cow::Borrowed(""),
            Scalar::Bool(true) => Cow::Borrowed("true"),
            Scalar::Bool(false) => Cow::Borrowed("false"),
            Scalar::Number(n) => Cow::Owned(n.to_string()),
            Scalar::Text(s) => Cow::Borrowed(s),
        }
    }
}

/// The finished conversion: output filename plus CSV payload bytes.
///
/// This is the structured alternative to splitting the framed stream on the
/// sentinel byte; library callers can use it directly and never touch the
/// framing.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub data: Vec<u8>,
}
