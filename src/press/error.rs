use thiserror::Error;

/// The error type for the pressing pipeline.
///
/// Parse failures are fatal to the conversion; the remaining variants cover
/// the CSV writer, the output stream, and the two inputs the document shape
/// cannot express: nested row cells and filenames that would corrupt the
/// NUL-framed output.
#[derive(Error, Debug)]
pub enum PressError {
    /// The input could not be parsed as a table spec document.
    #[error("failed to parse table spec: {0}")]
    Parse(#[from] serde_json::Error),

    /// The CSV writer rejected a record.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error on the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row cell held an array or object; cells must be scalar or null.
    #[error("column {column:?} holds a nested value; row cells must be scalar or null")]
    UnsupportedCell { column: String },

    /// The filename contains a NUL byte and cannot be framed.
    #[error("filename {0:?} contains a NUL byte and cannot be framed")]
    FilenameNul(String),
}
