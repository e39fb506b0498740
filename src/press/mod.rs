//! Table pressing - flatten a JSON table spec into a named CSV payload
//!
//! This module turns a [`TableSpec`] (rows plus optional header order and
//! filename) into a [`CsvExport`], and frames the result onto a byte stream
//! for callers that consume filename and payload over a single pipe.

pub mod error;
pub mod frame;
pub mod headers;
pub mod render;
pub mod types;

pub use error::PressError;
pub use frame::{FrameWriter, SENTINEL};
pub use headers::resolve_headers;
pub use render::render_csv;
pub use types::{CsvExport, Row, Scalar, TableSpec, DEFAULT_FILENAME};

impl TableSpec {
    /// Press this spec into a named CSV payload.
    ///
    /// Resolves headers, renders every row, and applies the default
    /// filename when the spec names none.
    pub fn press(self) -> Result<CsvExport, PressError> {
        let headers = resolve_headers(&self);
        let data = render_csv(&headers, self.rows())?;
        let filename = self
            .filename
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        Ok(CsvExport { filename, data })
    }
}
