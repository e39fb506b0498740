//! # csvpress - JSON table specs to framed CSV payloads
//!
//! Converts a JSON-described tabular data set into CSV bytes and emits the
//! target filename and the payload together over one output stream,
//! separated by a NUL sentinel, so an orchestrating process can serve CSV
//! downloads without writing temporary files.
//!
//! ## Quick Start
//!
//! ```rust
//! use csvpress::TableSpec;
//!
//! # fn main() -> Result<(), csvpress::PressError> {
//! let spec = TableSpec::from_json(r#"{"rows":[{"a":1,"b":2},{"a":3,"c":4}]}"#)?;
//! let export = spec.press()?;
//!
//! assert_eq!(export.filename, "export.csv");
//! assert_eq!(export.data, b"a,b,c\r\n1,2,\r\n3,,4\r\n");
//! # Ok(())
//! # }
//! ```
//!
//! ### Framed stream output
//!
//! ```rust
//! # fn main() -> anyhow::Result<()> {
//! let input = r#"{"rows":[{"x":"hello, world"}],"filename":"hello.csv"}"#;
//! let mut out = Vec::new();
//! csvpress::press_json(input.as_bytes(), &mut out)?;
//!
//! assert_eq!(out, b"hello.csv\x00x\r\n\"hello, world\"\r\n");
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::io::{Read, Write};

pub mod press;

pub use press::{
    render_csv, resolve_headers, CsvExport, FrameWriter, PressError, Row, Scalar, TableSpec,
    DEFAULT_FILENAME, SENTINEL,
};

/// Main entry point: convert one JSON spec into one framed CSV payload.
///
/// Reads the reader to exhaustion (the document is parsed as a whole, not
/// streamed), presses the spec, and writes `<filename><0x00><csv>` to the
/// writer. Parse failures abort before any output is produced.
pub fn press_json<R: Read, W: Write>(mut reader: R, writer: W) -> Result<()> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read input")?;

    let spec = TableSpec::from_json(&raw).context("Failed to parse table spec")?;
    let export = spec.press().context("Failed to render CSV")?;

    let mut frame = FrameWriter::new(writer);
    frame
        .write_export(&export)
        .context("Failed to write framed output")?;
    frame.flush().context("Failed to flush output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_framing() {
        let input = r#"{"rows":[{"a":1,"b":2},{"a":3,"c":4}]}"#;
        let mut out = Vec::new();
        press_json(input.as_bytes(), &mut out).unwrap();
        assert_eq!(out, b"export.csv\x00a,b,c\r\n1,2,\r\n3,,4\r\n");
    }

    #[test]
    fn test_byte_identical_on_repeat() {
        let input = r#"{"rows":[{"k":"v","n":7}],"filename":"r.csv"}"#;
        let mut first = Vec::new();
        let mut second = Vec::new();
        press_json(input.as_bytes(), &mut first).unwrap();
        press_json(input.as_bytes(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_input_fails_without_output() {
        let mut out = Vec::new();
        assert!(press_json(&b"not json"[..], &mut out).is_err());
        assert!(out.is_empty());
    }
}
