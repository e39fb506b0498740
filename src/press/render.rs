use csv::{Terminator, WriterBuilder};
use std::borrow::Cow;

use crate::press::error::PressError;
use crate::press::types::{Row, Scalar};

const RECORD_TERMINATOR: &[u8] = b"\r\n";

/// Serialize the header line and data rows as CSV bytes.
///
/// Each row contributes one record with one field per header, in header
/// order: a field missing from a row serializes as an empty value, and row
/// fields not named in the header list are silently dropped. Quoting is the
/// csv crate's minimal style (quote on delimiter, quote, or line break;
/// embedded quotes doubled) and every record ends with CRLF.
///
/// A zero-column header list still terminates every record, so an empty
/// document renders as a single bare CRLF header line.
pub fn render_csv(headers: &[String], rows: &[Row]) -> Result<Vec<u8>, PressError> {
    if headers.is_empty() {
        // The csv crate cannot express zero-field records.
        return Ok(RECORD_TERMINATOR.repeat(rows.len() + 1));
    }

    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(&mut buf);

        writer.write_record(headers)?;

        for row in rows {
            let mut record: Vec<Cow<'_, str>> = Vec::with_capacity(headers.len());
            for header in headers {
                let field = match row.get(header) {
                    Some(value) => Scalar::from_value(header, value)?.to_field(),
                    None => Cow::Borrowed(""),
                };
                record.push(field);
            }
            writer.write_record(record.iter().map(|field| field.as_bytes()))?;
        }

        writer.flush()?;
    }
    Ok(buf)
}
