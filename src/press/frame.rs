use std::io::Write;

use crate::press::error::PressError;
use crate::press::types::CsvExport;

/// Byte separating the filename from the CSV payload on the output stream.
pub const SENTINEL: u8 = 0x00;

/// Writes a finished export onto a single byte stream.
///
/// The layout is `<filename utf-8><0x00><csv bytes>` with no trailing
/// marker; the caller recovers the two halves by splitting on the first
/// NUL byte. That split only works if the filename itself is NUL-free, so
/// a filename containing NUL is rejected before any bytes are written.
pub struct FrameWriter<W: Write> {
    writer: W,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        FrameWriter { writer }
    }

    /// Write one framed export.
    pub fn write_export(&mut self, export: &CsvExport) -> Result<(), PressError> {
        if export.filename.as_bytes().contains(&SENTINEL) {
            return Err(PressError::FilenameNul(export.filename.clone()));
        }

        self.writer.write_all(export.filename.as_bytes())?;
        self.writer.write_all(&[SENTINEL])?;
        self.writer.write_all(&export.data)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), PressError> {
        Ok(self.writer.flush()?)
    }
}
