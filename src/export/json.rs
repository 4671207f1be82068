//! JSON import settings sink.

use super::SliceSink;
use crate::error::Result;
use crate::slice::ImportSettings;
use std::io::Write;

/// Writes import settings as JSON to any writer.
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Toggle pretty-printing.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SliceSink for JsonSink<W> {
    fn apply(&mut self, settings: ImportSettings) -> Result<()> {
        // Serialize fully before touching the writer.
        let mut json = if self.pretty {
            settings.to_json_pretty()?
        } else {
            settings.to_json()?
        };
        json.push('\n');

        self.writer.write_all(json.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Write import settings to a JSON file, replacing any existing file.
pub fn export_json_file<P: AsRef<std::path::Path>>(
    path: P,
    settings: ImportSettings,
    pretty: bool,
) -> Result<()> {
    let mut sink = JsonSink::new(Vec::new()).pretty(pretty);
    sink.apply(settings)?;
    std::fs::write(path, sink.into_inner())?;
    Ok(())
}
