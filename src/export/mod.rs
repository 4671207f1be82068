//! Import settings sinks.
//!
//! A sink is whatever applies the finished sprite list to the sheet: an
//! editor's texture importer, a JSON file, or an in-memory list for tests.

pub mod json;

pub use json::{export_json_file, JsonSink};

use crate::error::Result;
use crate::slice::ImportSettings;

/// Receives the finished import settings for a sheet.
///
/// `apply` is called at most once per slicing run, and only after every
/// record has been parsed and mapped.
pub trait SliceSink {
    fn apply(&mut self, settings: ImportSettings) -> Result<()>;
}

impl SliceSink for Vec<ImportSettings> {
    fn apply(&mut self, settings: ImportSettings) -> Result<()> {
        self.push(settings);
        Ok(())
    }
}

impl<S: SliceSink + ?Sized> SliceSink for &mut S {
    fn apply(&mut self, settings: ImportSettings) -> Result<()> {
        (**self).apply(settings)
    }
}
