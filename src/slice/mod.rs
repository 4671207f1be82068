//! Conversion of descriptor records into bottom-left-origin sprite rects.
//!
//! Descriptors measure Y downward from the top edge of the sheet, while the
//! import settings measure it upward from the bottom edge. The mapper flips
//! each rectangle using the full sheet height.

mod settings;

pub use settings::{ImportSettings, SpriteImportMode, SpriteMetadata, TextureType};

use crate::descriptor::SubTextureRecord;
use serde::{Deserialize, Serialize};

/// A named rectangle with its origin at the bottom-left of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRect {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NamedRect {
    /// Flip a single record. `image_height` is the full sheet height.
    pub fn from_record(record: &SubTextureRecord, image_height: f32) -> Self {
        Self {
            name: record.name.clone(),
            x: record.x as f32,
            y: image_height - record.y as f32 - record.height as f32,
            width: record.width as f32,
            height: record.height as f32,
        }
    }
}

/// Map every record to a bottom-left-origin rectangle.
///
/// Output has the same length and order as `records`. Rectangles that end up
/// with a negative Y are passed through unchanged; bounds policy belongs to
/// whoever consumes them.
pub fn map_records(records: &[SubTextureRecord], image_height: f32) -> Vec<NamedRect> {
    records
        .iter()
        .map(|record| {
            let rect = NamedRect::from_record(record, image_height);
            tracing::debug!(
                "Mapped {} from ({}, {}) to rect ({}, {}, {}x{})",
                rect.name,
                record.x,
                record.y,
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
            rect
        })
        .collect()
}
