//! Texture atlas descriptor reading.
//!
//! A descriptor is an XML document listing the named rectangles packed into a
//! sprite sheet, in the layout written by TexturePacker's Starling/Sparrow
//! exporter:
//!
//! ```xml
//! <TextureAtlas imagePath="sheet.png">
//!     <SubTexture name="hero" x="10" y="20" width="30" height="40"/>
//! </TextureAtlas>
//! ```

pub mod parser;

pub use parser::{parse, parse_file, parse_str};

use serde::{Deserialize, Serialize};

/// Tag name of the elements that describe a sprite.
pub const SUBTEXTURE_TAG: &str = "SubTexture";

/// One named rectangle in image pixel space.
///
/// The origin is the top-left corner of the sheet and Y grows downward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTextureRecord {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SubTextureRecord {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Check whether the rectangle lies fully inside a sheet of the given size.
    pub fn fits_within(&self, sheet_width: u32, sheet_height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width > 0
            && self.height > 0
            && self.right() <= sheet_width as i64
            && self.bottom() <= sheet_height as i64
    }
}
