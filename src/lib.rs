//! # Sprite XML Slicer
//!
//! A Rust library for slicing sprite sheets using texture atlas XML descriptors.
//!
//! ## Overview
//!
//! This library reads a descriptor listing named `SubTexture` rectangles and
//! turns them into sprite import settings for the sheet they describe. The
//! descriptor measures Y from the top of the image; the import settings
//! measure it from the bottom, so every rectangle is flipped against the
//! sheet height.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sprite_xml_slicer::{Slicer, JsonSink};
//!
//! // Slice a descriptor against its sheet
//! let settings = Slicer::new().slice_files("sheet.xml", "sheet.png")?;
//!
//! // Or stream straight into a sink
//! let count = Slicer::new().slice_into(descriptor_reader, 512.0, JsonSink::new(std::io::stdout()))?;
//! ```
//!
//! ## Core Functions
//!
//! The two stages are also available on their own:
//!
//! ```
//! use sprite_xml_slicer::{map_records, parse_str};
//!
//! let records = parse_str(
//!     r#"<TextureAtlas><SubTexture name="hero" x="10" y="20" width="30" height="40"/></TextureAtlas>"#,
//! ).unwrap();
//! let rects = map_records(&records, 100.0);
//! assert_eq!(rects[0].y, 40.0);
//! ```

pub mod error;
pub mod descriptor;
pub mod slice;
pub mod sheet;
pub mod export;
pub mod slicer;

// Re-export main types for convenience
pub use error::{ErrorKind, Result, SlicerError};
pub use descriptor::{parse, parse_file, parse_str, SubTextureRecord};
pub use slice::{map_records, ImportSettings, NamedRect, SpriteImportMode, SpriteMetadata, TextureType};
pub use sheet::{extract_sprites, write_sprites, ExtractedSprite};
pub use export::{export_json_file, JsonSink, SliceSink};
pub use slicer::{Slicer, SlicerConfig};

#[cfg(feature = "wasm")]
pub mod wasm;
