//! Sprite sheet image access.
//!
//! Supplies the sheet height needed by the mapper and crops individual
//! sprites out of the sheet.

mod extract;

pub use extract::{extract_sprites, write_sprites, ExtractedSprite};

use crate::error::{Result, SlicerError};
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;

/// Read the sheet height from an image file.
///
/// Only the image header is decoded.
pub fn image_height_from_path<P: AsRef<Path>>(path: P) -> Result<f32> {
    let (_, height) = image::image_dimensions(path)?;
    Ok(height as f32)
}

/// Read the sheet height from encoded image bytes.
pub fn image_height_from_bytes(data: &[u8]) -> Result<f32> {
    let (_, height) = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(height as f32)
}

/// Reject heights the mapper cannot meaningfully flip against.
pub fn validate_image_height(height: f32) -> Result<f32> {
    if height.is_finite() && height > 0.0 {
        Ok(height)
    } else {
        Err(SlicerError::InvalidImageHeight(height))
    }
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &image::RgbaImage) -> Result<Vec<u8>> {
    use image::ImageEncoder;

    let mut bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(Cursor::new(&mut bytes));
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_height_from_bytes() {
        let png = encode_png(&image::RgbaImage::new(4, 8)).unwrap();
        assert_eq!(image_height_from_bytes(&png).unwrap(), 8.0);
    }

    #[test]
    fn test_height_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        std::fs::write(&path, encode_png(&image::RgbaImage::new(16, 32)).unwrap()).unwrap();

        assert_eq!(image_height_from_path(&path).unwrap(), 32.0);
    }

    #[test]
    fn test_height_from_garbage() {
        let err = image_height_from_bytes(b"definitely not a png").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Image);
    }

    #[test]
    fn test_validate_image_height() {
        assert_eq!(validate_image_height(100.0).unwrap(), 100.0);
        assert!(validate_image_height(0.0).is_err());
        assert!(validate_image_height(-4.0).is_err());
        assert!(validate_image_height(f32::NAN).is_err());
        assert!(validate_image_height(f32::INFINITY).is_err());
    }
}
