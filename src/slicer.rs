//! Descriptor-to-import-settings pipeline.

use crate::descriptor::{self, SubTextureRecord};
use crate::error::Result;
use crate::export::SliceSink;
use crate::sheet;
use crate::slice::{self, ImportSettings};
use std::io::BufRead;
use std::path::Path;

/// Slicer configuration.
#[derive(Debug, Clone)]
pub struct SlicerConfig {
    /// Normalized pivot given to every sprite.
    pub pivot: [f32; 2],
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            pivot: [0.5, 0.5],
            pretty: true,
        }
    }
}

impl SlicerConfig {
    pub fn with_pivot(mut self, x: f32, y: f32) -> Self {
        self.pivot = [x, y];
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Turns a descriptor plus a sheet height into import settings.
#[derive(Debug, Clone, Default)]
pub struct Slicer {
    config: SlicerConfig,
}

impl Slicer {
    /// Create a slicer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slicer with custom configuration.
    pub fn with_config(config: SlicerConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &SlicerConfig {
        &self.config
    }

    /// Map already-parsed records into import settings.
    pub fn slice_records(&self, records: &[SubTextureRecord], image_height: f32) -> Result<ImportSettings> {
        let image_height = sheet::validate_image_height(image_height)?;
        tracing::info!(
            "Starting slicing with {} subtextures, image height {}",
            records.len(),
            image_height
        );

        let rects = slice::map_records(records, image_height);
        Ok(ImportSettings::from_rects(rects, self.config.pivot))
    }

    /// Parse a descriptor stream and slice it against a sheet of the given height.
    pub fn slice_reader<R: BufRead>(&self, descriptor: R, image_height: f32) -> Result<ImportSettings> {
        let records = descriptor::parse(descriptor)?;
        self.slice_records(&records, image_height)
    }

    /// Slice using a descriptor file and the sheet image it describes.
    pub fn slice_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        descriptor_path: P,
        image_path: Q,
    ) -> Result<ImportSettings> {
        let image_height = sheet::image_height_from_path(image_path)?;
        let records = descriptor::parse_file(descriptor_path)?;
        self.slice_records(&records, image_height)
    }

    /// Slice a descriptor and hand the result to `sink`.
    ///
    /// The sink is only called once slicing has fully succeeded.
    pub fn slice_into<R: BufRead, S: SliceSink>(
        &self,
        descriptor: R,
        image_height: f32,
        mut sink: S,
    ) -> Result<usize> {
        let settings = self.slice_reader(descriptor, image_height)?;
        let count = settings.sprite_count();

        tracing::info!("Applying {} sprites to sink", count);
        sink.apply(settings)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SlicerError};

    const HERO: &str =
        r#"<TextureAtlas><SubTexture name="hero" x="10" y="20" width="30" height="40"/></TextureAtlas>"#;

    #[test]
    fn test_slice_reader() {
        let settings = Slicer::new().slice_reader(HERO.as_bytes(), 100.0).unwrap();
        assert_eq!(settings.sprite_count(), 1);

        let sprite = &settings.sprites[0];
        assert_eq!(sprite.rect.name, "hero");
        assert_eq!(sprite.rect.x, 10.0);
        assert_eq!(sprite.rect.y, 40.0);
        assert_eq!(sprite.rect.width, 30.0);
        assert_eq!(sprite.rect.height, 40.0);
        assert_eq!(sprite.pivot, [0.5, 0.5]);
    }

    #[test]
    fn test_custom_pivot() {
        let slicer = Slicer::with_config(SlicerConfig::default().with_pivot(0.0, 0.0));
        let settings = slicer.slice_reader(HERO.as_bytes(), 100.0).unwrap();
        assert_eq!(settings.sprites[0].pivot, [0.0, 0.0]);
    }

    #[test]
    fn test_invalid_height_rejected() {
        let err = Slicer::new().slice_reader(HERO.as_bytes(), 0.0).unwrap_err();
        assert!(matches!(err, SlicerError::InvalidImageHeight(_)));
    }

    #[test]
    fn test_sink_untouched_on_failure() {
        let mut sink: Vec<ImportSettings> = Vec::new();
        let err = Slicer::new()
            .slice_into(
                r#"<TextureAtlas>
                    <SubTexture name="a" x="0" y="0" width="1" height="1"/>
                    <SubTexture name="b" x="0" y="0" height="1"/>
                </TextureAtlas>"#
                    .as_bytes(),
                64.0,
                &mut sink,
            )
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedAttribute);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_sink_receives_all_sprites() {
        let mut sink: Vec<ImportSettings> = Vec::new();
        let count = Slicer::new()
            .slice_into(
                r#"<TextureAtlas>
                    <SubTexture name="a" x="0" y="0" width="8" height="8"/>
                    <SubTexture name="b" x="8" y="0" width="8" height="8"/>
                </TextureAtlas>"#
                    .as_bytes(),
                16.0,
                &mut sink,
            )
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(sink.len(), 1);
        let names: Vec<_> = sink[0].rects().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_slice_files() {
        let dir = tempfile::tempdir().unwrap();
        let xml_path = dir.path().join("sheet.xml");
        let png_path = dir.path().join("sheet.png");
        std::fs::write(&xml_path, HERO).unwrap();
        std::fs::write(&png_path, sheet::encode_png(&image::RgbaImage::new(64, 100)).unwrap()).unwrap();

        let settings = Slicer::new().slice_files(&xml_path, &png_path).unwrap();
        assert_eq!(settings.sprites[0].rect.y, 40.0);
    }
}
