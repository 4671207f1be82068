//! Cropping sprites out of a sheet.

use crate::descriptor::SubTextureRecord;
use crate::error::{Result, SlicerError};
use image::{imageops, RgbaImage};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// A sprite cropped from the sheet.
#[derive(Debug, Clone)]
pub struct ExtractedSprite {
    pub name: String,
    pub image: RgbaImage,
}

/// Crop every record out of `sheet`.
///
/// Records use the descriptor's top-left origin, so no flip is applied. All
/// records are bounds-checked before any pixels are copied.
pub fn extract_sprites(sheet: &RgbaImage, records: &[SubTextureRecord]) -> Result<Vec<ExtractedSprite>> {
    let (sheet_width, sheet_height) = sheet.dimensions();

    if let Some(record) = records.iter().find(|r| !r.fits_within(sheet_width, sheet_height)) {
        return Err(SlicerError::RegionOutOfBounds {
            name: record.name.clone(),
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            sheet_width,
            sheet_height,
        });
    }

    Ok(records
        .iter()
        .map(|record| ExtractedSprite {
            name: record.name.clone(),
            image: imageops::crop_imm(
                sheet,
                record.x as u32,
                record.y as u32,
                record.width as u32,
                record.height as u32,
            )
            .to_image(),
        })
        .collect())
}

/// Write sprites as PNG files under `dir`, returning the written paths.
///
/// Names may contain `/` to place sprites in sub-directories. Names are
/// checked up front so a bad name leaves the directory untouched. Sprites
/// that would land on an already used file get a numeric suffix
/// (`same.png`, `same_1.png`, ...), so every sprite is written.
pub fn write_sprites<P: AsRef<Path>>(dir: P, sprites: &[ExtractedSprite]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut taken = HashSet::new();
    let mut paths = Vec::with_capacity(sprites.len());
    for sprite in sprites {
        let stem = sprite_stem(&sprite.name)?;
        let path = unique_path(dir, &stem, &mut taken);
        paths.push(path);
    }

    for (sprite, path) in sprites.iter().zip(&paths) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, super::encode_png(&sprite.image)?)?;
        tracing::debug!("Wrote {} to {}", sprite.name, path.display());
    }

    Ok(paths)
}

/// Relative path of a sprite without its `.png` extension.
fn sprite_stem(name: &str) -> Result<PathBuf> {
    let trimmed = if name.to_ascii_lowercase().ends_with(".png") {
        &name[..name.len() - 4]
    } else {
        name
    };

    let mut stem = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => stem.push(part),
            Component::CurDir => {}
            _ => return Err(SlicerError::InvalidSpriteName(name.to_string())),
        }
    }
    if stem.as_os_str().is_empty() {
        return Err(SlicerError::InvalidSpriteName(name.to_string()));
    }
    Ok(stem)
}

fn unique_path(dir: &Path, stem: &Path, taken: &mut HashSet<PathBuf>) -> PathBuf {
    let mut candidate = dir.join(with_png(stem, None));
    let mut suffix = 1;
    while !taken.insert(candidate.clone()) {
        candidate = dir.join(with_png(stem, Some(suffix)));
        suffix += 1;
    }
    candidate
}

fn with_png(stem: &Path, suffix: Option<usize>) -> PathBuf {
    let mut file_name = stem.as_os_str().to_os_string();
    if let Some(n) = suffix {
        file_name.push(format!("_{}", n));
    }
    file_name.push(".png");
    PathBuf::from(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// 4x4 sheet split into four 2x2 quadrants of different colors.
    fn quadrant_sheet() -> RgbaImage {
        RgbaImage::from_fn(4, 4, |x, y| match (x < 2, y < 2) {
            (true, true) => image::Rgba([255, 0, 0, 255]),
            (false, true) => image::Rgba([0, 255, 0, 255]),
            (true, false) => image::Rgba([0, 0, 255, 255]),
            (false, false) => image::Rgba([255, 255, 255, 255]),
        })
    }

    #[test]
    fn test_extract_uses_top_left_origin() {
        let records = vec![
            SubTextureRecord::new("red", 0, 0, 2, 2),
            SubTextureRecord::new("white", 2, 2, 2, 2),
        ];
        let sprites = extract_sprites(&quadrant_sheet(), &records).unwrap();

        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites[0].name, "red");
        assert_eq!(sprites[0].image.dimensions(), (2, 2));
        assert_eq!(sprites[0].image.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(sprites[1].image.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_extract_out_of_bounds() {
        let records = vec![
            SubTextureRecord::new("ok", 0, 0, 2, 2),
            SubTextureRecord::new("too_wide", 3, 0, 2, 2),
        ];
        let err = extract_sprites(&quadrant_sheet(), &records).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Extraction);
        assert!(err.to_string().contains("too_wide"));
    }

    #[test]
    fn test_write_sprites() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            SubTextureRecord::new("hero", 0, 0, 2, 2),
            SubTextureRecord::new("tiles/grass.png", 2, 0, 2, 2),
        ];
        let sprites = extract_sprites(&quadrant_sheet(), &records).unwrap();
        let paths = write_sprites(dir.path(), &sprites).unwrap();

        assert_eq!(paths[0], dir.path().join("hero.png"));
        assert_eq!(paths[1], dir.path().join("tiles/grass.png"));

        let green = image::open(&paths[1]).unwrap().to_rgba8();
        assert_eq!(green.get_pixel(0, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_write_keeps_duplicate_names() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            SubTextureRecord::new("same", 0, 0, 2, 2),
            SubTextureRecord::new("same", 2, 0, 2, 2),
            SubTextureRecord::new("same.png", 0, 2, 2, 2),
        ];
        let sprites = extract_sprites(&quadrant_sheet(), &records).unwrap();
        let paths = write_sprites(dir.path(), &sprites).unwrap();

        assert_eq!(
            paths,
            vec![
                dir.path().join("same.png"),
                dir.path().join("same_1.png"),
                dir.path().join("same_2.png"),
            ]
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);

        let red = image::open(&paths[0]).unwrap().to_rgba8();
        let green = image::open(&paths[1]).unwrap().to_rgba8();
        assert_eq!(red.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(green.get_pixel(0, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_write_rejects_escaping_names() {
        let dir = tempfile::tempdir().unwrap();
        let sprites = vec![
            ExtractedSprite {
                name: "fine".to_string(),
                image: RgbaImage::new(1, 1),
            },
            ExtractedSprite {
                name: "../outside".to_string(),
                image: RgbaImage::new(1, 1),
            },
        ];

        let err = write_sprites(dir.path(), &sprites).unwrap_err();
        assert!(matches!(err, SlicerError::InvalidSpriteName(_)));
        assert!(!dir.path().join("fine.png").exists());
    }
}
