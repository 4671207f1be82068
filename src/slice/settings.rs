//! Texture importer settings produced from mapped rects.

use super::NamedRect;
use serde::{Deserialize, Serialize};

/// How the importer treats the texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureType {
    Default,
    Sprite,
}

/// Whether the texture holds one sprite or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteImportMode {
    Single,
    Multiple,
}

/// One sprite entry in the importer's sprite list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteMetadata {
    #[serde(flatten)]
    pub rect: NamedRect,
    /// Normalized pivot inside the rect, `[0.5, 0.5]` is the centre.
    pub pivot: [f32; 2],
}

/// Complete importer configuration for a sliced sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    pub texture_type: TextureType,
    pub sprite_import_mode: SpriteImportMode,
    pub sprites: Vec<SpriteMetadata>,
}

impl ImportSettings {
    /// Package rects as a multi-sprite import, keeping their order.
    pub fn from_rects(rects: Vec<NamedRect>, pivot: [f32; 2]) -> Self {
        Self {
            texture_type: TextureType::Sprite,
            sprite_import_mode: SpriteImportMode::Multiple,
            sprites: rects
                .into_iter()
                .map(|rect| SpriteMetadata { rect, pivot })
                .collect(),
        }
    }

    /// Number of sprites.
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Iterate over the sprite rects in order.
    pub fn rects(&self) -> impl Iterator<Item = &NamedRect> {
        self.sprites.iter().map(|s| &s.rect)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
