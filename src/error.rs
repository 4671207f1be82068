//! Error types for the sprite slicer.

use thiserror::Error;

/// Result type alias using SlicerError.
pub type Result<T> = std::result::Result<T, SlicerError>;

/// Coarse classification of a [`SlicerError`].
///
/// Adapters that only show a single message line can match on this instead
/// of the full error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The descriptor is not well-formed markup.
    InvalidDocument,
    /// A `SubTexture` element has a missing or non-numeric attribute.
    MalformedAttribute,
    /// The descriptor contains no `SubTexture` elements.
    NoRecordsFound,
    /// The sprite sheet image or its height could not be used.
    Image,
    /// Sprite extraction failed.
    Extraction,
    /// Reading or writing failed.
    Io,
}

/// Main error type for slicing operations.
#[derive(Error, Debug)]
pub enum SlicerError {
    /// The descriptor could not be parsed as markup.
    #[error("Invalid XML document: {0}")]
    InvalidDocument(String),

    /// A `SubTexture` element is missing a required attribute or has a bad value.
    #[error("Malformed attribute '{attribute}' on SubTexture #{element}: {reason}")]
    MalformedAttribute {
        /// Zero-based index of the element among matched `SubTexture` elements.
        element: usize,
        /// Attribute name.
        attribute: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The descriptor was well-formed but had no `SubTexture` elements.
    #[error("No subtextures found in XML")]
    NoRecordsFound,

    /// The sheet height is not a positive finite number.
    #[error("Invalid image height: {0}")]
    InvalidImageHeight(f32),

    /// A sprite region does not fit inside the sheet.
    #[error("Sprite '{name}' ({x}, {y}, {width}x{height}) lies outside the {sheet_width}x{sheet_height} sheet")]
    RegionOutOfBounds {
        name: String,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        sheet_width: u32,
        sheet_height: u32,
    },

    /// A sprite name cannot be used as an output file name.
    #[error("Invalid sprite name for output file: {0}")]
    InvalidSpriteName(String),

    /// Failed to read or process an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to serialize JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SlicerError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SlicerError::InvalidDocument(_) => ErrorKind::InvalidDocument,
            SlicerError::MalformedAttribute { .. } => ErrorKind::MalformedAttribute,
            SlicerError::NoRecordsFound => ErrorKind::NoRecordsFound,
            SlicerError::InvalidImageHeight(_) | SlicerError::Image(_) => ErrorKind::Image,
            SlicerError::RegionOutOfBounds { .. } | SlicerError::InvalidSpriteName(_) => {
                ErrorKind::Extraction
            }
            SlicerError::Json(_) | SlicerError::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether this error came from reading the descriptor.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidDocument | ErrorKind::MalformedAttribute | ErrorKind::NoRecordsFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_kinds() {
        assert_eq!(SlicerError::NoRecordsFound.kind(), ErrorKind::NoRecordsFound);
        assert!(SlicerError::NoRecordsFound.is_parse_error());
        assert!(SlicerError::InvalidDocument("eof".into()).is_parse_error());
        assert!(!SlicerError::InvalidImageHeight(0.0).is_parse_error());
    }

    #[test]
    fn test_messages_are_single_line() {
        let err = SlicerError::MalformedAttribute {
            element: 2,
            attribute: "width",
            reason: "missing".to_string(),
        };
        let message = err.to_string();
        assert_eq!(message, "Malformed attribute 'width' on SubTexture #2: missing");
        assert!(!message.contains('\n'));
        assert_eq!(SlicerError::NoRecordsFound.to_string(), "No subtextures found in XML");
    }
}
