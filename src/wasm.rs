//! WASM bindings for sprite-xml-slicer.
//!
//! This module provides JavaScript-friendly APIs for use in the browser.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();
}

/// Slicer configuration options.
#[wasm_bindgen]
pub struct SlicerOptions {
    pivot_x: f32,
    pivot_y: f32,
    pretty: bool,
}

impl Default for SlicerOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SlicerOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SlicerOptions {
        let config = crate::SlicerConfig::default();
        SlicerOptions {
            pivot_x: config.pivot[0],
            pivot_y: config.pivot[1],
            pretty: config.pretty,
        }
    }

    #[wasm_bindgen(setter)]
    pub fn set_pivot_x(&mut self, value: f32) {
        self.pivot_x = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_pivot_y(&mut self, value: f32) {
        self.pivot_y = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_pretty(&mut self, value: bool) {
        self.pretty = value;
    }
}

impl SlicerOptions {
    fn to_config(&self) -> crate::SlicerConfig {
        crate::SlicerConfig::default()
            .with_pivot(self.pivot_x, self.pivot_y)
            .with_pretty(self.pretty)
    }
}

/// Slice result containing import settings JSON.
#[wasm_bindgen]
pub struct SliceResult {
    json: String,
    sprite_count: usize,
}

#[wasm_bindgen]
impl SliceResult {
    /// Get the import settings as JSON.
    #[wasm_bindgen(getter)]
    pub fn json(&self) -> String {
        self.json.clone()
    }

    /// Get the number of sprites.
    #[wasm_bindgen(getter)]
    pub fn sprite_count(&self) -> usize {
        self.sprite_count
    }
}

/// Slice a descriptor against a sheet of known height.
#[wasm_bindgen]
pub fn slice_descriptor(
    xml: &str,
    image_height: f32,
    options: Option<SlicerOptions>,
) -> Result<SliceResult, JsError> {
    let config = options.unwrap_or_default().to_config();
    let pretty = config.pretty;

    let settings = crate::Slicer::with_config(config)
        .slice_reader(xml.as_bytes(), image_height)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let json = if pretty {
        settings.to_json_pretty()
    } else {
        settings.to_json()
    }
    .map_err(|e| JsError::new(&e.to_string()))?;

    Ok(SliceResult {
        json,
        sprite_count: settings.sprite_count(),
    })
}

/// Slice a descriptor, reading the sheet height from encoded image bytes.
#[wasm_bindgen]
pub fn slice_with_image(
    xml: &str,
    image_data: &[u8],
    options: Option<SlicerOptions>,
) -> Result<SliceResult, JsError> {
    let image_height = crate::sheet::image_height_from_bytes(image_data)
        .map_err(|e| JsError::new(&e.to_string()))?;
    slice_descriptor(xml, image_height, options)
}
