//! Streaming `SubTexture` scanner.

use super::{SubTextureRecord, SUBTEXTURE_TAG};
use crate::error::{Result, SlicerError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a descriptor from any buffered reader.
///
/// Elements are visited one at a time without building a tree. Records come
/// back in document order. The first bad element aborts the scan, and a
/// document without any `SubTexture` element is reported as
/// [`SlicerError::NoRecordsFound`]. A second root element, text outside the
/// root, or an undefined entity makes the document invalid.
pub fn parse<R: BufRead>(source: R) -> Result<Vec<SubTextureRecord>> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut records = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut root_closed = false;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            SlicerError::InvalidDocument(format!(
                "{} at byte {}",
                e,
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(element) => {
                if root_closed {
                    return Err(extra_root_content(&reader));
                }
                saw_root = true;
                depth += 1;
                if element.name().as_ref() == SUBTEXTURE_TAG.as_bytes() {
                    records.push(read_record(&element, records.len())?);
                }
            }
            Event::Empty(element) => {
                if root_closed {
                    return Err(extra_root_content(&reader));
                }
                saw_root = true;
                if depth == 0 {
                    root_closed = true;
                }
                if element.name().as_ref() == SUBTEXTURE_TAG.as_bytes() {
                    records.push(read_record(&element, records.len())?);
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| SlicerError::InvalidDocument(e.to_string()))?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(SlicerError::InvalidDocument(format!(
                        "text outside the root element at byte {}",
                        reader.buffer_position()
                    )));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(SlicerError::InvalidDocument(format!(
                    "CDATA outside the root element at byte {}",
                    reader.buffer_position()
                )));
            }
            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    if !saw_root {
        return Err(SlicerError::InvalidDocument(
            "document has no root element".to_string(),
        ));
    }
    if depth > 0 {
        return Err(SlicerError::InvalidDocument(format!(
            "unexpected end of document with {} unclosed element(s)",
            depth
        )));
    }
    if records.is_empty() {
        return Err(SlicerError::NoRecordsFound);
    }

    tracing::info!("Found {} subtextures", records.len());
    Ok(records)
}

/// Parse a descriptor held in memory.
pub fn parse_str(xml: &str) -> Result<Vec<SubTextureRecord>> {
    parse(xml.as_bytes())
}

/// Parse a descriptor file.
///
/// The file handle is dropped when this returns, on success or failure.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<SubTextureRecord>> {
    let path = path.as_ref();
    tracing::info!("Reading subtextures from {}", path.display());
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

fn extra_root_content<R>(reader: &Reader<R>) -> SlicerError {
    SlicerError::InvalidDocument(format!(
        "element after the root element at byte {}",
        reader.buffer_position()
    ))
}

/// Attributes of one `SubTexture` element, collected in any order.
#[derive(Default)]
struct PendingRecord {
    name: Option<String>,
    x: Option<i32>,
    y: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
}

fn read_record(element: &BytesStart<'_>, index: usize) -> Result<SubTextureRecord> {
    let mut pending = PendingRecord::default();

    for attr in element.attributes() {
        let attr = attr.map_err(|e| SlicerError::InvalidDocument(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| SlicerError::InvalidDocument(e.to_string()))?;

        match attr.key.as_ref() {
            b"name" => pending.name = Some(value.into_owned()),
            b"x" => pending.x = Some(parse_int(&value, "x", index)?),
            b"y" => pending.y = Some(parse_int(&value, "y", index)?),
            b"width" => pending.width = Some(parse_int(&value, "width", index)?),
            b"height" => pending.height = Some(parse_int(&value, "height", index)?),
            _ => {}
        }
    }

    Ok(SubTextureRecord {
        x: require(pending.x, "x", index)?,
        y: require(pending.y, "y", index)?,
        width: require(pending.width, "width", index)?,
        height: require(pending.height, "height", index)?,
        name: require(pending.name, "name", index)?,
    })
}

fn parse_int(value: &str, attribute: &'static str, element: usize) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| SlicerError::MalformedAttribute {
            element,
            attribute,
            reason: format!("'{}' is not an integer", value),
        })
}

fn require<T>(value: Option<T>, attribute: &'static str, element: usize) -> Result<T> {
    value.ok_or_else(|| SlicerError::MalformedAttribute {
        element,
        attribute,
        reason: "missing".to_string(),
    })
}
