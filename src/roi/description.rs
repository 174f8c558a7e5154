//! Annotation description files
//!
//! The CLI consumes a TOML document describing the annotations to encode:
//! `[[roi]]` and `[[overlay]]` tables with a geometry kind and a point list,
//! an optional `[info]` table, and `[[extra]]` tables for caller-defined
//! blocks. Parsing walks the TOML value tree directly.
//!
//! ```toml
//! [[roi]]
//! kind = "point"
//! points = [[10.0, 20.0]]
//!
//! [[overlay]]
//! kind = "rect"
//! points = [[0, 0], [0, 10], [5, 0], [5, 10]]
//!
//! [info]
//! text = "sample A3"
//!
//! [[extra]]
//! tag = "cal0"
//! text = "1.25 um/px"
//! ```

use std::fs;

use log::debug;

use crate::coordinate::Point;
use crate::roi::container::MetadataContainer;
use crate::roi::errors::{RoiError, RoiResult};
use crate::roi::geometry::GeometryKind;
use crate::roi::info::TextEncoding;

/// One ROI or overlay entry of a description file
#[derive(Debug, Clone)]
pub struct AnnotationEntry {
    /// Geometry kind
    pub kind: GeometryKind,
    /// Vertex list in (row, col) pixel order
    pub points: Vec<Point>,
    /// Requested subpixel coordinate storage
    pub subpixel: bool,
}

/// The info block of a description file
#[derive(Debug, Clone)]
pub struct InfoEntry {
    /// Free text to embed
    pub text: String,
    /// Source encoding of the text
    pub encoding: TextEncoding,
}

/// One caller-defined extra block of a description file
#[derive(Debug, Clone)]
pub struct ExtraEntry {
    /// Four byte block tag
    pub tag: String,
    /// Payload bytes
    pub bytes: Vec<u8>,
}

/// Parsed annotation description
#[derive(Debug, Clone, Default)]
pub struct AnnotationDescription {
    /// ROI entries in file order
    pub rois: Vec<AnnotationEntry>,
    /// Overlay entries in file order
    pub overlays: Vec<AnnotationEntry>,
    /// Optional info block
    pub info: Option<InfoEntry>,
    /// Extra blocks in file order
    pub extras: Vec<ExtraEntry>,
}

impl AnnotationDescription {
    /// Parse a description from TOML text
    pub fn from_str(content: &str) -> RoiResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => {
                return Err(RoiError::GenericError(format!(
                    "Failed to parse TOML: {}",
                    e
                )))
            }
        };

        let description = AnnotationDescription {
            rois: Self::parse_annotations(&toml_value, "roi")?,
            overlays: Self::parse_annotations(&toml_value, "overlay")?,
            info: Self::parse_info(&toml_value)?,
            extras: Self::parse_extras(&toml_value)?,
        };

        debug!(
            "Parsed description: {} ROIs, {} overlays, info: {}, {} extras",
            description.rois.len(),
            description.overlays.len(),
            description.info.is_some(),
            description.extras.len()
        );

        Ok(description)
    }

    /// Load and parse a description file
    pub fn load(path: &str) -> RoiResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Populate a fresh container with every entry of this description
    pub fn build_container(&self) -> RoiResult<MetadataContainer> {
        let mut metadata = MetadataContainer::new();

        for entry in &self.rois {
            metadata.add_roi(&entry.points, entry.kind, entry.subpixel)?;
        }
        for entry in &self.overlays {
            metadata.add_overlay(&entry.points, entry.kind, entry.subpixel)?;
        }
        if let Some(info) = &self.info {
            metadata.add_info(&info.text, info.encoding)?;
        }
        for extra in &self.extras {
            metadata.add_extra_metadata(&extra.tag, &extra.bytes)?;
        }

        Ok(metadata)
    }

    /// Parse an array of `[[roi]]` / `[[overlay]]` tables
    fn parse_annotations(value: &toml::Value, key: &str) -> RoiResult<Vec<AnnotationEntry>> {
        let mut entries = Vec::new();

        if let Some(items) = value.get(key).and_then(|v| v.as_array()) {
            for item in items {
                let kind_name = item.get("kind").and_then(|v| v.as_str()).unwrap_or("point");
                let kind = GeometryKind::from_name(kind_name).ok_or_else(|| {
                    RoiError::GenericError(format!("Unknown geometry kind '{}'", kind_name))
                })?;

                let points = Self::parse_points(item, key)?;
                let subpixel = item
                    .get("subpixel")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);

                entries.push(AnnotationEntry {
                    kind,
                    points,
                    subpixel,
                });
            }
        }

        Ok(entries)
    }

    /// Parse the `points` array of one annotation table
    fn parse_points(item: &toml::Value, key: &str) -> RoiResult<Vec<Point>> {
        let array = item.get("points").and_then(|v| v.as_array()).ok_or_else(|| {
            RoiError::GenericError(format!("[[{}]] entry is missing a 'points' array", key))
        })?;

        array.iter().map(Self::parse_point).collect()
    }

    /// Parse one `[row, col]` pair
    fn parse_point(value: &toml::Value) -> RoiResult<Point> {
        let pair = value.as_array().filter(|a| a.len() == 2).ok_or_else(|| {
            RoiError::GenericError("each point must be a [row, col] pair".to_string())
        })?;

        let row = Self::as_number(&pair[0])
            .ok_or_else(|| RoiError::GenericError("point row is not a number".to_string()))?;
        let col = Self::as_number(&pair[1])
            .ok_or_else(|| RoiError::GenericError("point column is not a number".to_string()))?;

        Ok(Point::new(row as f32, col as f32))
    }

    /// Parse the optional `[info]` table
    fn parse_info(value: &toml::Value) -> RoiResult<Option<InfoEntry>> {
        let table = match value.get("info").and_then(|v| v.as_table()) {
            Some(table) => table,
            None => return Ok(None),
        };

        let text = table
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| RoiError::GenericError("[info] is missing 'text'".to_string()))?
            .to_string();

        let encoding = match table.get("encoding").and_then(|v| v.as_str()) {
            Some(name) => TextEncoding::from_name(name).ok_or_else(|| {
                RoiError::GenericError(format!("Unknown info encoding '{}'", name))
            })?,
            None => TextEncoding::default(),
        };

        Ok(Some(InfoEntry { text, encoding }))
    }

    /// Parse the `[[extra]]` tables
    ///
    /// The payload comes from either a `bytes` array of integers in 0..=255
    /// or a `text` string, whichever the entry provides.
    fn parse_extras(value: &toml::Value) -> RoiResult<Vec<ExtraEntry>> {
        let mut extras = Vec::new();

        if let Some(items) = value.get("extra").and_then(|v| v.as_array()) {
            for item in items {
                let tag = item
                    .get("tag")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        RoiError::GenericError("[[extra]] entry is missing 'tag'".to_string())
                    })?
                    .to_string();

                let bytes = if let Some(text) = item.get("text").and_then(|v| v.as_str()) {
                    text.as_bytes().to_vec()
                } else if let Some(values) = item.get("bytes").and_then(|v| v.as_array()) {
                    Self::parse_byte_array(values)?
                } else {
                    return Err(RoiError::GenericError(format!(
                        "[[extra]] entry '{}' needs either 'text' or 'bytes'",
                        tag
                    )));
                };

                extras.push(ExtraEntry { tag, bytes });
            }
        }

        Ok(extras)
    }

    /// Parse an array of integers in 0..=255 into bytes
    fn parse_byte_array(values: &[toml::Value]) -> RoiResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(values.len());

        for value in values {
            let n = value.as_integer().filter(|n| (0..=255).contains(n)).ok_or_else(|| {
                RoiError::GenericError("'bytes' values must be integers in 0..=255".to_string())
            })?;
            bytes.push(n as u8);
        }

        Ok(bytes)
    }

    /// Read a TOML number as f64, accepting both float and integer literals
    fn as_number(value: &toml::Value) -> Option<f64> {
        value
            .as_float()
            .or_else(|| value.as_integer().map(|n| n as f64))
    }
}
