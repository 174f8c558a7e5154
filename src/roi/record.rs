//! ROI record construction
//!
//! Builds the 64-byte primary header, the optional coordinate region and the
//! trailing 64-byte secondary header that together form one ImageJ ROI or
//! overlay record. Each build call owns a fresh buffer and returns an
//! immutable record; no scratch state is shared between calls.

use log::debug;

use crate::coordinate::{BoundingBox, Point};
use crate::roi::constants::{offsets, options, record};
use crate::roi::errors::{RoiError, RoiResult};
use crate::roi::fields::{self, FieldValue};
use crate::roi::geometry::GeometryKind;

/// Coordinate storage mode for a record's point data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// 2-byte integer pixel coordinates, truncated toward zero
    Integer,
    /// 4-byte floating point coordinates
    Subpixel,
}

/// Build options for a single record
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordOptions {
    /// Request subpixel coordinate storage; some kinds force this on
    pub subpixel: bool,
    /// Write the fixed white stroke color used for overlay records
    pub stroke_color: bool,
}

/// One finished record, immutable once built
#[derive(Debug, Clone)]
pub struct Record {
    bytes: Vec<u8>,
}

impl Record {
    /// Wrap an already-encoded byte buffer
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Record { bytes }
    }

    /// The encoded record bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the record holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Builds ROI and overlay records
///
/// Record layout: primary header at 0..64, coordinate arrays (if any) from
/// offset 64, secondary header last. Rect, oval and line geometry lives in
/// dedicated header float fields instead of the coordinate region.
pub struct RecordBuilder;

impl RecordBuilder {
    /// Build one record for the given geometry and point list
    ///
    /// Point count requirements: exactly 4 for rect/oval (the corners of a
    /// bounding rectangle), exactly 2 for a line, at least 1 otherwise.
    pub fn build(
        kind: GeometryKind,
        points: &[Point],
        options: RecordOptions,
    ) -> RoiResult<Record> {
        Self::validate_points(kind, points)?;

        let mode = if options.subpixel || kind.forces_subpixel() {
            ResolutionMode::Subpixel
        } else {
            ResolutionMode::Integer
        };

        // Rect/oval/line carry their geometry in header fields, so their
        // records store a zero coordinate count and no coordinate region
        let npoints = if kind.uses_header_fields() {
            0
        } else {
            points.len()
        };
        let coords_size = npoints * 2 * fields::coordinate_width(mode);

        debug!(
            "Building '{}' record: {} points, mode {:?}, {} coordinate bytes",
            kind.name(),
            points.len(),
            mode,
            coords_size
        );

        let mut buf = vec![0u8; record::HEADER_SIZE + record::HEADER2_SIZE + coords_size];

        let bounds = BoundingBox::from_points(points).ok_or_else(|| RoiError::GenericError(
            "cannot compute bounds of an empty point list".to_string(),
        ))?;

        Self::write_header(&mut buf, kind, &bounds, npoints, coords_size, options)?;
        Self::write_shape_fields(&mut buf, kind, points, &bounds)?;
        Self::write_coordinates(&mut buf, points, npoints, mode);

        Ok(Record::from_bytes(buf))
    }

    /// Check the point list against the kind's count requirements
    fn validate_points(kind: GeometryKind, points: &[Point]) -> RoiResult<()> {
        if points.is_empty() {
            return Err(RoiError::InvalidGeometry {
                kind: kind.name(),
                expected: "at least 1".to_string(),
                actual: 0,
            });
        }

        if let Some(required) = kind.required_points() {
            if points.len() != required {
                return Err(RoiError::InvalidGeometry {
                    kind: kind.name(),
                    expected: format!("exactly {}", required),
                    actual: points.len(),
                });
            }
        }

        Ok(())
    }

    /// Write the fixed fields of the primary header
    fn write_header(
        buf: &mut [u8],
        kind: GeometryKind,
        bounds: &BoundingBox,
        npoints: usize,
        coords_size: usize,
        options: RecordOptions,
    ) -> RoiResult<()> {
        buf[..4].copy_from_slice(&record::MAGIC);
        fields::write_field(buf, offsets::VERSION, FieldValue::Short(record::VERSION as i16))?;
        fields::write_field(buf, offsets::ROI_TYPE, FieldValue::Short(kind.code() as i16))?;

        fields::write_field(buf, offsets::TOP, FieldValue::Short(bounds.top as i16))?;
        fields::write_field(buf, offsets::LEFT, FieldValue::Short(bounds.left as i16))?;
        fields::write_field(buf, offsets::BOTTOM, FieldValue::Short(bounds.bottom as i16))?;
        fields::write_field(buf, offsets::RIGHT, FieldValue::Short(bounds.right as i16))?;

        fields::write_field(buf, offsets::N_COORDINATES, FieldValue::Short(npoints as i16))?;
        fields::write_field(
            buf,
            offsets::STROKE_WIDTH,
            FieldValue::Short(record::DEFAULT_STROKE_WIDTH as i16),
        )?;

        if options.stroke_color {
            fields::write_field(
                buf,
                offsets::STROKE_COLOR,
                FieldValue::Rgb(record::OVERLAY_STROKE_COLOR),
            )?;
        }

        // The subpixel bit is set even for integer coordinates, a fixed
        // quirk of the format
        fields::write_field(
            buf,
            offsets::OPTIONS,
            FieldValue::Short(options::SUB_PIXEL_RESOLUTION as i16),
        )?;
        fields::write_field(
            buf,
            offsets::HEADER2_OFFSET,
            FieldValue::Int((record::HEADER_SIZE + coords_size) as i32),
        )?;

        Ok(())
    }

    /// Write the kind-specific float fields for rect/oval and line records
    fn write_shape_fields(
        buf: &mut [u8],
        kind: GeometryKind,
        points: &[Point],
        bounds: &BoundingBox,
    ) -> RoiResult<()> {
        match kind {
            GeometryKind::Rect | GeometryKind::Oval => {
                fields::write_field(buf, offsets::XD, FieldValue::Int(bounds.left))?;
                fields::write_field(buf, offsets::YD, FieldValue::Int(bounds.top))?;
                fields::write_field(buf, offsets::HEIGHTD, FieldValue::Int(bounds.height()))?;
                fields::write_field(buf, offsets::WIDTHD, FieldValue::Int(bounds.width()))?;
            }
            GeometryKind::Line => {
                fields::write_field(buf, offsets::X1, FieldValue::Float(points[0].col))?;
                fields::write_field(buf, offsets::Y1, FieldValue::Float(points[0].row))?;
                fields::write_field(buf, offsets::X2, FieldValue::Float(points[1].col))?;
                fields::write_field(buf, offsets::Y2, FieldValue::Float(points[1].row))?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Write the coordinate arrays: all column values, then all row values
    fn write_coordinates(buf: &mut [u8], points: &[Point], npoints: usize, mode: ResolutionMode) {
        if npoints == 0 {
            return;
        }

        let width = fields::coordinate_width(mode);
        let cols_base = offsets::COORDINATES;
        let rows_base = cols_base + npoints * width;

        for (i, point) in points.iter().enumerate() {
            fields::write_coordinate(buf, cols_base + i * width, point.col, mode);
            fields::write_coordinate(buf, rows_base + i * width, point.row, mode);
        }
    }
}
