//! Field encoding table for the record header
//!
//! Every named field of the 64-byte primary header has a fixed primitive
//! encoding. Almost everything is big endian; the geometry type field at
//! offset 6 is little endian, a quirk of the ImageJ format that consumers
//! depend on and that must not be normalized.

use std::collections::HashMap;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use lazy_static::lazy_static;

use crate::roi::constants::offsets;
use crate::roi::errors::{RoiError, RoiResult};
use crate::roi::record::ResolutionMode;

/// Primitive encoding of one header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCodec {
    /// Big-endian 16-bit integer
    BeShort,
    /// Little-endian 16-bit integer
    LeShort,
    /// Big-endian 32-bit integer
    BeInt,
    /// Big-endian 32-bit IEEE float
    BeFloat,
    /// Three raw RGB bytes
    Rgb,
    /// Coordinate arrays, width chosen by the resolution mode at build time
    Coordinates,
}

impl FieldCodec {
    /// Encoded width in bytes, or None for the variable coordinate region
    pub fn width(&self) -> Option<usize> {
        match self {
            FieldCodec::BeShort | FieldCodec::LeShort => Some(2),
            FieldCodec::BeInt | FieldCodec::BeFloat => Some(4),
            FieldCodec::Rgb => Some(3),
            FieldCodec::Coordinates => None,
        }
    }
}

lazy_static! {
    // Encodings of the explicitly declared header fields. Unlisted offsets
    // are reserved bytes that fall back to big-endian 16-bit.
    static ref FIELD_CODECS: HashMap<usize, FieldCodec> = {
        let mut codecs = HashMap::new();
        codecs.insert(offsets::VERSION, FieldCodec::BeShort);
        // 'type' is saved little endian in contrast to all other fields
        codecs.insert(offsets::ROI_TYPE, FieldCodec::LeShort);
        codecs.insert(offsets::TOP, FieldCodec::BeShort);
        codecs.insert(offsets::LEFT, FieldCodec::BeShort);
        codecs.insert(offsets::BOTTOM, FieldCodec::BeShort);
        codecs.insert(offsets::RIGHT, FieldCodec::BeShort);
        codecs.insert(offsets::N_COORDINATES, FieldCodec::BeShort);
        // X1/Y1/X2/Y2 alias XD/YD/WIDTHD/HEIGHTD, all stored as floats
        codecs.insert(offsets::X1, FieldCodec::BeFloat);
        codecs.insert(offsets::Y1, FieldCodec::BeFloat);
        codecs.insert(offsets::X2, FieldCodec::BeFloat);
        codecs.insert(offsets::Y2, FieldCodec::BeFloat);
        codecs.insert(offsets::STROKE_WIDTH, FieldCodec::BeShort);
        codecs.insert(offsets::STROKE_COLOR, FieldCodec::Rgb);
        codecs.insert(offsets::HEADER2_OFFSET, FieldCodec::BeInt);
        codecs.insert(offsets::COORDINATES, FieldCodec::Coordinates);
        codecs
    };
}

/// Looks up the encoding for a header field offset
///
/// Total over all offsets: anything not explicitly declared is a reserved
/// field encoded as a big-endian 16-bit integer.
pub fn encoding_for(offset: usize) -> FieldCodec {
    FIELD_CODECS
        .get(&offset)
        .copied()
        .unwrap_or(FieldCodec::BeShort)
}

/// Value accepted by `write_field`
///
/// Numeric values are converted to the width and type the field's codec
/// demands, so callers can pass integer pixel bounds into float fields the
/// same way the format's producers do.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue {
    Short(i16),
    Int(i32),
    Float(f32),
    Rgb([u8; 3]),
}

impl FieldValue {
    fn as_i16(&self) -> RoiResult<i16> {
        match self {
            FieldValue::Short(v) => Ok(*v),
            FieldValue::Int(v) => Ok(*v as i16),
            FieldValue::Float(v) => Ok(*v as i16),
            FieldValue::Rgb(_) => Err(RoiError::GenericError(
                "RGB value written to an integer field".to_string(),
            )),
        }
    }

    fn as_i32(&self) -> RoiResult<i32> {
        match self {
            FieldValue::Short(v) => Ok(i32::from(*v)),
            FieldValue::Int(v) => Ok(*v),
            FieldValue::Float(v) => Ok(*v as i32),
            FieldValue::Rgb(_) => Err(RoiError::GenericError(
                "RGB value written to an integer field".to_string(),
            )),
        }
    }

    fn as_f32(&self) -> RoiResult<f32> {
        match self {
            FieldValue::Short(v) => Ok(f32::from(*v)),
            FieldValue::Int(v) => Ok(*v as f32),
            FieldValue::Float(v) => Ok(*v),
            FieldValue::Rgb(_) => Err(RoiError::GenericError(
                "RGB value written to a float field".to_string(),
            )),
        }
    }

    fn as_rgb(&self) -> RoiResult<[u8; 3]> {
        match self {
            FieldValue::Rgb(v) => Ok(*v),
            _ => Err(RoiError::GenericError(
                "numeric value written to an RGB field".to_string(),
            )),
        }
    }
}

/// Writes a single header field using the encoding registered for its offset
///
/// The coordinate region is not a single field; writing it through this
/// function is a contract violation and fails.
pub fn write_field(buf: &mut [u8], offset: usize, value: FieldValue) -> RoiResult<()> {
    let codec = encoding_for(offset);

    let width = codec.width().ok_or_else(|| {
        RoiError::GenericError(format!(
            "offset {} is the coordinate region, written by the record builder",
            offset
        ))
    })?;

    if offset + width > buf.len() {
        return Err(RoiError::GenericError(format!(
            "field at offset {} does not fit in a {} byte record",
            offset,
            buf.len()
        )));
    }

    match codec {
        FieldCodec::BeShort => BigEndian::write_i16(&mut buf[offset..offset + 2], value.as_i16()?),
        FieldCodec::LeShort => {
            LittleEndian::write_i16(&mut buf[offset..offset + 2], value.as_i16()?)
        }
        FieldCodec::BeInt => BigEndian::write_i32(&mut buf[offset..offset + 4], value.as_i32()?),
        FieldCodec::BeFloat => BigEndian::write_f32(&mut buf[offset..offset + 4], value.as_f32()?),
        FieldCodec::Rgb => buf[offset..offset + 3].copy_from_slice(&value.as_rgb()?),
        FieldCodec::Coordinates => unreachable!("coordinate codec has no fixed width"),
    }

    Ok(())
}

/// Width in bytes of one coordinate value in the given resolution mode
pub fn coordinate_width(mode: ResolutionMode) -> usize {
    match mode {
        ResolutionMode::Integer => 2,
        ResolutionMode::Subpixel => 4,
    }
}

/// Writes one coordinate value at `offset`
///
/// Integer mode truncates toward zero into a big-endian 16-bit integer;
/// subpixel mode stores the value as a big-endian 32-bit float. The caller
/// must size the buffer so the value fits.
pub fn write_coordinate(buf: &mut [u8], offset: usize, value: f32, mode: ResolutionMode) {
    match mode {
        ResolutionMode::Integer => {
            BigEndian::write_i16(&mut buf[offset..offset + 2], value as i16)
        }
        ResolutionMode::Subpixel => BigEndian::write_f32(&mut buf[offset..offset + 4], value),
    }
}
