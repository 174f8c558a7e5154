//! Tests for the field encoding table

extern crate std;

use byteorder::{BigEndian, ByteOrder};
use crate::roi::constants::offsets;
use crate::roi::fields::{self, FieldCodec, FieldValue};
use crate::roi::record::ResolutionMode;

#[test]
fn test_encoding_for_declared_fields() {
    std::assert_eq!(fields::encoding_for(offsets::VERSION), FieldCodec::BeShort);
    std::assert_eq!(fields::encoding_for(offsets::ROI_TYPE), FieldCodec::LeShort);
    std::assert_eq!(fields::encoding_for(offsets::TOP), FieldCodec::BeShort);
    std::assert_eq!(fields::encoding_for(offsets::X1), FieldCodec::BeFloat);
    std::assert_eq!(fields::encoding_for(offsets::HEIGHTD), FieldCodec::BeFloat);
    std::assert_eq!(fields::encoding_for(offsets::STROKE_COLOR), FieldCodec::Rgb);
    std::assert_eq!(fields::encoding_for(offsets::HEADER2_OFFSET), FieldCodec::BeInt);
    std::assert_eq!(fields::encoding_for(offsets::COORDINATES), FieldCodec::Coordinates);
}

#[test]
fn test_encoding_for_falls_back_to_big_endian_short() {
    // Reserved offsets are not declared in the table
    std::assert_eq!(fields::encoding_for(0), FieldCodec::BeShort);
    std::assert_eq!(fields::encoding_for(36), FieldCodec::BeShort);
    std::assert_eq!(fields::encoding_for(999), FieldCodec::BeShort);
}

#[test]
fn test_write_field_endianness() {
    let mut buf = [0u8; 64];

    // The type field is the single little-endian exception
    fields::write_field(&mut buf, offsets::ROI_TYPE, FieldValue::Short(3)).unwrap();
    std::assert_eq!(&buf[offsets::ROI_TYPE..offsets::ROI_TYPE + 2], &[3, 0]);

    // Everything else is big endian
    fields::write_field(&mut buf, offsets::TOP, FieldValue::Short(3)).unwrap();
    std::assert_eq!(&buf[offsets::TOP..offsets::TOP + 2], &[0, 3]);
}

#[test]
fn test_write_field_converts_ints_into_float_fields() {
    let mut buf = [0u8; 64];

    fields::write_field(&mut buf, offsets::XD, FieldValue::Int(5)).unwrap();
    std::assert_eq!(BigEndian::read_f32(&buf[offsets::XD..offsets::XD + 4]), 5.0);
}

#[test]
fn test_write_field_int_field() {
    let mut buf = [0u8; 64];

    fields::write_field(&mut buf, offsets::HEADER2_OFFSET, FieldValue::Int(72)).unwrap();
    std::assert_eq!(
        BigEndian::read_i32(&buf[offsets::HEADER2_OFFSET..offsets::HEADER2_OFFSET + 4]),
        72
    );
}

#[test]
fn test_write_field_rgb() {
    let mut buf = [0u8; 64];

    fields::write_field(&mut buf, offsets::STROKE_COLOR, FieldValue::Rgb([255, 255, 255])).unwrap();
    std::assert_eq!(&buf[offsets::STROKE_COLOR..offsets::STROKE_COLOR + 3], &[255, 255, 255]);
}

#[test]
fn test_write_field_rejects_mismatched_values() {
    let mut buf = [0u8; 64];

    // Numeric value into the RGB field
    std::assert!(fields::write_field(&mut buf, offsets::STROKE_COLOR, FieldValue::Short(1)).is_err());
    // RGB value into a numeric field
    std::assert!(fields::write_field(&mut buf, offsets::TOP, FieldValue::Rgb([0, 0, 0])).is_err());
    // The coordinate region is not a single field
    std::assert!(fields::write_field(&mut buf, offsets::COORDINATES, FieldValue::Short(0)).is_err());
}

#[test]
fn test_write_field_rejects_out_of_bounds_offsets() {
    let mut buf = [0u8; 8];

    std::assert!(fields::write_field(&mut buf, offsets::HEADER2_OFFSET, FieldValue::Int(0)).is_err());
}

#[test]
fn test_coordinate_width() {
    std::assert_eq!(fields::coordinate_width(ResolutionMode::Integer), 2);
    std::assert_eq!(fields::coordinate_width(ResolutionMode::Subpixel), 4);
}

#[test]
fn test_write_coordinate_truncates_toward_zero() {
    let mut buf = [0u8; 4];

    fields::write_coordinate(&mut buf, 0, -2.7, ResolutionMode::Integer);
    std::assert_eq!(BigEndian::read_i16(&buf[0..2]), -2);

    fields::write_coordinate(&mut buf, 0, 2.7, ResolutionMode::Integer);
    std::assert_eq!(BigEndian::read_i16(&buf[0..2]), 2);
}

#[test]
fn test_write_coordinate_subpixel_keeps_fraction() {
    let mut buf = [0u8; 4];

    fields::write_coordinate(&mut buf, 0, 2.75, ResolutionMode::Subpixel);
    std::assert_eq!(BigEndian::read_f32(&buf[0..4]), 2.75);
}
