//! Tests for the metadata container

extern crate std;

use crate::coordinate::Point;
use crate::roi::constants::tags;
use crate::roi::container::{BlockKind, MetadataContainer, TagData};
use crate::roi::errors::RoiError;
use crate::roi::geometry::GeometryKind;
use crate::roi::info::TextEncoding;

fn rect_corners() -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 10.0),
    ]
}

#[test]
fn test_empty_container() {
    let metadata = MetadataContainer::new();

    std::assert_eq!(metadata.kind_count(), 0);
    std::assert_eq!(metadata.bytecounts(), vec![4]);
    std::assert_eq!(metadata.metadata(), b"IJIJ");
}

#[test]
fn test_single_roi() {
    let mut metadata = MetadataContainer::new();
    metadata
        .add_roi(&[Point::new(10.0, 20.0)], GeometryKind::Point, false)
        .unwrap();

    std::assert_eq!(metadata.kind_count(), 1);
    std::assert_eq!(metadata.bytecounts(), vec![12, 136]);

    let stream = metadata.metadata();
    std::assert_eq!(&stream[..4], b"IJIJ");
    std::assert_eq!(&stream[4..8], b"roi ");
    std::assert_eq!(&stream[8..12], &1u32.to_be_bytes());
    std::assert_eq!(&stream[12..16], b"Iout");
    std::assert_eq!(stream.len(), 12 + 136);
}

#[test]
fn test_mixed_container_layout() {
    let mut metadata = MetadataContainer::new();
    metadata
        .add_roi(&[Point::new(10.0, 20.0)], GeometryKind::Point, false)
        .unwrap();
    metadata
        .add_overlay(&rect_corners(), GeometryKind::Rect, false)
        .unwrap();
    metadata.add_info("Ok", TextEncoding::default()).unwrap();
    metadata.add_extra_metadata("abcd", &[1]).unwrap();
    metadata.add_extra_metadata("abcd", &[2]).unwrap();

    // Three non-empty reserved kinds plus two extras, each counted alone
    std::assert_eq!(metadata.kind_count(), 5);
    std::assert_eq!(metadata.bytecounts(), vec![44, 136, 128, 4, 1, 1]);

    let stream = metadata.metadata();
    std::assert_eq!(&stream[..4], b"IJIJ");
    std::assert_eq!(&stream[4..8], b"roi ");
    std::assert_eq!(&stream[8..12], &1u32.to_be_bytes());
    std::assert_eq!(&stream[12..16], b"over");
    std::assert_eq!(&stream[16..20], &1u32.to_be_bytes());
    std::assert_eq!(&stream[20..24], b"info");
    std::assert_eq!(&stream[24..28], &1u32.to_be_bytes());

    // Duplicate extra tags are not grouped
    std::assert_eq!(&stream[28..32], b"abcd");
    std::assert_eq!(&stream[32..36], &1u32.to_be_bytes());
    std::assert_eq!(&stream[36..40], b"abcd");
    std::assert_eq!(&stream[40..44], &1u32.to_be_bytes());

    // The header is exactly the first byte count
    std::assert_eq!(stream.len(), 44 + 136 + 128 + 4 + 1 + 1);

    // Record payloads follow in fixed kind order
    std::assert_eq!(&stream[44..48], b"Iout");            // the ROI record
    std::assert_eq!(&stream[180..184], b"Iout");          // the overlay record
    std::assert_eq!(&stream[180 + 40..180 + 43], &[255, 255, 255]); // overlay stroke
    std::assert_eq!(&stream[308..312], &[0, b'O', 0, b'k']); // the info record
    std::assert_eq!(&stream[312..314], &[1, 2]);          // the two extras
}

#[test]
fn test_emit_order_is_independent_of_insertion_order() {
    let mut forward = MetadataContainer::new();
    forward
        .add_roi(&[Point::new(1.0, 1.0)], GeometryKind::Point, false)
        .unwrap();
    forward
        .add_overlay(&[Point::new(2.0, 2.0)], GeometryKind::Point, false)
        .unwrap();

    let mut reversed = MetadataContainer::new();
    reversed
        .add_overlay(&[Point::new(2.0, 2.0)], GeometryKind::Point, false)
        .unwrap();
    reversed
        .add_roi(&[Point::new(1.0, 1.0)], GeometryKind::Point, false)
        .unwrap();

    std::assert_eq!(forward.metadata(), reversed.metadata());
    std::assert_eq!(forward.bytecounts(), reversed.bytecounts());
}

#[test]
fn test_metadata_is_idempotent() {
    let mut metadata = MetadataContainer::new();
    metadata
        .add_roi(&[Point::new(3.0, 4.0)], GeometryKind::Point, false)
        .unwrap();

    std::assert_eq!(metadata.metadata(), metadata.metadata());
    std::assert_eq!(metadata.bytecounts(), metadata.bytecounts());
}

#[test]
fn test_info_encoding() {
    let mut metadata = MetadataContainer::new();
    metadata.add_info("Ok", TextEncoding::Ascii).unwrap();

    std::assert_eq!(metadata.count_of(BlockKind::Info), 1);
    let stream = metadata.metadata();
    std::assert_eq!(&stream[12..], &[0, b'O', 0, b'k']);
}

#[test]
fn test_empty_info_is_a_no_op() {
    let mut metadata = MetadataContainer::new();
    metadata.add_info("", TextEncoding::Ascii).unwrap();

    std::assert_eq!(metadata.record_count(), 0);
    std::assert_eq!(metadata.bytecounts(), vec![4]);
}

#[test]
fn test_non_ascii_info_is_rejected() {
    let mut metadata = MetadataContainer::new();

    std::assert!(metadata.add_info("µm", TextEncoding::Ascii).is_err());
    std::assert!(metadata.add_info("µm", TextEncoding::Latin1).is_ok());
}

#[test]
fn test_reserved_extra_tags_are_rejected() {
    let mut metadata = MetadataContainer::new();

    for tag in ["info", "labl", "rang", "luts", "plot", "over", "roi "] {
        match metadata.add_extra_metadata(tag, b"x").unwrap_err() {
            RoiError::ReservedTag(name) => std::assert_eq!(name, tag),
            other => std::panic!("unexpected error: {:?}", other),
        }
    }

    std::assert_eq!(metadata.record_count(), 0);
}

#[test]
fn test_extra_tag_must_be_four_bytes() {
    let mut metadata = MetadataContainer::new();

    match metadata.add_extra_metadata("abc", b"x").unwrap_err() {
        RoiError::InvalidTagLength(len) => std::assert_eq!(len, 3),
        other => std::panic!("unexpected error: {:?}", other),
    }

    std::assert!(metadata.add_extra_metadata("abcde", b"x").is_err());
}

#[test]
fn test_empty_extra_payload_is_a_no_op() {
    let mut metadata = MetadataContainer::new();
    metadata.add_extra_metadata("abcd", b"").unwrap();

    std::assert_eq!(metadata.record_count(), 0);
    std::assert_eq!(metadata.bytecounts(), vec![4]);
    std::assert_eq!(metadata.metadata(), b"IJIJ");
}

#[test]
fn test_unsupported_kinds_fail_fast() {
    let mut metadata = MetadataContainer::new();

    std::assert!(matches!(metadata.add_labels(), Err(RoiError::NotSupported(_))));
    std::assert!(matches!(metadata.add_luts(), Err(RoiError::NotSupported(_))));
    std::assert!(matches!(metadata.add_ranges(), Err(RoiError::NotSupported(_))));
}

#[test]
fn test_tiff_extratags() {
    let mut metadata = MetadataContainer::new();
    metadata
        .add_roi(&[Point::new(10.0, 20.0)], GeometryKind::Point, false)
        .unwrap();

    let [bytecounts_tag, metadata_tag] = metadata.tiff_extratags();

    std::assert_eq!(bytecounts_tag.tag, tags::IJ_BYTE_COUNTS);
    std::assert_eq!(bytecounts_tag.field_type, 4);
    std::assert_eq!(bytecounts_tag.count, 2);
    std::assert_eq!(bytecounts_tag.data, TagData::Longs(vec![12, 136]));

    std::assert_eq!(metadata_tag.tag, tags::IJ_METADATA);
    std::assert_eq!(metadata_tag.field_type, 1);
    std::assert_eq!(metadata_tag.count, (12 + 136) as u64);
    match metadata_tag.data {
        TagData::Bytes(bytes) => std::assert_eq!(bytes, metadata.metadata()),
        other => std::panic!("unexpected tag data: {:?}", other),
    }
}
