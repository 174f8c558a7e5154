//! Integration tests for the ROI metadata encoder

extern crate std;

use std::env;
use std::fs;

use roikit::coordinate::Point;
use roikit::roi::description::AnnotationDescription;
use roikit::roi::{GeometryKind, MetadataContainer, RoiError, TextEncoding};
use roikit::RoiKit;

#[test]
fn test_complete_encoding_workflow() {
    let mut metadata = MetadataContainer::new();

    // One point ROI at row 10, column 20
    metadata
        .add_roi(&[Point::new(10.0, 20.0)], GeometryKind::Point, false)
        .unwrap();

    // The index holds the outer header size and every record length
    let bytecounts = metadata.bytecounts();
    assert_eq!(bytecounts, vec![12, 136]);

    let stream = metadata.metadata();

    // Container header
    assert_eq!(&stream[..4], b"IJIJ");      // container magic
    assert_eq!(&stream[4..8], b"roi ");     // kind tag
    assert_eq!(&stream[8..12], &[0, 0, 0, 1]); // record count, big endian

    // Record header
    let record = &stream[12..];
    assert_eq!(&record[..4], b"Iout");      // record magic
    assert_eq!(&record[4..6], &[0, 227]);   // version, big endian
    assert_eq!(&record[6..8], &[10, 0]);    // point kind code, little endian
    assert_eq!(&record[8..10], &[0, 10]);   // top
    assert_eq!(&record[10..12], &[0, 20]);  // left
    assert_eq!(&record[12..14], &[0, 11]);  // bottom
    assert_eq!(&record[14..16], &[0, 21]);  // right
    assert_eq!(&record[16..18], &[0, 1]);   // coordinate count
    assert_eq!(&record[50..52], &[0, 128]); // subpixel option bit

    // Point kinds are forced to subpixel storage: one float pair,
    // column value first
    assert_eq!(&record[64..68], &20.0f32.to_be_bytes());
    assert_eq!(&record[68..72], &10.0f32.to_be_bytes());
    assert_eq!(record.len(), 136);
}

#[test]
fn test_extra_metadata_contract() {
    let mut metadata = MetadataContainer::new();

    // Reserved tags are refused
    assert!(matches!(
        metadata.add_extra_metadata("info", b"x"),
        Err(RoiError::ReservedTag(_))
    ));

    // An empty payload changes nothing
    metadata.add_extra_metadata("abcd", b"").unwrap();
    assert_eq!(metadata.bytecounts(), vec![4]);
    assert_eq!(metadata.metadata(), b"IJIJ");
}

#[test]
fn test_description_to_buffers() {
    let toml = r#"
[[roi]]
kind = "line"
points = [[1.0, 2.0], [3.0, 4.0]]

[info]
text = "Ok"
"#;

    let description = AnnotationDescription::from_str(toml).unwrap();
    let metadata = description.build_container().unwrap();

    // Two kinds: one 128 byte line record and a 4 byte info record
    assert_eq!(metadata.bytecounts(), vec![20, 128, 4]);

    let stream = metadata.metadata();
    assert_eq!(&stream[..4], b"IJIJ");
    assert_eq!(&stream[4..8], b"roi ");
    assert_eq!(&stream[12..16], b"info");
    assert_eq!(stream.len(), 20 + 128 + 4);

    // The info text is widened to big-endian 16-bit code units
    assert_eq!(&stream[20 + 128..], &[0, b'O', 0, b'k']);
}

#[test]
fn test_info_direct() {
    let mut metadata = MetadataContainer::new();
    metadata.add_info("Ok", TextEncoding::Ascii).unwrap();
    metadata.add_info("", TextEncoding::Ascii).unwrap(); // no-op

    assert_eq!(metadata.bytecounts(), vec![12, 4]);
}

#[test]
fn test_api_encode_writes_buffers() {
    let dir = env::temp_dir();
    let description_path = dir.join("roikit_integration_description.toml");
    let prefix = dir.join("roikit_integration_out");
    let prefix_str = prefix.to_string_lossy().into_owned();

    fs::write(
        &description_path,
        "[[roi]]\nkind = \"point\"\npoints = [[10.0, 20.0]]\n",
    )
    .unwrap();

    let kit = RoiKit::new(Some(
        dir.join("roikit_integration.log").to_string_lossy().as_ref(),
    ))
    .unwrap();
    kit.encode(
        description_path.to_string_lossy().as_ref(),
        Some(&prefix_str),
    )
    .unwrap();

    let bytecounts = fs::read(format!("{}.bytecounts", prefix_str)).unwrap();
    let stream = fs::read(format!("{}.metadata", prefix_str)).unwrap();

    // Big-endian u32 stream: header size 12, one 136 byte record
    assert_eq!(bytecounts, vec![0, 0, 0, 12, 0, 0, 0, 136]);
    assert_eq!(stream.len(), 12 + 136);
    assert_eq!(&stream[..4], b"IJIJ");
}
