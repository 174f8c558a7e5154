//! ImageJ ROI format constants
//!
//! This module defines constants used throughout the ROI encoding code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// Record header constants
pub mod record {
    /// Size of the fixed primary header in bytes
    pub const HEADER_SIZE: usize = 64;

    /// Size of the fixed secondary header in bytes
    pub const HEADER2_SIZE: usize = 64;

    /// "Iout" magic bytes opening every record
    pub const MAGIC: [u8; 4] = *b"Iout";

    /// Format version written at offset 4
    pub const VERSION: u16 = 227;

    /// Stroke width written into every record
    pub const DEFAULT_STROKE_WIDTH: u16 = 1;

    /// Fixed white stroke color written into overlay records
    pub const OVERLAY_STROKE_COLOR: [u8; 3] = [255, 255, 255];
}

/// Named field offsets within the 64-byte primary header
pub mod offsets {
    pub const VERSION: usize = 4;          // Format version
    pub const ROI_TYPE: usize = 6;         // Geometry kind code (little endian!)
    pub const TOP: usize = 8;              // Bounding box top
    pub const LEFT: usize = 10;            // Bounding box left
    pub const BOTTOM: usize = 12;          // Bounding box bottom
    pub const RIGHT: usize = 14;           // Bounding box right
    pub const N_COORDINATES: usize = 16;   // Coordinate pair count

    // Line endpoints and rect/oval bounds share the same four float slots
    pub const X1: usize = 18;              // Line x1
    pub const Y1: usize = 22;              // Line y1
    pub const X2: usize = 26;              // Line x2
    pub const Y2: usize = 30;              // Line y2
    pub const XD: usize = 18;              // Rect/oval x
    pub const YD: usize = 22;              // Rect/oval y
    pub const WIDTHD: usize = 26;          // Rect/oval width
    pub const HEIGHTD: usize = 30;         // Rect/oval height

    pub const STROKE_WIDTH: usize = 34;    // Stroke width
    pub const STROKE_COLOR: usize = 40;    // RGB stroke color (overlays)
    pub const OPTIONS: usize = 50;         // Options bitmask
    pub const HEADER2_OFFSET: usize = 60;  // Offset to the secondary header
    pub const COORDINATES: usize = 64;     // Start of the coordinate arrays
}

/// Options bitmask flags
pub mod options {
    /// Coordinates carry subpixel resolution
    pub const SUB_PIXEL_RESOLUTION: u16 = 128;
}

/// Outer container constants
pub mod container {
    /// "IJIJ" magic bytes opening the metadata stream
    pub const MAGIC: [u8; 4] = *b"IJIJ";

    // Four byte block kind tags
    pub const ROI_TAG: [u8; 4] = *b"roi ";
    pub const OVERLAY_TAG: [u8; 4] = *b"over";
    pub const LABELS_TAG: [u8; 4] = *b"labl";
    pub const INFO_TAG: [u8; 4] = *b"info";
    pub const LUTS_TAG: [u8; 4] = *b"luts";
    pub const RANGES_TAG: [u8; 4] = *b"rang";
    pub const PLOT_TAG: [u8; 4] = *b"plot";

    /// Tags that caller-defined extra blocks must not use
    pub const RESERVED_TAGS: [[u8; 4]; 7] = [
        INFO_TAG,
        LABELS_TAG,
        RANGES_TAG,
        LUTS_TAG,
        PLOT_TAG,
        OVERLAY_TAG,
        ROI_TAG,
    ];
}

/// Private TIFF tags carrying the container
pub mod tags {
    /// Byte-count index of the metadata blocks
    pub const IJ_BYTE_COUNTS: u16 = 50838;

    /// Concatenated metadata stream
    pub const IJ_METADATA: u16 = 50839;
}

/// TIFF field types used by the extra-tag descriptors
pub mod field_types {
    pub const BYTE: u16 = 1;  // 8-bit unsigned integer
    pub const LONG: u16 = 4;  // 32-bit unsigned integer
}
