//! ImageJ ROI metadata encoding module
//!
//! This module provides structures and functions for producing
//! ImageJ-compatible ROI, overlay and auxiliary metadata records and
//! assembling them into an embeddable container.

pub mod errors;
pub mod geometry;
pub mod record;
pub mod container;
pub mod fields;
pub mod info;
pub mod description;
mod tests;
pub(crate) mod constants;

pub use errors::{RoiError, RoiResult};
pub use geometry::GeometryKind;
pub use record::{Record, RecordBuilder, RecordOptions, ResolutionMode};
pub use container::{BlockKind, ExtraTag, MetadataContainer, TagData};
pub use info::TextEncoding;
pub use description::AnnotationDescription;

/// Private TIFF tag carrying the byte-count index
pub const IJ_BYTE_COUNTS_TAG: u16 = 50838;

/// Private TIFF tag carrying the metadata stream
pub const IJ_METADATA_TAG: u16 = 50839;
