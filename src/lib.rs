pub mod roi;
pub mod coordinate;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RoiKit;

pub use roi::{GeometryKind, MetadataContainer, Record, RecordBuilder, TextEncoding};
pub use coordinate::{BoundingBox, Point};
