//! ROI code translators
//!
//! This module provides utilities for translating numeric ROI record values
//! and block tags into human-readable descriptions. These functions are used
//! for displaying information about produced metadata to users.

use crate::roi::constants::container;

/// Converts a geometry kind code to its human-readable description
pub fn geometry_code_to_name(code: u16) -> &'static str {
    match code {
        0 => "Polygon",
        1 => "Rectangle",
        2 => "Oval",
        3 => "Line",
        4 => "Freeline",
        5 => "Polyline",
        6 => "No ROI",
        7 => "Freehand",
        8 => "Traced",
        9 => "Angle",
        10 => "Point",
        _ => "Unknown",
    }
}

/// Converts a container block tag to its human-readable description
pub fn block_tag_to_name(tag: &[u8; 4]) -> &'static str {
    match *tag {
        container::ROI_TAG => "ROI",
        container::OVERLAY_TAG => "Overlay",
        container::LABELS_TAG => "Labels",
        container::INFO_TAG => "Info",
        container::LUTS_TAG => "LUTs",
        container::RANGES_TAG => "Display ranges",
        container::PLOT_TAG => "Plot",
        _ => "Extra",
    }
}
