//! Geometry kinds understood by the ImageJ ROI format
//!
//! Each kind maps to a fixed wire code and determines which optional header
//! fields are populated and how the coordinate region is laid out.

/// Geometry kind of a ROI or overlay record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Polygon,
    Rect,
    Oval,
    Line,
    Freeline,
    Polyline,
    NoRoi,
    Freehand,
    Traced,
    Angle,
    Point,
}

impl GeometryKind {
    /// Wire code written into the record header
    pub fn code(self) -> u16 {
        match self {
            GeometryKind::Polygon => 0,
            GeometryKind::Rect => 1,
            GeometryKind::Oval => 2,
            GeometryKind::Line => 3,
            GeometryKind::Freeline => 4,
            GeometryKind::Polyline => 5,
            GeometryKind::NoRoi => 6,
            GeometryKind::Freehand => 7,
            GeometryKind::Traced => 8,
            GeometryKind::Angle => 9,
            GeometryKind::Point => 10,
        }
    }

    /// Name used in description files and log output
    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Polygon => "polygon",
            GeometryKind::Rect => "rect",
            GeometryKind::Oval => "oval",
            GeometryKind::Line => "line",
            GeometryKind::Freeline => "freeline",
            GeometryKind::Polyline => "polyline",
            GeometryKind::NoRoi => "noRoi",
            GeometryKind::Freehand => "freehand",
            GeometryKind::Traced => "traced",
            GeometryKind::Angle => "angle",
            GeometryKind::Point => "point",
        }
    }

    /// Parses a kind from its description-file name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "polygon" => Some(GeometryKind::Polygon),
            "rect" => Some(GeometryKind::Rect),
            "oval" => Some(GeometryKind::Oval),
            "line" => Some(GeometryKind::Line),
            "freeline" => Some(GeometryKind::Freeline),
            "polyline" => Some(GeometryKind::Polyline),
            "noRoi" => Some(GeometryKind::NoRoi),
            "freehand" => Some(GeometryKind::Freehand),
            "traced" => Some(GeometryKind::Traced),
            "angle" => Some(GeometryKind::Angle),
            "point" => Some(GeometryKind::Point),
            _ => None,
        }
    }

    /// Kinds whose coordinates are always stored with subpixel resolution,
    /// regardless of what the caller requested
    pub fn forces_subpixel(self) -> bool {
        matches!(
            self,
            GeometryKind::Point | GeometryKind::Rect | GeometryKind::Line | GeometryKind::Oval
        )
    }

    /// Kinds whose geometry lives in dedicated header float fields; their
    /// records carry no coordinate region and a zero coordinate count
    pub fn uses_header_fields(self) -> bool {
        matches!(
            self,
            GeometryKind::Rect | GeometryKind::Oval | GeometryKind::Line
        )
    }

    /// Exact point count the kind requires, or None for any non-empty list
    ///
    /// Rect and oval take the four corners of a bounding rectangle; a line
    /// takes its two endpoints.
    pub fn required_points(self) -> Option<usize> {
        match self {
            GeometryKind::Rect | GeometryKind::Oval => Some(4),
            GeometryKind::Line => Some(2),
            _ => None,
        }
    }
}
