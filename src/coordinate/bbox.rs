//! Bounding box structure for point lists

use super::point::Point;

/// Integer pixel bounding box of a point list
///
/// Bounds are truncated toward zero from the float coordinates, matching
/// how the ROI header stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Topmost row
    pub top: i32,
    /// Leftmost column
    pub left: i32,
    /// Bottommost row
    pub bottom: i32,
    /// Rightmost column
    pub right: i32,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        BoundingBox {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Compute the truncated integer bounds of a point list
    ///
    /// A degenerate extent is widened by one pixel on the degenerate axis so
    /// the box always has area, e.g. a single point at (5.0, 5.0) yields
    /// top=5, left=5, bottom=6, right=6. Returns None for an empty list.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut min_row = first.row;
        let mut min_col = first.col;
        let mut max_row = first.row;
        let mut max_col = first.col;

        for point in rest {
            min_row = min_row.min(point.row);
            min_col = min_col.min(point.col);
            max_row = max_row.max(point.row);
            max_col = max_col.max(point.col);
        }

        let top = min_row as i32;
        let left = min_col as i32;
        let mut bottom = max_row as i32;
        let mut right = max_col as i32;

        if right == left {
            right += 1;
        }
        if bottom == top {
            bottom += 1;
        }

        Some(BoundingBox {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Width of the box in pixels
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the box in pixels
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
