//! Integer grid geometry.
//!
//! All positions are cell indices. A [`CellRect`] covers the half-open range
//! `[row, row + height) x [col, col + width)`, so two rectangles that only
//! share an edge do not overlap.

use crate::error::LayoutError;
use crate::types::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    /// Creates a new grid point.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the offset that leads from `origin` to this point.
    pub fn offset_from(&self, origin: GridPoint) -> GridOffset {
        GridOffset {
            row: self.row.saturating_sub(origin.row),
            col: self.col.saturating_sub(origin.col),
        }
    }

    /// Moves the point back by `offset`, saturating at the `i32` range.
    pub fn minus(&self, offset: GridOffset) -> GridPoint {
        GridPoint::new(
            self.row.saturating_sub(offset.row),
            self.col.saturating_sub(offset.col),
        )
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Relative distance between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridOffset {
    pub row: i32,
    pub col: i32,
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    /// Smallest size a user can choose for either dimension.
    pub const MIN_DIMENSION: u32 = 10;
    /// Largest size a user can choose for either dimension.
    pub const MAX_DIMENSION: u32 = 50;
    /// Value used when user input for a dimension cannot be parsed.
    pub const FALLBACK_DIMENSION: u32 = 20;

    /// Creates a grid size. Both dimensions must be positive.
    pub fn new(rows: u32, cols: u32) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::InvalidGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Creates a grid size clamped to the user-selectable range.
    pub fn clamped(rows: u32, cols: u32) -> Self {
        Self {
            rows: clamp_dimension(rows),
            cols: clamp_dimension(cols),
        }
    }

    /// Parses a dimension typed by a user, clamping it into range.
    ///
    /// Anything that is not an integer becomes [`Self::FALLBACK_DIMENSION`].
    pub fn parse_dimension(input: &str) -> u32 {
        match input.trim().parse::<i64>() {
            Ok(value) => value.clamp(
                i64::from(Self::MIN_DIMENSION),
                i64::from(Self::MAX_DIMENSION),
            ) as u32,
            Err(_) => Self::FALLBACK_DIMENSION,
        }
    }

    /// Returns true if the cell lies inside the grid.
    pub fn contains(&self, point: GridPoint) -> bool {
        point.row >= 0
            && point.col >= 0
            && i64::from(point.row) < i64::from(self.rows)
            && i64::from(point.col) < i64::from(self.cols)
    }

}

impl Default for GridSize {
    fn default() -> Self {
        Self { rows: 20, cols: 25 }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn clamp_dimension(value: u32) -> u32 {
    value.clamp(GridSize::MIN_DIMENSION, GridSize::MAX_DIMENSION)
}

/// Axis-aligned rectangle of grid cells anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub row: i32,
    pub col: i32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    /// Creates a rectangle from its anchor and extent.
    pub fn new(row: i32, col: i32, width: u32, height: u32) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Builds the rectangle spanned by a straight segment between two cells.
    ///
    /// The segment must stay on one row (horizontal) or one column
    /// (vertical). Picking the same cell twice yields a 1x1 rectangle.
    /// A span covering the whole `i32` range saturates at `u32::MAX` cells,
    /// which no grid can hold.
    pub fn from_segment(start: GridPoint, end: GridPoint) -> Result<Self, LayoutError> {
        if start.row == end.row {
            let width = start.col.abs_diff(end.col).saturating_add(1);
            Ok(Self::new(start.row, start.col.min(end.col), width, 1))
        } else if start.col == end.col {
            let height = start.row.abs_diff(end.row).saturating_add(1);
            Ok(Self::new(start.row.min(end.row), start.col, 1, height))
        } else {
            Err(LayoutError::NotStraight { start, end })
        }
    }

    /// Top-left cell.
    pub fn anchor(&self) -> GridPoint {
        GridPoint::new(self.row, self.col)
    }

    /// Bottom-right cell (inclusive), clamped to the `i32` range.
    pub fn last_cell(&self) -> GridPoint {
        GridPoint::new(clamp_i32(self.bottom() - 1), clamp_i32(self.right() - 1))
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        i64::from(self.row) + i64::from(self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        i64::from(self.col) + i64::from(self.width)
    }

    /// True when the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when one of the extents is a single cell.
    pub fn is_straight(&self) -> bool {
        self.width == 1 || self.height == 1
    }

    /// Number of cells along the long axis.
    pub fn long_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Orientation derived from the extents.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_extent(self.width, self.height)
    }

    /// Same extent anchored elsewhere.
    pub fn moved_to(&self, anchor: GridPoint) -> Self {
        Self::new(anchor.row, anchor.col, self.width, self.height)
    }

    /// Returns true if the cell is covered by the rectangle.
    pub fn contains(&self, point: GridPoint) -> bool {
        i64::from(point.row) >= i64::from(self.row)
            && i64::from(point.row) < self.bottom()
            && i64::from(point.col) >= i64::from(self.col)
            && i64::from(point.col) < self.right()
    }

    /// Returns true if the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &CellRect) -> bool {
        rectangles_overlap(self, other)
    }
}

impl fmt::Display for CellRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.row, self.col
        )
    }
}

/// Area intersection test. Touching edges do not count as overlap and an
/// empty rectangle never overlaps anything.
pub fn rectangles_overlap(a: &CellRect, b: &CellRect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    !(a.right() <= i64::from(b.col)
        || b.right() <= i64::from(a.col)
        || a.bottom() <= i64::from(b.row)
        || b.bottom() <= i64::from(a.row))
}

/// Returns true if every edge of `rect` lies within `[0, rows] x [0, cols]`.
pub fn within_bounds(rect: &CellRect, grid: &GridSize) -> bool {
    rect.row >= 0
        && rect.col >= 0
        && rect.bottom() <= i64::from(grid.rows)
        && rect.right() <= i64::from(grid.cols)
}
