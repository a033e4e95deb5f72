//! Aisle records and the values derived from them.
//!
//! An [`Aisle`] only stores canonical fields. Orientation, colour, labels and
//! bay counts are computed on demand so they can never go stale.

use aislekit_core::{AisleId, BayScheme, CellRect, GridPoint, Orientation};
use chrono::{DateTime, Utc};

/// Colours assigned to aisles in creation order.
pub const AISLE_PALETTE: [&str; 8] = [
    "#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#F44336", "#00BCD4", "#8BC34A", "#FF5722",
];

/// Offset, in cells, applied perpendicular to the long axis when duplicating.
pub const DUPLICATE_OFFSET: i32 = 2;

/// A straight storage run placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Aisle {
    pub id: AisleId,
    pub number: u32,
    pub zone: String,
    pub grid_row: i32,
    pub grid_col: i32,
    pub width: u32,
    pub height: u32,
    pub sections: u32,
    pub bays_high: u32,
    pub bay_scheme: BayScheme,
    pub created_at: DateTime<Utc>,
}

impl Aisle {
    /// Occupied rectangle.
    pub fn footprint(&self) -> CellRect {
        CellRect::new(self.grid_row, self.grid_col, self.width, self.height)
    }

    pub fn anchor(&self) -> GridPoint {
        GridPoint::new(self.grid_row, self.grid_col)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_extent(self.width, self.height)
    }

    /// Palette colour for this aisle's number.
    pub fn color(&self) -> &'static str {
        color_for_number(self.number)
    }

    /// Display number, zero padded to two digits ("01").
    pub fn label(&self) -> String {
        format!("{:02}", self.number)
    }

    /// Zone followed by the display number ("A01").
    pub fn name(&self) -> String {
        format!("{}{}", self.zone, self.label())
    }

    /// Row/column span such as `R3 C2-C6` or `R3-R7 C2`.
    pub fn grid_position(&self) -> String {
        let last = self.footprint().last_cell();
        let mut text = format!("R{}", self.grid_row);
        if self.height > 1 {
            text.push_str(&format!("-R{}", last.row));
        }
        text.push_str(&format!(" C{}", self.grid_col));
        if self.width > 1 {
            text.push_str(&format!("-C{}", last.col));
        }
        text
    }

    /// Footprint extent as `width×height`.
    pub fn dimensions(&self) -> String {
        format!("{}×{}", self.width, self.height)
    }

    /// Bays counted as `sections * bays_high`, ignoring dual-side doubling.
    pub fn nominal_bay_count(&self) -> u64 {
        u64::from(self.sections) * u64::from(self.bays_high)
    }

    /// Number of bays the generator emits for this aisle.
    pub fn bay_count(&self) -> u64 {
        self.nominal_bay_count()
            .saturating_mul(u64::from(self.bay_scheme.bays_per_level()))
    }

    /// Footprint a duplicate of this aisle would occupy.
    pub fn duplicate_footprint(&self) -> CellRect {
        let anchor = match self.orientation() {
            Orientation::Horizontal => {
                GridPoint::new(self.grid_row.saturating_add(DUPLICATE_OFFSET), self.grid_col)
            }
            Orientation::Vertical => {
                GridPoint::new(self.grid_row, self.grid_col.saturating_add(DUPLICATE_OFFSET))
            }
        };
        self.footprint().moved_to(anchor)
    }
}

/// Palette colour for a creation number (1-based).
pub fn color_for_number(number: u32) -> &'static str {
    let index = (number.max(1) - 1) as usize % AISLE_PALETTE.len();
    AISLE_PALETTE[index]
}

/// Attributes of an aisle that has not been committed yet.
///
/// The store assigns id, number and creation time on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAisle {
    pub footprint: CellRect,
    pub zone: String,
    /// Defaults to the footprint's long side.
    pub sections: Option<u32>,
    pub bays_high: u32,
    pub bay_scheme: BayScheme,
}

impl NewAisle {
    /// Creates a candidate with one bay level and sequential numbering.
    pub fn new(footprint: CellRect, zone: impl Into<String>) -> Self {
        Self {
            footprint,
            zone: zone.into(),
            sections: None,
            bays_high: 1,
            bay_scheme: BayScheme::Sequential,
        }
    }

    pub fn with_sections(mut self, sections: u32) -> Self {
        self.sections = Some(sections);
        self
    }

    pub fn with_bays_high(mut self, bays_high: u32) -> Self {
        self.bays_high = bays_high;
        self
    }

    pub fn with_bay_scheme(mut self, bay_scheme: BayScheme) -> Self {
        self.bay_scheme = bay_scheme;
        self
    }

    /// Sections after applying the long-side default.
    pub fn resolved_sections(&self) -> u32 {
        self.sections.unwrap_or_else(|| self.footprint.long_side())
    }
}

/// Attribute edits that leave the footprint untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AisleResize {
    pub sections: Option<u32>,
    pub bays_high: Option<u32>,
    pub bay_scheme: Option<BayScheme>,
}

impl AisleResize {
    pub fn sections(sections: u32) -> Self {
        Self {
            sections: Some(sections),
            ..Self::default()
        }
    }

    pub fn bays_high(bays_high: u32) -> Self {
        Self {
            bays_high: Some(bays_high),
            ..Self::default()
        }
    }

    pub fn bay_scheme(bay_scheme: BayScheme) -> Self {
        Self {
            bay_scheme: Some(bay_scheme),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_none() && self.bays_high.is_none() && self.bay_scheme.is_none()
    }
}
