//! Bay generation.
//!
//! Bays are never stored. They are expanded from an aisle whenever they are
//! needed, so the output always reflects the aisle's current attributes.
//!
//! Ordering is sections ascending, then level ascending, then left before
//! right for dual-side aisles.

use crate::aisle::Aisle;
use aislekit_core::BayScheme;
use serde::Serialize;
use std::fmt;

/// Face of a dual-side aisle a bay opens onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaySide {
    Left,
    Right,
}

impl fmt::Display for BaySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// One addressable storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bay {
    /// Section along the long axis, starting at 1.
    pub section: u32,
    /// Stacking level, starting at 1.
    pub level: u32,
    /// Number used in the location code.
    pub bay_number: u32,
    /// Present only for dual-side aisles.
    pub side: Option<BaySide>,
    pub location_code: String,
}

impl Bay {
    /// Section zero padded to two digits.
    pub fn section_label(&self) -> String {
        pad2(self.section)
    }

    /// Bay number zero padded to two digits.
    pub fn bay_label(&self) -> String {
        pad2(self.bay_number)
    }
}

/// Canonical address `zone + aisle label + "-" + section + "-" + bay`.
pub fn location_code(zone: &str, aisle_label: &str, section: u32, bay_number: u32) -> String {
    format!("{zone}{aisle_label}-{}-{}", pad2(section), pad2(bay_number))
}

/// Expands an aisle into its bays.
pub fn generate_bays(aisle: &Aisle) -> Vec<Bay> {
    let label = aisle.label();
    let capacity = usize::try_from(aisle.bay_count()).unwrap_or(0);
    let mut bays = Vec::with_capacity(capacity);

    for section in 1..=aisle.sections {
        for level in 1..=aisle.bays_high {
            match aisle.bay_scheme {
                BayScheme::Sequential => {
                    bays.push(make_bay(aisle, &label, section, level, level, None));
                }
                BayScheme::DualSide => {
                    bays.push(make_bay(
                        aisle,
                        &label,
                        section,
                        level,
                        level.saturating_mul(2) - 1,
                        Some(BaySide::Left),
                    ));
                    bays.push(make_bay(
                        aisle,
                        &label,
                        section,
                        level,
                        level.saturating_mul(2),
                        Some(BaySide::Right),
                    ));
                }
            }
        }
    }
    bays
}

fn make_bay(
    aisle: &Aisle,
    label: &str,
    section: u32,
    level: u32,
    bay_number: u32,
    side: Option<BaySide>,
) -> Bay {
    Bay {
        section,
        level,
        bay_number,
        side,
        location_code: location_code(&aisle.zone, label, section, bay_number),
    }
}

fn pad2(value: u32) -> String {
    format!("{value:02}")
}
