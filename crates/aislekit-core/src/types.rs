//! Identifiers and small enums shared by every AisleKit crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest `sections` value an aisle may carry.
pub const MAX_SECTIONS: u32 = 999;

/// Largest `bays_high` value an aisle may carry.
pub const MAX_BAYS_HIGH: u32 = 999;

/// Largest display number handed out or accepted from a document.
pub const MAX_AISLE_NUMBER: u32 = 9_999;

/// Stable identifier of an aisle for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AisleId(String);

impl AisleId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier conventionally given to the aisle created with `number`.
    pub fn for_number(number: u32) -> Self {
        Self(format!("aisle-{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AisleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AisleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AisleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Direction of an aisle's long axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Horizontal unless the footprint is taller than one cell while being a
    /// single cell wide. A 1x1 footprint is horizontal.
    pub fn from_extent(width: u32, height: u32) -> Self {
        if width > 1 || height <= 1 {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// How bays are numbered inside each section of an aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BayScheme {
    /// One bay per level, numbered by level.
    #[default]
    Sequential,
    /// Two bays per level: odd numbers on the left face, even on the right.
    DualSide,
}

impl BayScheme {
    /// Bays emitted per (section, level) pair.
    pub fn bays_per_level(&self) -> u32 {
        match self {
            Self::Sequential => 1,
            Self::DualSide => 2,
        }
    }
}

impl fmt::Display for BayScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::DualSide => write!(f, "dual-side"),
        }
    }
}

impl std::str::FromStr for BayScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "dual-side" | "dual_side" | "dualside" => Ok(Self::DualSide),
            other => Err(format!("unknown bay scheme '{other}'")),
        }
    }
}
