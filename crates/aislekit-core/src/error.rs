//! Error handling for AisleKit
//!
//! Provides error types for every layer of the layout engine:
//! - Layout errors (bounds, overlap, straightness, lookups)
//! - Format errors (layout document parsing and validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::geometry::{CellRect, GridPoint, GridSize};
use crate::types::AisleId;
use thiserror::Error;

/// Layout error type
///
/// Every variant describes a rejected mutation. A rejected mutation never
/// changes the aisle store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Footprint extends beyond the grid
    #[error("Aisle footprint {rect} extends beyond the {grid} grid")]
    OutOfBounds {
        /// The rejected footprint.
        rect: CellRect,
        /// The grid it was checked against.
        grid: GridSize,
    },

    /// Footprint intersects an existing aisle
    #[error("Aisle footprint {rect} overlaps aisle {other}")]
    Overlap {
        /// The rejected footprint.
        rect: CellRect,
        /// The aisle already occupying part of it.
        other: AisleId,
    },

    /// Drawn segment is diagonal
    #[error("Aisles must be straight: {start} and {end} share neither a row nor a column")]
    NotStraight {
        /// First picked cell.
        start: GridPoint,
        /// Second picked cell.
        end: GridPoint,
    },

    /// Referenced aisle does not exist
    #[error("Aisle {id} not found")]
    NotFound {
        /// The missing identifier.
        id: AisleId,
    },

    /// A count or extent is below one
    #[error("Invalid {field}: {value} (must be at least 1)")]
    InvalidDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// A count exceeds its upper limit
    #[error("Invalid {field}: {value} (must be at most {max})")]
    TooLarge {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// Grid with an empty dimension
    #[error("Invalid grid size {rows}x{cols}")]
    InvalidGrid {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },

    /// Two aisles claim the same identifier
    #[error("Aisle id {id} is used more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: AisleId,
    },

    /// Two aisles claim the same display number
    #[error("Aisle number {number} is used more than once")]
    DuplicateNumber {
        /// The repeated number.
        number: u32,
    },
}

impl LayoutError {
    /// Check if this is a straight-line violation
    pub fn is_not_straight(&self) -> bool {
        matches!(self, LayoutError::NotStraight { .. })
    }

    /// Check if this is a bounds violation
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, LayoutError::OutOfBounds { .. })
    }

    /// Check if this is an overlap violation
    pub fn is_overlap(&self) -> bool {
        matches!(self, LayoutError::Overlap { .. })
    }

    /// Check if this is a missing-aisle error
    pub fn is_not_found(&self) -> bool {
        matches!(self, LayoutError::NotFound { .. })
    }
}

/// Layout document error type
///
/// Raised while reading a saved layout. A document that fails here is never
/// partially applied.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The document is not valid JSON
    #[error("Failed to parse layout document: {0}")]
    Parse(#[source] serde_json::Error),

    /// A required top-level field is absent
    #[error("Invalid layout file format: missing `{0}`")]
    MissingField(&'static str),

    /// Fields are present but have the wrong shape
    #[error("Invalid layout document: {0}")]
    Invalid(String),

    /// The document describes a layout that breaks an invariant
    #[error("Layout document rejected: {0}")]
    Layout(#[from] LayoutError),
}

/// Main error type for AisleKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Document format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Export requested on a layout without aisles
    #[error("No aisles to export")]
    NothingToExport,

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a document format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
