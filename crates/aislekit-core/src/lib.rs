//! # AisleKit Core
//!
//! Core types and utilities for AisleKit.
//! Provides the grid geometry every layout operation is validated against,
//! the identifiers shared between crates, and the error taxonomy.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, FormatError, LayoutError, Result};
pub use geometry::{
    rectangles_overlap, within_bounds, CellRect, GridOffset, GridPoint, GridSize,
};
pub use types::{
    AisleId, BayScheme, Orientation, MAX_AISLE_NUMBER, MAX_BAYS_HIGH, MAX_SECTIONS,
};
