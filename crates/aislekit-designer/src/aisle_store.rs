//! Aisle storage and invariant enforcement.
//!
//! [`AisleStore`] is the single owner of aisle records. Every mutation is
//! validated before anything is written, so after each call the following
//! hold for every live aisle:
//!
//! - the footprint lies inside the grid;
//! - no two footprints share a cell;
//! - the footprint is one cell wide in at least one dimension;
//! - `sections` and `bays_high` lie within `1..=MAX_SECTIONS` and
//!   `1..=MAX_BAYS_HIGH`;
//! - ids and numbers are unique and numbers stay within `MAX_AISLE_NUMBER`.

use crate::aisle::{Aisle, AisleResize, NewAisle};
use aislekit_core::{
    rectangles_overlap, within_bounds, AisleId, CellRect, GridPoint, GridSize, LayoutError,
    MAX_AISLE_NUMBER, MAX_BAYS_HIGH, MAX_SECTIONS,
};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Owns every aisle of a layout together with the grid they live on.
#[derive(Debug, Clone, PartialEq)]
pub struct AisleStore {
    grid: GridSize,
    aisles: HashMap<AisleId, Aisle>,
    next_number: u32,
}

impl AisleStore {
    /// Creates an empty store on `grid`.
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            aisles: HashMap::new(),
            next_number: 1,
        }
    }

    /// Rebuilds a store from previously saved parts.
    ///
    /// Aisles are validated in number order exactly like inserts. The number
    /// counter is raised above the highest number present so it can never
    /// hand out a number that is already taken.
    pub fn from_parts(
        grid: GridSize,
        aisles: impl IntoIterator<Item = Aisle>,
        next_number: u32,
    ) -> Result<Self, LayoutError> {
        let grid = GridSize::new(grid.rows, grid.cols)?;
        let mut store = Self::new(grid);

        let mut incoming: Vec<Aisle> = aisles.into_iter().collect();
        incoming.sort_by_key(|a| a.number);

        let mut numbers = HashSet::new();
        for aisle in incoming {
            if store.aisles.contains_key(&aisle.id) {
                return Err(LayoutError::DuplicateId { id: aisle.id });
            }
            if !numbers.insert(aisle.number) {
                return Err(LayoutError::DuplicateNumber {
                    number: aisle.number,
                });
            }
            store.check_footprint(&aisle.footprint(), None)?;
            validate_shape(&aisle.footprint())?;
            ensure_range("number", aisle.number, MAX_AISLE_NUMBER)?;
            ensure_range("sections", aisle.sections, MAX_SECTIONS)?;
            ensure_range("bays_high", aisle.bays_high, MAX_BAYS_HIGH)?;
            store.aisles.insert(aisle.id.clone(), aisle);
        }

        let highest = numbers.iter().copied().max().unwrap_or(0);
        store.next_number = next_number.max(highest + 1).max(1);
        debug!(
            "Restored {} aisles on {} grid, next number {}",
            store.len(),
            store.grid,
            store.next_number
        );
        Ok(store)
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Number the next inserted aisle will receive.
    pub fn next_number(&self) -> u32 {
        self.next_number
    }

    pub fn len(&self) -> usize {
        self.aisles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aisles.is_empty()
    }

    pub fn get(&self, id: &AisleId) -> Option<&Aisle> {
        self.aisles.get(id)
    }

    pub fn contains(&self, id: &AisleId) -> bool {
        self.aisles.contains_key(id)
    }

    /// Aisles ordered by number.
    pub fn iter(&self) -> impl Iterator<Item = &Aisle> {
        let mut ordered: Vec<&Aisle> = self.aisles.values().collect();
        ordered.sort_by_key(|a| a.number);
        ordered.into_iter()
    }

    /// Aisle covering `point`, if any. Footprints never overlap so the
    /// answer is unique.
    pub fn aisle_at(&self, point: GridPoint) -> Option<&Aisle> {
        self.aisles.values().find(|a| a.footprint().contains(point))
    }

    /// Checks a footprint against the grid and every aisle except `exclude`.
    pub fn check_footprint(
        &self,
        rect: &CellRect,
        exclude: Option<&AisleId>,
    ) -> Result<(), LayoutError> {
        if !within_bounds(rect, &self.grid) {
            return Err(LayoutError::OutOfBounds {
                rect: *rect,
                grid: self.grid,
            });
        }

        let blocker = self
            .iter()
            .filter(|a| Some(&a.id) != exclude)
            .find(|a| rectangles_overlap(rect, &a.footprint()));
        match blocker {
            Some(other) => Err(LayoutError::Overlap {
                rect: *rect,
                other: other.id.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Validates and commits a new aisle, assigning its id and number.
    pub fn insert(&mut self, candidate: NewAisle) -> Result<Aisle, LayoutError> {
        let rect = candidate.footprint;
        validate_shape(&rect)?;
        self.check_footprint(&rect, None)?;
        let sections = candidate.resolved_sections();
        ensure_range("sections", sections, MAX_SECTIONS)?;
        ensure_range("bays_high", candidate.bays_high, MAX_BAYS_HIGH)?;

        let number = self.next_number;
        ensure_range("number", number, MAX_AISLE_NUMBER)?;
        let aisle = Aisle {
            id: self.fresh_id(number),
            number,
            zone: candidate.zone,
            grid_row: rect.row,
            grid_col: rect.col,
            width: rect.width,
            height: rect.height,
            sections,
            bays_high: candidate.bays_high,
            bay_scheme: candidate.bay_scheme,
            created_at: Utc::now(),
        };

        self.aisles.insert(aisle.id.clone(), aisle.clone());
        self.next_number = number + 1;
        info!("Placed aisle {} ({}) at {}", aisle.id, aisle.name(), rect);
        Ok(aisle)
    }

    /// Moves an aisle so its anchor lands on `(row, col)`.
    ///
    /// Only the position changes; the aisle's own previous footprint is
    /// ignored during the overlap check.
    pub fn move_to(&mut self, id: &AisleId, row: i32, col: i32) -> Result<(), LayoutError> {
        let current = self
            .aisles
            .get(id)
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })?;
        let target = current.footprint().moved_to(GridPoint::new(row, col));
        self.check_footprint(&target, Some(id))?;

        if let Some(aisle) = self.aisles.get_mut(id) {
            aisle.grid_row = row;
            aisle.grid_col = col;
        }
        info!("Moved aisle {} to {}", id, target);
        Ok(())
    }

    /// Updates sections, bays high and bay scheme. The footprint is not
    /// touched so no overlap check is needed.
    pub fn resize(&mut self, id: &AisleId, changes: AisleResize) -> Result<&Aisle, LayoutError> {
        if !self.aisles.contains_key(id) {
            return Err(LayoutError::NotFound { id: id.clone() });
        }
        if let Some(sections) = changes.sections {
            ensure_range("sections", sections, MAX_SECTIONS)?;
        }
        if let Some(bays_high) = changes.bays_high {
            ensure_range("bays_high", bays_high, MAX_BAYS_HIGH)?;
        }

        let aisle = self
            .aisles
            .get_mut(id)
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })?;
        if let Some(sections) = changes.sections {
            aisle.sections = sections;
        }
        if let Some(bays_high) = changes.bays_high {
            aisle.bays_high = bays_high;
        }
        if let Some(scheme) = changes.bay_scheme {
            aisle.bay_scheme = scheme;
        }
        debug!(
            "Updated aisle {}: {} sections, {} bays high, {}",
            id, aisle.sections, aisle.bays_high, aisle.bay_scheme
        );
        Ok(&*aisle)
    }

    /// Deletes an aisle and hands it back.
    pub fn remove(&mut self, id: &AisleId) -> Result<Aisle, LayoutError> {
        let removed = self
            .aisles
            .remove(id)
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })?;
        info!("Removed aisle {}", id);
        Ok(removed)
    }

    /// Copies an aisle two cells across its long axis under a fresh id and
    /// number.
    pub fn duplicate(&mut self, id: &AisleId) -> Result<Aisle, LayoutError> {
        let source = self
            .aisles
            .get(id)
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })?;
        let candidate = NewAisle {
            footprint: source.duplicate_footprint(),
            zone: source.zone.clone(),
            sections: Some(source.sections),
            bays_high: source.bays_high,
            bay_scheme: source.bay_scheme,
        };
        self.insert(candidate).inspect_err(|err| {
            warn!("Cannot duplicate aisle {}: {}", id, err);
        })
    }

    /// Aisles that would no longer fit if the grid became `grid`.
    ///
    /// Pure query; pair it with [`AisleStore::resize_grid`] once the caller
    /// has confirmed the loss.
    pub fn orphaned_by(&self, grid: GridSize) -> Vec<AisleId> {
        self.iter()
            .filter(|a| !within_bounds(&a.footprint(), &grid))
            .map(|a| a.id.clone())
            .collect()
    }

    /// Switches to `grid`, deleting every aisle that no longer fits.
    /// Returns the deleted aisles in number order.
    pub fn resize_grid(&mut self, grid: GridSize) -> Result<Vec<Aisle>, LayoutError> {
        let grid = GridSize::new(grid.rows, grid.cols)?;
        let orphaned = self.orphaned_by(grid);
        let mut removed = Vec::with_capacity(orphaned.len());
        for id in &orphaned {
            if let Some(aisle) = self.aisles.remove(id) {
                removed.push(aisle);
            }
        }
        if !removed.is_empty() {
            warn!(
                "Grid resized from {} to {}: removed {} aisle(s)",
                self.grid,
                grid,
                removed.len()
            );
        }
        self.grid = grid;
        Ok(removed)
    }

    /// Removes every aisle and restarts numbering at 1.
    pub fn clear(&mut self) -> usize {
        let count = self.aisles.len();
        self.aisles.clear();
        self.next_number = 1;
        info!("Cleared {} aisle(s)", count);
        count
    }

    fn fresh_id(&self, number: u32) -> AisleId {
        let mut id = AisleId::for_number(number);
        let mut suffix = 2;
        while self.aisles.contains_key(&id) {
            id = AisleId::new(format!("aisle-{number}-{suffix}"));
            suffix += 1;
        }
        id
    }
}

impl Default for AisleStore {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}

fn validate_shape(rect: &CellRect) -> Result<(), LayoutError> {
    ensure_positive("width", rect.width)?;
    ensure_positive("height", rect.height)?;
    if !rect.is_straight() {
        return Err(LayoutError::NotStraight {
            start: rect.anchor(),
            end: rect.last_cell(),
        });
    }
    Ok(())
}

fn ensure_positive(field: &'static str, value: u32) -> Result<(), LayoutError> {
    if value == 0 {
        return Err(LayoutError::InvalidDimension { field, value });
    }
    Ok(())
}

fn ensure_range(field: &'static str, value: u32, max: u32) -> Result<(), LayoutError> {
    ensure_positive(field, value)?;
    if value > max {
        return Err(LayoutError::TooLarge { field, value, max });
    }
    Ok(())
}
