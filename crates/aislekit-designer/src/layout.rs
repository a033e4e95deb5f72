//! Layout aggregate: the grid, its aisles and the defaults applied to new
//! aisles.

use crate::aisle::NewAisle;
use crate::aisle_store::AisleStore;
use aislekit_core::{BayScheme, CellRect, GridSize, LayoutError, MAX_BAYS_HIGH};

/// Defaults copied into every aisle at creation time, plus the rack
/// dimensions reported on export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDefaults {
    pub zone: String,
    /// Rack height in millimetres.
    pub height_mm: u32,
    /// Rack width in millimetres.
    pub width_mm: u32,
    /// Rack depth in millimetres.
    pub depth_mm: u32,
    pub default_bays_high: u32,
    pub bay_scheme: BayScheme,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            zone: "A".to_string(),
            height_mm: 1500,
            width_mm: 1000,
            depth_mm: 1200,
            default_bays_high: 5,
            bay_scheme: BayScheme::Sequential,
        }
    }
}

impl LayoutDefaults {
    /// Rejects a default that would produce invalid aisles.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.default_bays_high == 0 {
            return Err(LayoutError::InvalidDimension {
                field: "default_bays_high",
                value: 0,
            });
        }
        if self.default_bays_high > MAX_BAYS_HIGH {
            return Err(LayoutError::TooLarge {
                field: "default_bays_high",
                value: self.default_bays_high,
                max: MAX_BAYS_HIGH,
            });
        }
        Ok(())
    }
}

/// Aggregate counts shown alongside a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStats {
    pub total_aisles: usize,
    /// Sum of `sections * bays_high` over all aisles.
    pub total_bays: u64,
    pub average_bays_per_aisle: f64,
}

/// A complete warehouse layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    store: AisleStore,
    defaults: LayoutDefaults,
}

impl Layout {
    /// Empty layout on `grid` with built-in defaults.
    pub fn new(grid: GridSize) -> Self {
        Self {
            store: AisleStore::new(grid),
            defaults: LayoutDefaults::default(),
        }
    }

    pub fn with_defaults(grid: GridSize, defaults: LayoutDefaults) -> Result<Self, LayoutError> {
        defaults.validate()?;
        Ok(Self {
            store: AisleStore::new(grid),
            defaults,
        })
    }

    /// Assembles a layout from an already validated store.
    pub fn from_parts(store: AisleStore, defaults: LayoutDefaults) -> Result<Self, LayoutError> {
        defaults.validate()?;
        Ok(Self { store, defaults })
    }

    pub fn grid(&self) -> GridSize {
        self.store.grid()
    }

    pub fn store(&self) -> &AisleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AisleStore {
        &mut self.store
    }

    pub fn defaults(&self) -> &LayoutDefaults {
        &self.defaults
    }

    /// Replaces the defaults. Existing aisles keep the values they were
    /// created with.
    pub fn set_defaults(&mut self, defaults: LayoutDefaults) -> Result<(), LayoutError> {
        defaults.validate()?;
        self.defaults = defaults;
        Ok(())
    }

    /// Candidate aisle for `footprint` carrying the current defaults.
    pub fn new_aisle(&self, footprint: CellRect) -> NewAisle {
        NewAisle::new(footprint, self.defaults.zone.clone())
            .with_bays_high(self.defaults.default_bays_high)
            .with_bay_scheme(self.defaults.bay_scheme)
    }

    /// Sum of `sections * bays_high`. Dual-side doubling is not counted.
    pub fn total_bays(&self) -> u64 {
        self.store
            .iter()
            .fold(0u64, |total, a| total.saturating_add(a.nominal_bay_count()))
    }

    pub fn stats(&self) -> LayoutStats {
        let total_aisles = self.store.len();
        let total_bays = self.total_bays();
        let average_bays_per_aisle = if total_aisles > 0 {
            total_bays as f64 / total_aisles as f64
        } else {
            0.0
        };
        LayoutStats {
            total_aisles,
            total_bays,
            average_bays_per_aisle,
        }
    }

    /// Number of aisles that replacing or clearing this layout would discard.
    pub fn discard_impact(&self) -> usize {
        self.store.len()
    }
}
