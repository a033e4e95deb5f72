//! Pick-up, preview and drop of existing aisles.
//!
//! Picking a cell covered by an aisle arms the session and remembers where
//! inside the aisle it was grabbed. Hovering then proposes the footprint the
//! aisle would occupy with that grab point under the cursor, and the next
//! pick drops it there if the proposal is still valid.

use crate::aisle_store::AisleStore;
use crate::layout::Layout;
use aislekit_core::{within_bounds, AisleId, CellRect, GridOffset, GridPoint, LayoutError};
use tracing::{debug, info, warn};

/// Live feedback for a dragged aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPreview {
    pub footprint: CellRect,
    /// False when the footprint would overlap another aisle.
    pub valid: bool,
}

/// Progress of a drag session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPhase {
    /// Waiting for a pick on an aisle.
    Searching,
    /// An aisle is held but no in-bounds preview exists yet.
    Armed { aisle: AisleId, offset: GridOffset },
    /// An aisle is held and the last hover produced a preview.
    Previewing {
        aisle: AisleId,
        offset: GridOffset,
        preview: DragPreview,
    },
}

/// Result of a successful pick while dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The pick hit nothing actionable.
    Ignored,
    /// An aisle was picked up.
    PickedUp { aisle: AisleId, offset: GridOffset },
    /// The held aisle was committed at a new position.
    Dropped { aisle: AisleId, footprint: CellRect },
}

/// State of one drag session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    phase: DragPhase,
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Searching,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Aisle currently held, if any.
    pub fn held_aisle(&self) -> Option<&AisleId> {
        match &self.phase {
            DragPhase::Searching => None,
            DragPhase::Armed { aisle, .. } | DragPhase::Previewing { aisle, .. } => Some(aisle),
        }
    }

    /// Preview recorded by the last [`DragSession::track_hover`].
    pub fn live_preview(&self) -> Option<DragPreview> {
        match &self.phase {
            DragPhase::Previewing { preview, .. } => Some(*preview),
            _ => None,
        }
    }

    /// Handles a cell pick: picks an aisle up, or drops the held one at the
    /// live preview.
    ///
    /// A failed drop leaves the aisle where it was. Both a successful and a
    /// failed drop end the session; callers treat the outcome as final.
    pub fn pick_cell(
        &mut self,
        layout: &mut Layout,
        point: GridPoint,
    ) -> Result<DragOutcome, LayoutError> {
        match &self.phase {
            DragPhase::Searching => {
                let Some(aisle) = layout.store().aisle_at(point) else {
                    return Ok(DragOutcome::Ignored);
                };
                let offset = point.offset_from(aisle.anchor());
                let id = aisle.id.clone();
                debug!("Picked up aisle {} with offset {:?}", id, offset);
                self.phase = DragPhase::Armed {
                    aisle: id.clone(),
                    offset,
                };
                Ok(DragOutcome::PickedUp { aisle: id, offset })
            }
            DragPhase::Armed { .. } => Ok(DragOutcome::Ignored),
            DragPhase::Previewing { aisle, preview, .. } => {
                let aisle = aisle.clone();
                let footprint = preview.footprint;
                self.phase = DragPhase::Searching;
                match layout
                    .store_mut()
                    .move_to(&aisle, footprint.row, footprint.col)
                {
                    Ok(()) => {
                        info!("Dropped aisle {} at {}", aisle, footprint);
                        Ok(DragOutcome::Dropped { aisle, footprint })
                    }
                    Err(err) => {
                        warn!("Drop of aisle {} rejected: {}", aisle, err);
                        Err(err)
                    }
                }
            }
        }
    }

    /// Footprint the held aisle would occupy with its grab point at `point`,
    /// whether or not it fits.
    pub fn candidate_at(&self, store: &AisleStore, point: GridPoint) -> Option<CellRect> {
        let (aisle, offset) = match &self.phase {
            DragPhase::Searching => return None,
            DragPhase::Armed { aisle, offset } | DragPhase::Previewing { aisle, offset, .. } => {
                (aisle, *offset)
            }
        };
        let held = store.get(aisle)?;
        Some(held.footprint().moved_to(point.minus(offset)))
    }

    /// Read-only preview for the cursor at `point`.
    ///
    /// `None` when nothing is held or the candidate leaves the grid.
    /// Otherwise the preview carries whether the drop would be accepted.
    pub fn hover_at(&self, store: &AisleStore, point: GridPoint) -> Option<DragPreview> {
        let footprint = self.candidate_at(store, point)?;
        if !within_bounds(&footprint, &store.grid()) {
            return None;
        }
        let valid = store.check_footprint(&footprint, self.held_aisle()).is_ok();
        Some(DragPreview { footprint, valid })
    }

    /// Like [`DragSession::hover_at`] but records the result as the live
    /// preview the next pick will drop on.
    pub fn track_hover(&mut self, store: &AisleStore, point: GridPoint) -> Option<DragPreview> {
        let preview = self.hover_at(store, point);
        let phase = std::mem::replace(&mut self.phase, DragPhase::Searching);
        self.phase = match (phase, preview) {
            (DragPhase::Searching, _) => DragPhase::Searching,
            (DragPhase::Armed { aisle, offset }, Some(preview))
            | (DragPhase::Previewing { aisle, offset, .. }, Some(preview)) => {
                DragPhase::Previewing {
                    aisle,
                    offset,
                    preview,
                }
            }
            (DragPhase::Armed { aisle, offset }, None)
            | (DragPhase::Previewing { aisle, offset, .. }, None) => {
                DragPhase::Armed { aisle, offset }
            }
        };
        preview
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}
