//! Two-point straight-line drawing.
//!
//! The first picked cell becomes the start point. The second pick must share
//! its row or its column; the cells in between become a new aisle.

use crate::aisle::Aisle;
use crate::layout::Layout;
use aislekit_core::{CellRect, GridPoint, LayoutError};
use tracing::debug;

/// Progress of a drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingPhase {
    AwaitingStart,
    AwaitingEnd { start: GridPoint },
}

/// Result of a successful pick while drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// First cell recorded; waiting for the end cell.
    StartRecorded(GridPoint),
    /// Second cell accepted and the aisle committed.
    Placed(Aisle),
}

/// State of one drawing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSession {
    phase: DrawingPhase,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            phase: DrawingPhase::AwaitingStart,
        }
    }

    pub fn phase(&self) -> DrawingPhase {
        self.phase
    }

    pub fn start_point(&self) -> Option<GridPoint> {
        match self.phase {
            DrawingPhase::AwaitingStart => None,
            DrawingPhase::AwaitingEnd { start } => Some(start),
        }
    }

    /// Handles a cell pick.
    ///
    /// A diagonal end cell is rejected with [`LayoutError::NotStraight`] and
    /// the start point is kept. Any other failure comes from the store and
    /// leaves it unchanged.
    pub fn pick_cell(
        &mut self,
        layout: &mut Layout,
        point: GridPoint,
    ) -> Result<DrawOutcome, LayoutError> {
        match self.phase {
            DrawingPhase::AwaitingStart => {
                self.phase = DrawingPhase::AwaitingEnd { start: point };
                debug!("Drawing start point {}", point);
                Ok(DrawOutcome::StartRecorded(point))
            }
            DrawingPhase::AwaitingEnd { start } => {
                let footprint = CellRect::from_segment(start, point)?;
                let candidate = layout.new_aisle(footprint);
                self.phase = DrawingPhase::AwaitingStart;
                layout
                    .store_mut()
                    .insert(candidate)
                    .map(DrawOutcome::Placed)
            }
        }
    }

    /// Footprint the aisle would get if `point` were picked as the end cell.
    /// `None` before a start point exists or when `point` is diagonal to it.
    pub fn preview_at(&self, point: GridPoint) -> Option<CellRect> {
        let start = self.start_point()?;
        CellRect::from_segment(start, point).ok()
    }

    /// True when `point` cannot be an end cell for the current start point.
    pub fn is_invalid_direction(&self, point: GridPoint) -> bool {
        self.start_point()
            .is_some_and(|start| start.row != point.row && start.col != point.col)
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}
