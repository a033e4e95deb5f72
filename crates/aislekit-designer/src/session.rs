//! Editor interaction mode.
//!
//! Exactly one of idle, drawing or dragging is active at a time. The only
//! way to change mode is through the transitions on [`InteractionSession`].

use crate::aisle_store::AisleStore;
use crate::layout::Layout;
use crate::placement::{DrawOutcome, DrawingPhase, DrawingSession};
use crate::relocation::{DragOutcome, DragPhase, DragPreview, DragSession};
use aislekit_core::{CellRect, GridPoint, LayoutError};
use tracing::debug;

/// Which interaction is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Idle,
    Drawing,
    Dragging,
}

/// Outcome of routing a cell pick through the active session.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// No session is running.
    Ignored,
    Draw(DrawOutcome),
    Drag(DragOutcome),
}

impl PickOutcome {
    /// True when the pick committed a change to the layout.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            PickOutcome::Draw(DrawOutcome::Placed(_))
                | PickOutcome::Drag(DragOutcome::Dropped { .. })
        )
    }
}

/// The active interaction, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionSession {
    #[default]
    Idle,
    Drawing(DrawingSession),
    Dragging(DragSession),
}

impl InteractionSession {
    pub fn mode(&self) -> SessionMode {
        match self {
            Self::Idle => SessionMode::Idle,
            Self::Drawing(_) => SessionMode::Drawing,
            Self::Dragging(_) => SessionMode::Dragging,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Starts a drawing session, abandoning any other session.
    pub fn begin_drawing(&mut self) {
        debug!("Entering drawing mode");
        *self = Self::Drawing(DrawingSession::new());
    }

    /// Starts a drag session, abandoning any other session.
    pub fn begin_dragging(&mut self) {
        debug!("Entering drag mode");
        *self = Self::Dragging(DragSession::new());
    }

    /// Returns to idle without touching the layout.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            debug!("Cancelled {:?} session", self.mode());
        }
        *self = Self::Idle;
    }

    /// Routes a cell pick to the active session and applies the resulting
    /// mode transition.
    ///
    /// Drawing ends after a placement or after a store rejection of the
    /// drawn segment; a diagonal end cell keeps the start point. Dragging
    /// ends after any drop attempt.
    pub fn pick_cell(
        &mut self,
        layout: &mut Layout,
        point: GridPoint,
    ) -> Result<PickOutcome, LayoutError> {
        match self {
            Self::Idle => Ok(PickOutcome::Ignored),
            Self::Drawing(session) => {
                let completing = matches!(session.phase(), DrawingPhase::AwaitingEnd { .. });
                let result = session.pick_cell(layout, point);
                let finished = match &result {
                    Ok(DrawOutcome::Placed(_)) => true,
                    Ok(DrawOutcome::StartRecorded(_)) => false,
                    Err(err) => completing && !err.is_not_straight(),
                };
                if finished {
                    *self = Self::Idle;
                }
                result.map(PickOutcome::Draw)
            }
            Self::Dragging(session) => {
                let dropping = matches!(session.phase(), DragPhase::Previewing { .. });
                let result = session.pick_cell(layout, point);
                if dropping {
                    *self = Self::Idle;
                }
                result.map(PickOutcome::Drag)
            }
        }
    }

    /// Drawing preview for the cursor at `point`.
    pub fn preview_at(&self, point: GridPoint) -> Option<CellRect> {
        match self {
            Self::Drawing(session) => session.preview_at(point),
            _ => None,
        }
    }

    /// Read-only drag preview for the cursor at `point`.
    pub fn hover_at(&self, store: &AisleStore, point: GridPoint) -> Option<DragPreview> {
        match self {
            Self::Dragging(session) => session.hover_at(store, point),
            _ => None,
        }
    }

    /// Drag preview that also becomes the drop target for the next pick.
    pub fn track_hover(&mut self, store: &AisleStore, point: GridPoint) -> Option<DragPreview> {
        match self {
            Self::Dragging(session) => session.track_hover(store, point),
            _ => None,
        }
    }

    /// Instruction a UI shows for the current state.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Idle => "Choose a tool to create or move aisles",
            Self::Drawing(session) => match session.phase() {
                DrawingPhase::AwaitingStart => "Click start point anywhere on grid",
                DrawingPhase::AwaitingEnd { .. } => "Click end point on same row or column",
            },
            Self::Dragging(session) => match session.phase() {
                DragPhase::Searching => "Click any aisle to start dragging",
                _ => "Click to drop aisle at new position",
            },
        }
    }
}
