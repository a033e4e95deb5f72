//! Layout editor facade for UI and CLI integration.
//! Owns the layout, the interaction session and the file state.
//!
//! Split into submodules:
//! - `file_io`: Save/load/new operations

mod file_io;

use crate::aisle::{Aisle, AisleResize, NewAisle};
use crate::bays::{generate_bays, Bay};
use crate::export::{export_rows, write_csv, BayRow};
use crate::layout::{Layout, LayoutDefaults, LayoutStats};
use crate::relocation::DragPreview;
use crate::session::{InteractionSession, PickOutcome, SessionMode};
use aislekit_core::{AisleId, CellRect, Error, GridPoint, GridSize, LayoutError};
use std::path::PathBuf;
use tracing::{debug, info};

/// Editor state for a single layout
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    layout: Layout,
    session: InteractionSession,
    current_file_path: Option<PathBuf>,
    is_modified: bool,
    layout_name: String,
}

impl LayoutEditor {
    pub fn new(grid: GridSize) -> Self {
        Self::with_layout(Layout::new(grid))
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            session: InteractionSession::Idle,
            current_file_path: None,
            is_modified: false,
            layout_name: "Untitled".to_string(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn mode(&self) -> SessionMode {
        self.session.mode()
    }

    pub fn current_file_path(&self) -> Option<&PathBuf> {
        self.current_file_path.as_ref()
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Mark layout as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the layout.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.layout_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    pub fn stats(&self) -> LayoutStats {
        self.layout.stats()
    }

    pub fn aisle(&self, id: &AisleId) -> Option<&Aisle> {
        self.layout.store().get(id)
    }

    // Interaction session

    pub fn begin_drawing(&mut self) {
        self.session.begin_drawing();
    }

    pub fn begin_dragging(&mut self) {
        self.session.begin_dragging();
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Instruction for the current interaction state.
    pub fn prompt(&self) -> &'static str {
        self.session.prompt()
    }

    /// Routes a grid click to the active session.
    pub fn pick_cell(&mut self, point: GridPoint) -> Result<PickOutcome, LayoutError> {
        let outcome = self.session.pick_cell(&mut self.layout, point)?;
        if outcome.is_mutation() {
            self.mark_modified();
        }
        Ok(outcome)
    }

    pub fn preview_at(&self, point: GridPoint) -> Option<CellRect> {
        self.session.preview_at(point)
    }

    pub fn hover_at(&self, point: GridPoint) -> Option<DragPreview> {
        self.session.hover_at(self.layout.store(), point)
    }

    pub fn track_hover(&mut self, point: GridPoint) -> Option<DragPreview> {
        self.session.track_hover(self.layout.store(), point)
    }

    // Direct store operations

    /// Draws an aisle between two cells in one step, using the layout
    /// defaults.
    pub fn draw_aisle(&mut self, start: GridPoint, end: GridPoint) -> Result<Aisle, LayoutError> {
        let footprint = CellRect::from_segment(start, end)?;
        let candidate = self.layout.new_aisle(footprint);
        self.add_aisle(candidate)
    }

    pub fn add_aisle(&mut self, candidate: NewAisle) -> Result<Aisle, LayoutError> {
        let aisle = self.layout.store_mut().insert(candidate)?;
        self.mark_modified();
        Ok(aisle)
    }

    pub fn move_aisle(&mut self, id: &AisleId, row: i32, col: i32) -> Result<(), LayoutError> {
        self.layout.store_mut().move_to(id, row, col)?;
        self.mark_modified();
        Ok(())
    }

    pub fn resize_aisle(&mut self, id: &AisleId, changes: AisleResize) -> Result<Aisle, LayoutError> {
        let updated = self.layout.store_mut().resize(id, changes)?.clone();
        self.mark_modified();
        Ok(updated)
    }

    /// Deletes an aisle. A drag holding that aisle is cancelled.
    pub fn remove_aisle(&mut self, id: &AisleId) -> Result<Aisle, LayoutError> {
        let removed = self.layout.store_mut().remove(id)?;
        let held = matches!(
            &self.session,
            InteractionSession::Dragging(drag) if drag.held_aisle() == Some(id)
        );
        if held {
            self.session.cancel();
        }
        self.mark_modified();
        Ok(removed)
    }

    pub fn duplicate_aisle(&mut self, id: &AisleId) -> Result<Aisle, LayoutError> {
        let copy = self.layout.store_mut().duplicate(id)?;
        self.mark_modified();
        Ok(copy)
    }

    /// Replaces the defaults used for new aisles and export dimensions.
    pub fn set_defaults(&mut self, defaults: LayoutDefaults) -> Result<(), LayoutError> {
        self.layout.set_defaults(defaults)?;
        self.mark_modified();
        Ok(())
    }

    // Destructive bulk operations: query the impact, then apply.

    /// Aisles that would be deleted by switching to `grid`.
    pub fn grid_impact(&self, grid: GridSize) -> Vec<AisleId> {
        self.layout.store().orphaned_by(grid)
    }

    /// Switches grid size, deleting orphaned aisles. Cancels any session.
    pub fn apply_grid_size(&mut self, grid: GridSize) -> Result<Vec<Aisle>, LayoutError> {
        let removed = self.layout.store_mut().resize_grid(grid)?;
        self.session.cancel();
        self.mark_modified();
        info!("Grid set to {}", grid);
        Ok(removed)
    }

    /// Number of aisles [`LayoutEditor::clear`] would delete.
    pub fn clear_impact(&self) -> usize {
        self.layout.discard_impact()
    }

    /// Deletes every aisle and cancels any session.
    pub fn clear(&mut self) -> usize {
        let count = self.layout.store_mut().clear();
        self.session.cancel();
        if count > 0 {
            self.mark_modified();
        }
        count
    }

    // Bays and export

    /// Generated bays of one aisle.
    pub fn bays_for(&self, id: &AisleId) -> Result<Vec<Bay>, LayoutError> {
        self.layout
            .store()
            .get(id)
            .map(generate_bays)
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })
    }

    pub fn export_rows(&self) -> Vec<BayRow> {
        export_rows(&self.layout)
    }

    /// Location export as CSV text. Refused when there is nothing to export.
    pub fn export_csv(&self) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::other(e.to_string()))
    }

    /// Streams the location export to `writer`.
    pub fn write_csv<W: std::io::Write>(&self, writer: &mut W) -> Result<(), Error> {
        if self.layout.store().is_empty() {
            return Err(Error::NothingToExport);
        }
        let rows = self.export_rows();
        write_csv(writer, &rows)?;
        debug!("Exported {} location rows", rows.len());
        Ok(())
    }
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
