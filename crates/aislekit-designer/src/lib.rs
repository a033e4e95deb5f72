//! # AisleKit Designer
//!
//! Warehouse aisle layout engine. Aisles are straight runs of grid cells;
//! the engine places them, moves them, expands them into addressable bays
//! and reads and writes the layout formats.
//!
//! ## Core Components
//!
//! - **Aisle Store**: owns every aisle and rejects any mutation that would
//!   leave the grid, overlap another aisle or bend an aisle
//! - **Placement**: two-click straight-line drawing
//! - **Relocation**: pick-up, hover preview and drop of existing aisles
//! - **Interaction Session**: exactly one of idle, drawing or dragging
//! - **Bays**: sequential and dual-side location codes
//! - **Serialization / Export**: JSON layout documents and CSV locations
//!
//! ## Architecture
//!
//! ```text
//! LayoutEditor (UI/CLI facade)
//!   ├── InteractionSession (Idle | Drawing | Dragging)
//!   └── Layout
//!         ├── AisleStore (grid + aisles)
//!         └── LayoutDefaults
//!
//! generate_bays(aisle) -> export rows -> CSV
//! LayoutFile <-> Layout
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aislekit_designer::LayoutEditor;
//! use aislekit_core::{GridPoint, GridSize};
//!
//! let mut editor = LayoutEditor::new(GridSize::default());
//! editor.begin_drawing();
//! editor.pick_cell(GridPoint::new(5, 5))?;
//! editor.pick_cell(GridPoint::new(5, 9))?;
//!
//! let csv = editor.export_csv()?;
//! ```

pub mod aisle;
pub mod aisle_store;
pub mod bays;
pub mod editor;
pub mod export;
pub mod layout;
pub mod placement;
pub mod relocation;
pub mod serialization;
pub mod session;

pub use aisle::{color_for_number, Aisle, AisleResize, NewAisle, AISLE_PALETTE};
pub use aisle_store::AisleStore;
pub use bays::{generate_bays, location_code, Bay, BaySide};
pub use editor::LayoutEditor;
pub use export::{export_rows, to_csv_string, write_csv, BayRow, CSV_HEADER};
pub use layout::{Layout, LayoutDefaults, LayoutStats};
pub use placement::{DrawOutcome, DrawingPhase, DrawingSession};
pub use relocation::{DragOutcome, DragPhase, DragPreview, DragSession};
pub use serialization::{load, save, AisleData, FormData, LayoutFile, FILE_FORMAT_VERSION};
pub use session::{InteractionSession, PickOutcome, SessionMode};
