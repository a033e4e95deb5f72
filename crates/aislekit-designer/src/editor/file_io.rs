//! File I/O operations (save, load, new) for the layout editor.

use super::LayoutEditor;
use crate::aisle_store::AisleStore;
use crate::layout::Layout;
use crate::serialization::LayoutFile;
use aislekit_core::{GridSize, LayoutError};
use anyhow::Context;
use tracing::info;

impl LayoutEditor {
    /// Save layout to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let document = LayoutFile::from_layout(&self.layout);
        document.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        info!("Saved layout to {}", path.as_ref().display());

        Ok(())
    }

    /// Number of aisles a load would replace.
    pub fn load_impact(&self) -> usize {
        self.layout.discard_impact()
    }

    /// Load layout from file.
    ///
    /// The document is fully validated before the current layout is
    /// replaced. A document without `formData` keeps the current defaults.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let document = LayoutFile::load_from_file(&path)?;
        let layout = document
            .into_layout_with(self.layout.defaults())
            .with_context(|| format!("Invalid layout in {}", path.as_ref().display()))?;

        self.layout = layout;
        self.session.cancel();
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        info!(
            "Loaded {} aisles from {}",
            self.layout.store().len(),
            path.as_ref().display()
        );

        Ok(())
    }

    /// Create new layout (clear all), keeping the current defaults.
    pub fn new_layout(&mut self, grid: GridSize) -> Result<(), LayoutError> {
        let defaults = self.layout.defaults().clone();
        let store = AisleStore::new(GridSize::new(grid.rows, grid.cols)?);
        self.layout = Layout::from_parts(store, defaults)?;
        self.session.cancel();
        self.current_file_path = None;
        self.is_modified = false;
        self.layout_name = "Untitled".to_string();
        Ok(())
    }
}
