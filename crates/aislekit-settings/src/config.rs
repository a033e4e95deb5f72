//! Configuration and settings management for AisleKit
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Grid size for new layouts
//! - Defaults applied to new aisles and reported on export
//! - File naming and the recent files list

use crate::error::{SettingsError, SettingsResult};
use aislekit_core::{BayScheme, GridSize, MAX_BAYS_HIGH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "aislekit";

/// Config file name inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Placeholder replaced by the zone in file name patterns.
const ZONE_PLACEHOLDER: &str = "{zone}";

/// Grid size used for new layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSettings {
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        let grid = GridSize::default();
        Self {
            rows: grid.rows,
            cols: grid.cols,
        }
    }
}

impl GridSettings {
    pub fn to_grid(&self) -> GridSize {
        GridSize::clamped(self.rows, self.cols)
    }
}

/// Defaults for new aisles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AisleDefaults {
    /// Zone prefix for aisle names and location codes
    pub zone: String,
    /// Rack height in mm
    pub height_mm: u32,
    /// Rack width in mm
    pub width_mm: u32,
    /// Rack depth in mm
    pub depth_mm: u32,
    /// Bay levels given to newly drawn aisles
    pub default_bays_high: u32,
    /// Bay numbering for newly drawn aisles
    pub bay_scheme: BayScheme,
}

impl Default for AisleDefaults {
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

/// File handling settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// Saved layout name, `{zone}` is replaced by the zone
    pub layout_file_pattern: String,
    /// Exported locations name, `{zone}` is replaced by the zone
    pub export_file_pattern: String,
    /// Number of recent files to track
    pub recent_files_count: usize,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            layout_file_pattern: "warehouse_{zone}_layout.json".to_string(),
            export_file_pattern: "warehouse_{zone}_locations.csv".to_string(),
            recent_files_count: 10,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Recent files list, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    /// Grid settings
    #[serde(default)]
    pub grid: GridSettings,
    /// Aisle defaults
    #[serde(default)]
    pub defaults: AisleDefaults,
    /// File settings
    #[serde(default)]
    pub files: FileSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Platform config location, e.g. `~/.config/aislekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load `path` if given, otherwise the default location. A missing
    /// default file yields the built-in defaults; an explicit path must
    /// exist.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            Ok(_) => Ok(Self::default()),
            Err(err) => {
                debug!("Using built-in config: {}", err);
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        // Validate grid settings
        let range = GridSize::MIN_DIMENSION..=GridSize::MAX_DIMENSION;
        for (key, value) in [("grid.rows", self.grid.rows), ("grid.cols", self.grid.cols)] {
            if !range.contains(&value) {
                return Err(SettingsError::invalid(
                    key,
                    format!(
                        "{} is outside {}..={}",
                        value,
                        GridSize::MIN_DIMENSION,
                        GridSize::MAX_DIMENSION
                    ),
                ));
            }
        }

        // Validate aisle defaults
        if self.defaults.zone.trim().is_empty() {
            return Err(SettingsError::invalid("defaults.zone", "must not be empty"));
        }

        if !(1..=MAX_BAYS_HIGH).contains(&self.defaults.default_bays_high) {
            return Err(SettingsError::invalid(
                "defaults.default_bays_high",
                format!("must be within 1..={}", MAX_BAYS_HIGH),
            ));
        }

        if self.defaults.height_mm == 0 || self.defaults.width_mm == 0 || self.defaults.depth_mm == 0
        {
            return Err(SettingsError::invalid(
                "defaults",
                "rack dimensions must be > 0",
            ));
        }

        // Validate file settings
        if self.files.layout_file_pattern.trim().is_empty() {
            return Err(SettingsError::invalid(
                "files.layout_file_pattern",
                "must not be empty",
            ));
        }

        if self.files.export_file_pattern.trim().is_empty() {
            return Err(SettingsError::invalid(
                "files.export_file_pattern",
                "must not be empty",
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.files.recent_files_count);
    }

    /// Saved layout file name for `zone`
    pub fn layout_file_name(&self, zone: &str) -> String {
        self.files.layout_file_pattern.replace(ZONE_PLACEHOLDER, zone)
    }

    /// Exported locations file name for `zone`
    pub fn export_file_name(&self, zone: &str) -> String {
        self.files.export_file_pattern.replace(ZONE_PLACEHOLDER, zone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))),
        }
    }
}
