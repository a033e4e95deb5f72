//! AisleKit Settings Crate
//!
//! Handles application configuration: grid size, aisle defaults, file naming
//! and the recent files list.

pub mod config;
pub mod error;

pub use config::{AisleDefaults, Config, FileSettings, GridSettings};
pub use error::{SettingsError, SettingsResult};
