//! # AisleKit
//!
//! A Rust warehouse aisle layout builder:
//! - Draw straight aisles on a cell grid with overlap and bounds checks
//! - Move, duplicate and edit aisles without breaking the layout
//! - Expand aisles into bay location codes (sequential or dual-side)
//! - Save layouts as JSON and export locations as CSV
//!
//! ## Architecture
//!
//! AisleKit is organized as a workspace with multiple crates:
//!
//! 1. **aislekit-core** - Geometry, identifiers and error types
//! 2. **aislekit-designer** - Aisle store, placement/drag sessions, bays, file formats
//! 3. **aislekit-settings** - Configuration files and defaults
//! 4. **aislekit** - Command-line binary that integrates all crates

pub mod cli;

pub use aislekit_core::{
    AisleId, BayScheme, CellRect, Error, FormatError, GridPoint, GridSize, LayoutError,
    Orientation, Result,
};
pub use aislekit_designer as designer;
pub use aislekit_designer::{
    generate_bays, Aisle, AisleStore, Bay, InteractionSession, Layout, LayoutDefaults,
    LayoutEditor, LayoutFile,
};
pub use aislekit_settings::{Config, SettingsError};
pub use cli::{execute, run, Cli, Command};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so CSV written to stdout stays clean
/// - RUST_LOG environment variable support
/// - `verbosity` raising the default level (warn, info, debug, trace)
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    // A subscriber may already be installed when running embedded or in tests.
    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already set");
    }

    Ok(())
}
