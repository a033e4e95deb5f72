use crate::init_logging;
use aislekit_core::{AisleId, BayScheme, GridPoint, GridSize};
use aislekit_designer::aisle::AisleResize;
use aislekit_designer::{DragOutcome, DrawOutcome, Layout, LayoutDefaults, LayoutEditor, PickOutcome};
use aislekit_settings::{AisleDefaults, Config};
use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "aislekit", version, about = "Warehouse aisle layout builder")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (.toml or .json). Defaults to the platform config directory.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write an empty layout
    New {
        /// Layout file, or a directory to use the configured file name
        file: PathBuf,
        #[arg(long)]
        rows: Option<u32>,
        #[arg(long)]
        cols: Option<u32>,
        #[arg(long)]
        zone: Option<String>,
        #[arg(long = "bays-high")]
        bays_high: Option<u32>,
    },
    /// Draw a straight aisle between two cells
    Draw {
        file: PathBuf,
        /// Start cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        from: GridPoint,
        /// End cell as ROW,COL, on the same row or column
        #[arg(long, value_parser = parse_cell)]
        to: GridPoint,
        /// Number bays on both faces of the aisle
        #[arg(long = "dual-side")]
        dual_side: bool,
    },
    /// Drag an aisle so its first cell lands on a new cell
    Move {
        file: PathBuf,
        aisle: String,
        /// Target cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        to: GridPoint,
    },
    /// Copy an aisle two cells across its long axis
    Duplicate { file: PathBuf, aisle: String },
    /// Delete an aisle
    Remove { file: PathBuf, aisle: String },
    /// Change sections, levels or bay scheme of an aisle
    Edit {
        file: PathBuf,
        aisle: String,
        #[arg(long)]
        sections: Option<u32>,
        #[arg(long = "bays-high")]
        bays_high: Option<u32>,
        /// sequential or dual-side
        #[arg(long)]
        scheme: Option<BayScheme>,
    },
    /// Resize the grid; aisles that no longer fit are only removed with --yes
    Grid {
        file: PathBuf,
        #[arg(long)]
        rows: u32,
        #[arg(long)]
        cols: u32,
        /// Confirm deletion of aisles outside the new grid
        #[arg(long)]
        yes: bool,
    },
    /// Export bay locations as CSV
    Export {
        file: PathBuf,
        /// Output file or directory. Defaults to stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Print layout statistics and aisles
    Summary { file: PathBuf },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

/// Runs a parsed command, writing user-facing output to `out`.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let mut config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    debug!("Running {:?}", cli.command);

    let saved = match cli.command {
        Command::New {
            file,
            rows,
            cols,
            zone,
            bays_high,
        } => {
            let grid = GridSize::clamped(
                rows.unwrap_or(config.grid.rows),
                cols.unwrap_or(config.grid.cols),
            );
            let mut defaults = layout_defaults(&config.defaults);
            if let Some(zone) = zone {
                defaults.zone = zone;
            }
            if let Some(bays_high) = bays_high {
                defaults.default_bays_high = bays_high;
            }
            let path = if file.is_dir() {
                file.join(config.layout_file_name(&defaults.zone))
            } else {
                file
            };
            let layout = Layout::with_defaults(grid, defaults)?;
            let mut editor = LayoutEditor::with_layout(layout);
            save(&mut editor, &path)?;
            writeln!(out, "Created {} grid layout at {}", grid, path.display())?;
            Some(path)
        }
        Command::Draw {
            file,
            from,
            to,
            dual_side,
        } => {
            let mut editor = open(&config, &file)?;
            editor.begin_drawing();
            editor.pick_cell(from)?;
            let outcome = editor
                .pick_cell(to)
                .with_context(|| format!("Cannot draw aisle from {} to {}", from, to))?;
            let PickOutcome::Draw(DrawOutcome::Placed(mut aisle)) = outcome else {
                bail!("Drawing did not complete");
            };
            if dual_side {
                aisle = editor.resize_aisle(&aisle.id, AisleResize::bay_scheme(BayScheme::DualSide))?;
            }
            save(&mut editor, &file)?;
            writeln!(
                out,
                "Placed {} ({}) at {}: {} sections, {} bays",
                aisle.name(),
                aisle.id,
                aisle.grid_position(),
                aisle.sections,
                aisle.bay_count()
            )?;
            Some(file)
        }
        Command::Move { file, aisle, to } => {
            let mut editor = open(&config, &file)?;
            let id = AisleId::new(aisle);
            let anchor = editor
                .aisle(&id)
                .map(|a| a.anchor())
                .ok_or_else(|| anyhow!("Aisle {} not found", id))?;

            editor.begin_dragging();
            editor.pick_cell(anchor)?;
            if editor.track_hover(to).is_none() {
                editor.cancel();
                bail!("Cannot move aisle {} to {}: outside the {} grid", id, to, editor.layout().grid());
            }
            let outcome = editor
                .pick_cell(to)
                .with_context(|| format!("Cannot move aisle {} to {}", id, to))?;
            if !matches!(outcome, PickOutcome::Drag(DragOutcome::Dropped { .. })) {
                bail!("Aisle {} was not dropped", id);
            }
            save(&mut editor, &file)?;
            writeln!(out, "Moved {} to {}", id, to)?;
            Some(file)
        }
        Command::Duplicate { file, aisle } => {
            let mut editor = open(&config, &file)?;
            let copy = editor.duplicate_aisle(&AisleId::new(aisle))?;
            save(&mut editor, &file)?;
            writeln!(
                out,
                "Duplicated as {} ({}) at {}",
                copy.name(),
                copy.id,
                copy.grid_position()
            )?;
            Some(file)
        }
        Command::Remove { file, aisle } => {
            let mut editor = open(&config, &file)?;
            let removed = editor.remove_aisle(&AisleId::new(aisle))?;
            save(&mut editor, &file)?;
            writeln!(out, "Removed {} ({})", removed.name(), removed.id)?;
            Some(file)
        }
        Command::Edit {
            file,
            aisle,
            sections,
            bays_high,
            scheme,
        } => {
            let changes = AisleResize {
                sections,
                bays_high,
                bay_scheme: scheme,
            };
            if changes.is_empty() {
                bail!("Nothing to edit: pass --sections, --bays-high or --scheme");
            }
            let mut editor = open(&config, &file)?;
            let updated = editor.resize_aisle(&AisleId::new(aisle), changes)?;
            save(&mut editor, &file)?;
            writeln!(
                out,
                "{}: {} sections x {} high, {} ({} bays)",
                updated.name(),
                updated.sections,
                updated.bays_high,
                updated.bay_scheme,
                updated.bay_count()
            )?;
            Some(file)
        }
        Command::Grid {
            file,
            rows,
            cols,
            yes,
        } => {
            let mut editor = open(&config, &file)?;
            let grid = GridSize::clamped(rows, cols);
            let orphaned = editor.grid_impact(grid);
            if !orphaned.is_empty() && !yes {
                writeln!(
                    out,
                    "Resizing to {} would delete {} aisle(s):",
                    grid,
                    orphaned.len()
                )?;
                for id in &orphaned {
                    writeln!(out, "  {}", id)?;
                }
                writeln!(out, "Re-run with --yes to apply")?;
                None
            } else {
                let removed = editor.apply_grid_size(grid)?;
                save(&mut editor, &file)?;
                writeln!(
                    out,
                    "Grid set to {} ({} aisle(s) removed)",
                    grid,
                    removed.len()
                )?;
                Some(file)
            }
        }
        Command::Export { file, output } => {
            let editor = open(&config, &file)?;
            match output {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(config.export_file_name(&editor.layout().defaults().zone))
                    } else {
                        path
                    };
                    let csv = editor.export_csv()?;
                    std::fs::write(&path, csv)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Exported locations to {}", path.display());
                    writeln!(
                        out,
                        "Exported {} locations to {}",
                        editor.export_rows().len(),
                        path.display()
                    )?;
                }
                None => editor.write_csv(out)?,
            }
            None
        }
        Command::Summary { file } => {
            let editor = open(&config, &file)?;
            write_summary(&editor, out)?;
            None
        }
    };

    if let (Some(config_path), Some(saved)) = (cli.config.as_deref(), saved) {
        config.add_recent_file(saved);
        config
            .save_to_file(config_path)
            .context("Failed to update recent files")?;
    }

    Ok(())
}

fn layout_defaults(defaults: &AisleDefaults) -> LayoutDefaults {
    LayoutDefaults {
        zone: defaults.zone.clone(),
        height_mm: defaults.height_mm,
        width_mm: defaults.width_mm,
        depth_mm: defaults.depth_mm,
        default_bays_high: defaults.default_bays_high,
        bay_scheme: defaults.bay_scheme,
    }
}

/// Editor seeded with the configured defaults, then loaded from `path`.
fn open(config: &Config, path: &Path) -> Result<LayoutEditor> {
    let layout = Layout::with_defaults(config.grid.to_grid(), layout_defaults(&config.defaults))?;
    let mut editor = LayoutEditor::with_layout(layout);
    editor.load_from_file(path)?;
    Ok(editor)
}

fn save(editor: &mut LayoutEditor, path: &Path) -> Result<()> {
    editor
        .save_to_file(path)
        .with_context(|| format!("Failed to save {}", path.display()))
}

fn write_summary<W: Write>(editor: &LayoutEditor, out: &mut W) -> Result<()> {
    let layout = editor.layout();
    let stats = editor.stats();
    writeln!(out, "Layout: {}", editor.display_name())?;
    writeln!(out, "Grid: {}", layout.grid())?;
    writeln!(out, "Zone: {}", layout.defaults().zone)?;
    writeln!(out, "Total Aisles: {}", stats.total_aisles)?;
    writeln!(out, "Total Bays: {}", stats.total_bays)?;
    writeln!(
        out,
        "Avg Bays/Aisle: {:.1}",
        stats.average_bays_per_aisle
    )?;
    for aisle in layout.store().iter() {
        writeln!(
            out,
            "  {:<6} {:<10} {:<14} {:<6} {:<10} {} sections x {} high, {}",
            aisle.name(),
            aisle.id,
            aisle.grid_position(),
            aisle.dimensions(),
            aisle.orientation(),
            aisle.sections,
            aisle.bays_high,
            aisle.bay_scheme
        )?;
    }
    Ok(())
}

/// Parses `ROW,COL`.
fn parse_cell(input: &str) -> std::result::Result<GridPoint, String> {
    let (row, col) = input
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{input}'"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}'", row.trim()))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", col.trim()))?;
    Ok(GridPoint::new(row, col))
}
