//! Flattened location export.
//!
//! One row per generated bay, aisles in number order. Rack dimensions come
//! from the layout defaults, not from the aisle.

use crate::bays::generate_bays;
use crate::layout::Layout;
use std::io::{self, Write};

/// Header row of the location export.
pub const CSV_HEADER: [&str; 12] = [
    "Zone",
    "Aisle",
    "Section",
    "Bay",
    "Location Code",
    "Height(mm)",
    "Width(mm)",
    "Depth(mm)",
    "Grid Position",
    "Aisle Dimensions",
    "Orientation",
    "Total Bays",
];

/// A single exported location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BayRow {
    pub zone: String,
    pub aisle: String,
    pub section: String,
    pub bay: String,
    pub location_code: String,
    pub height_mm: u32,
    pub width_mm: u32,
    pub depth_mm: u32,
    pub grid_position: String,
    pub aisle_dimensions: String,
    pub orientation: String,
    /// Generated bay count of the aisle, set on its first row only.
    pub total_bays: Option<usize>,
}

impl BayRow {
    fn fields(&self) -> [String; 12] {
        [
            self.zone.clone(),
            self.aisle.clone(),
            self.section.clone(),
            self.bay.clone(),
            self.location_code.clone(),
            self.height_mm.to_string(),
            self.width_mm.to_string(),
            self.depth_mm.to_string(),
            self.grid_position.clone(),
            self.aisle_dimensions.clone(),
            self.orientation.clone(),
            self.total_bays.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }
}

/// Every bay of every aisle as export rows.
pub fn export_rows(layout: &Layout) -> Vec<BayRow> {
    let defaults = layout.defaults();
    let mut rows = Vec::new();

    for aisle in layout.store().iter() {
        let bays = generate_bays(aisle);
        let total = bays.len();
        let label = aisle.label();
        let grid_position = aisle.grid_position();
        let dimensions = aisle.dimensions();
        let orientation = aisle.orientation().to_string();

        rows.extend(bays.into_iter().enumerate().map(|(index, bay)| BayRow {
            zone: aisle.zone.clone(),
            aisle: label.clone(),
            section: bay.section_label(),
            bay: bay.bay_label(),
            location_code: bay.location_code,
            height_mm: defaults.height_mm,
            width_mm: defaults.width_mm,
            depth_mm: defaults.depth_mm,
            grid_position: grid_position.clone(),
            aisle_dimensions: dimensions.clone(),
            orientation: orientation.clone(),
            total_bays: (index == 0).then_some(total),
        }));
    }
    rows
}

/// Writes the header and `rows` to `writer`.
pub fn write_csv<W: Write>(writer: &mut W, rows: &[BayRow]) -> io::Result<()> {
    write_record(writer, CSV_HEADER.iter().copied())?;
    for row in rows {
        let fields = row.fields();
        write_record(writer, fields.iter().map(String::as_str))?;
    }
    writer.flush()
}

/// Export of `layout` as a string.
pub fn to_csv_string(layout: &Layout) -> String {
    let mut csv = format_record(CSV_HEADER.iter().copied());
    csv.push('\n');
    for row in export_rows(layout) {
        let fields = row.fields();
        csv.push_str(&format_record(fields.iter().map(String::as_str)));
        csv.push('\n');
    }
    csv
}

fn write_record<'a, W: Write>(
    writer: &mut W,
    fields: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    writeln!(writer, "{}", format_record(fields))
}

fn format_record<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields.map(escape_field).collect::<Vec<_>>().join(",")
}

/// Quotes a field containing a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
