//! Serialization and deserialization for layout files.
//!
//! Implements save/load for warehouse layout documents using JSON. A loaded
//! document is converted into a fully validated [`Layout`] before anything
//! is replaced, so a rejected document never leaves a partial layout behind.

use crate::aisle::Aisle;
use crate::aisle_store::AisleStore;
use crate::layout::{Layout, LayoutDefaults};
use aislekit_core::{AisleId, BayScheme, FormatError, GridSize, Orientation};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;

/// Layout file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Top-level fields a document must carry to be accepted.
const REQUIRED_FIELDS: [&str; 2] = ["version", "aisles"];

/// Complete layout file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFile {
    pub version: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<GridSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_data: Option<FormData>,
    pub aisles: BTreeMap<String, AisleData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_aisle_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LayoutMetadata>,
}

/// Defaults section of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub zone: String,
    pub height: u32,
    pub width: u32,
    pub depth: u32,
    pub default_bays_high: u32,
    pub bay_scheme: BayScheme,
}

impl Default for FormData {
    fn default() -> Self {
        Self::from(&LayoutDefaults::default())
    }
}

impl From<&LayoutDefaults> for FormData {
    fn from(defaults: &LayoutDefaults) -> Self {
        Self {
            zone: defaults.zone.clone(),
            height: defaults.height_mm,
            width: defaults.width_mm,
            depth: defaults.depth_mm,
            default_bays_high: defaults.default_bays_high,
            bay_scheme: defaults.bay_scheme,
        }
    }
}

impl From<FormData> for LayoutDefaults {
    fn from(form: FormData) -> Self {
        Self {
            zone: form.zone,
            height_mm: form.height,
            width_mm: form.width,
            depth_mm: form.depth,
            default_bays_high: form.default_bays_high,
            bay_scheme: form.bay_scheme,
        }
    }
}

/// Serialized aisle record
///
/// Derived values (`color`, `orientation`) are written for readers of the
/// file and ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AisleData {
    #[serde(default)]
    pub id: String,
    #[serde(
        serialize_with = "serialize_aisle_number",
        deserialize_with = "deserialize_aisle_number"
    )]
    pub number: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bays_high: Option<u32>,
    pub grid_row: i32,
    pub grid_col: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "type")]
    pub bay_scheme: BayScheme,
}

impl AisleData {
    /// Snapshot of a live aisle.
    pub fn from_aisle(aisle: &Aisle) -> Self {
        Self {
            id: aisle.id.to_string(),
            number: aisle.number,
            width: aisle.width,
            height: aisle.height,
            sections: Some(aisle.sections),
            bays_high: Some(aisle.bays_high),
            grid_row: aisle.grid_row,
            grid_col: aisle.grid_col,
            zone: Some(aisle.zone.clone()),
            color: Some(aisle.color().to_string()),
            orientation: Some(aisle.orientation()),
            created_at: Some(aisle.created_at),
            bay_scheme: aisle.bay_scheme,
        }
    }

    /// Builds an aisle stored under `key`, filling absent optional fields
    /// from `defaults`. Invariants are checked later by the store.
    pub fn into_aisle(self, key: String, defaults: &LayoutDefaults) -> Aisle {
        let long_side = self.width.max(self.height);
        Aisle {
            id: AisleId::new(key),
            number: self.number,
            zone: self.zone.unwrap_or_else(|| defaults.zone.clone()),
            grid_row: self.grid_row,
            grid_col: self.grid_col,
            width: self.width,
            height: self.height,
            sections: self.sections.unwrap_or(long_side),
            bays_high: self.bays_high.unwrap_or(defaults.default_bays_high),
            bay_scheme: self.bay_scheme,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Summary written alongside the aisles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetadata {
    pub total_aisles: usize,
    /// Sum of `sections * baysHigh`, without dual-side doubling.
    pub total_bays: u64,
}

impl LayoutFile {
    /// Create a document describing `layout`
    pub fn from_layout(layout: &Layout) -> Self {
        let aisles = layout
            .store()
            .iter()
            .map(|a| (a.id.to_string(), AisleData::from_aisle(a)))
            .collect();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            created: Utc::now(),
            grid_size: Some(layout.grid()),
            form_data: Some(FormData::from(layout.defaults())),
            aisles,
            next_aisle_id: Some(layout.store().next_number()),
            metadata: Some(LayoutMetadata {
                total_aisles: layout.store().len(),
                total_bays: layout.total_bays(),
            }),
        }
    }

    /// Convert into a layout, substituting built-in defaults for a missing
    /// `formData` section.
    pub fn into_layout(self) -> std::result::Result<Layout, FormatError> {
        self.into_layout_with(&LayoutDefaults::default())
    }

    /// Convert into a layout, substituting `fallback` for a missing
    /// `formData` section. A missing `gridSize` becomes the default grid and
    /// a missing `nextAisleId` starts at 1.
    pub fn into_layout_with(
        self,
        fallback: &LayoutDefaults,
    ) -> std::result::Result<Layout, FormatError> {
        let defaults = self
            .form_data
            .map(LayoutDefaults::from)
            .unwrap_or_else(|| fallback.clone());
        let grid = self.grid_size.unwrap_or_default();
        let aisles: Vec<Aisle> = self
            .aisles
            .into_iter()
            .map(|(key, data)| data.into_aisle(key, &defaults))
            .collect();

        let store = AisleStore::from_parts(grid, aisles, self.next_aisle_id.unwrap_or(1))?;
        Ok(Layout::from_parts(store, defaults)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> std::result::Result<String, FormatError> {
        serde_json::to_string_pretty(self).map_err(|e| FormatError::Invalid(e.to_string()))
    }

    /// Parse a document, requiring `version` and `aisles`
    pub fn from_json(text: &str) -> std::result::Result<Self, FormatError> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(FormatError::Parse)?;
        {
            let object = value
                .as_object()
                .ok_or_else(|| FormatError::Invalid("expected a JSON object".to_string()))?;
            for field in REQUIRED_FIELDS {
                let present = match object.get(field) {
                    None | Some(serde_json::Value::Null) => false,
                    Some(serde_json::Value::String(s)) => !s.is_empty(),
                    Some(_) => true,
                };
                if !present {
                    return Err(FormatError::MissingField(field));
                }
            }
        }
        serde_json::from_value(value).map_err(|e| FormatError::Invalid(e.to_string()))
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize layout")?;

        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;

        Ok(())
    }

    /// Load layout document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;

        let document = Self::from_json(&content).context("Failed to parse layout file")?;

        Ok(document)
    }
}

/// Document for `layout`, stamped with the current time.
pub fn save(layout: &Layout) -> LayoutFile {
    LayoutFile::from_layout(layout)
}

/// Parse and validate a layout document.
pub fn load(text: &str) -> std::result::Result<Layout, FormatError> {
    LayoutFile::from_json(text)?.into_layout()
}

fn serialize_aisle_number<S>(number: &u32, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{number:02}"))
}

/// Accepts `"01"` as written by the app as well as a plain integer.
fn deserialize_aisle_number<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberRepr {
        Int(u32),
        Text(String),
    }

    match NumberRepr::deserialize(deserializer)? {
        NumberRepr::Int(n) => Ok(n),
        NumberRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid aisle number '{text}'"))),
    }
}
