//! Global style kit data structures.
//!
//! The style kit is the page builder's bundle of global design tokens. Only
//! two of its top-level collections are ever touched here:
//! `system_colors` (fully replaced) and `system_typography` (overlaid per
//! entry). Every other key in the kit document is carried through as-is.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Top-level kit key holding the color palette.
pub const SYSTEM_COLORS: &str = "system_colors";

/// Top-level kit key holding the typography presets.
pub const SYSTEM_TYPOGRAPHY: &str = "system_typography";

/// Field names used on a typography entry.
pub mod fields {
    /// Bare font family name
    pub const FONT_FAMILY: &str = "typography_font_family";
    /// Typography mode; `custom` makes the entry's own values take effect
    pub const TYPOGRAPHY_MODE: &str = "typography_typography";
    /// Desktop font size
    pub const FONT_SIZE: &str = "typography_font_size";
    /// Tablet font size
    pub const FONT_SIZE_TABLET: &str = "typography_font_size_tablet";
    /// Mobile font size
    pub const FONT_SIZE_MOBILE: &str = "typography_font_size_mobile";
    /// Font weight
    pub const FONT_WEIGHT: &str = "typography_font_weight";
    /// Line height
    pub const LINE_HEIGHT: &str = "typography_line_height";
    /// Letter spacing
    pub const LETTER_SPACING: &str = "typography_letter_spacing";
    /// Text decoration
    pub const TEXT_DECORATION: &str = "typography_text_decoration";
    /// Text transform
    pub const TEXT_TRANSFORM: &str = "typography_text_transform";
}

/// One entry of the kit's color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetColorEntry {
    /// Stable slot identifier (`primary`, `secondary`, `text`, `accent`)
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title
    pub title: String,
    /// Display name
    pub name: String,
    /// Hex or CSS color
    pub color: String,
}

impl TargetColorEntry {
    /// Creates a color entry whose title and name are identical.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: id.into(),
            title: label.clone(),
            name: label,
            color: color.into(),
        }
    }
}

/// A numeric size, kept as integer or float depending on the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Size {
    /// Whole-number size (font sizes)
    Int(i64),
    /// Fractional size (line height, letter spacing)
    Float(f64),
}

/// A size paired with its CSS unit, as stored on typography entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeUnit {
    /// CSS unit (`px`, `em`, `rem`, ...)
    pub unit: String,
    /// Numeric size
    pub size: Size,
}

impl From<SizeUnit> for Value {
    fn from(value: SizeUnit) -> Self {
        let size = match value.size {
            Size::Int(size) => Self::from(size),
            Size::Float(size) => Self::from(size),
        };
        json!({ "unit": value.unit, "size": size })
    }
}

/// One typography preset in the kit.
///
/// Only `_id` is modelled explicitly. All other fields stay in `fields` in
/// their stored order so that attributes the sync never computes survive a
/// write unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypographyEntry {
    /// Slot identifier
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Every other stored field
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TypographyEntry {
    /// Creates an entry with no fields besides its id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns a stored field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns a stored field if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Sets a field, keeping its position if it already exists.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Removes a field.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Text decoration currently stored on the entry.
    #[must_use]
    pub fn text_decoration(&self) -> Option<&str> {
        self.get_str(fields::TEXT_DECORATION)
    }

    /// Text transform currently stored on the entry.
    #[must_use]
    pub fn text_transform(&self) -> Option<&str> {
        self.get_str(fields::TEXT_TRANSFORM)
    }
}

/// Snapshot of the page builder's active style kit settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleKit {
    settings: Map<String, Value>,
}

impl StyleKit {
    /// Creates an empty kit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a parsed JSON document, returning `None` for non-objects.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(settings) => Some(Self { settings }),
            _ => None,
        }
    }

    /// Raw settings document.
    #[must_use]
    pub const fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    /// Mutable settings document.
    pub fn settings_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.settings
    }

    /// Consumes the kit and returns its settings document.
    #[must_use]
    pub fn into_settings(self) -> Map<String, Value> {
        self.settings
    }

    /// Color palette entries. Entries that do not match the schema are skipped.
    #[must_use]
    pub fn colors(&self) -> Vec<TargetColorEntry> {
        self.settings
            .get(SYSTEM_COLORS)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Typography presets in stored order.
    ///
    /// Returns `None` when the collection is missing, is not a list, or
    /// contains an item that is not an object.
    #[must_use]
    pub fn typography(&self) -> Option<Vec<TypographyEntry>> {
        let items = self.settings.get(SYSTEM_TYPOGRAPHY)?.as_array()?;
        items
            .iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item.clone()).ok(),
                _ => None,
            })
            .collect()
    }
}

/// Partial update written to the style kit in a single call.
///
/// Each present field replaces the whole top-level collection of the same
/// name; absent fields leave the stored collection untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitUpdate {
    /// Replacement color palette
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_colors: Option<Vec<TargetColorEntry>>,
    /// Replacement typography presets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_typography: Option<Vec<TypographyEntry>>,
}

impl KitUpdate {
    /// Update replacing only the color palette.
    #[must_use]
    pub fn colors(entries: Vec<TargetColorEntry>) -> Self {
        Self {
            system_colors: Some(entries),
            system_typography: None,
        }
    }

    /// Update replacing only the typography presets.
    #[must_use]
    pub fn typography(entries: Vec<TypographyEntry>) -> Self {
        Self {
            system_colors: None,
            system_typography: Some(entries),
        }
    }

    /// Returns true if the update carries no collection.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.system_colors.is_none() && self.system_typography.is_none()
    }
}
