//! Shallow merge of a [`KitUpdate`] onto stored kit settings.
//!
//! Only top-level collections named by the update are replaced; sibling
//! keys are left as stored. Nested values are never merged.

use serde_json::{json, Map, Value};

use crate::models::kit::{SYSTEM_COLORS, SYSTEM_TYPOGRAPHY};
use crate::models::{KitUpdate, StyleKit, TargetColorEntry, TypographyEntry};

/// Applies `update` to `kit`, returning the top-level keys that were replaced.
pub fn apply_update(kit: &mut StyleKit, update: &KitUpdate) -> Vec<&'static str> {
    let settings = kit.settings_mut();
    let mut replaced = Vec::new();

    if let Some(colors) = &update.system_colors {
        settings.insert(
            SYSTEM_COLORS.to_string(),
            Value::Array(colors.iter().map(color_value).collect()),
        );
        replaced.push(SYSTEM_COLORS);
    }

    if let Some(typography) = &update.system_typography {
        settings.insert(
            SYSTEM_TYPOGRAPHY.to_string(),
            Value::Array(typography.iter().map(typography_value).collect()),
        );
        replaced.push(SYSTEM_TYPOGRAPHY);
    }

    replaced
}

fn color_value(entry: &TargetColorEntry) -> Value {
    json!({
        "_id": entry.id,
        "title": entry.title,
        "name": entry.name,
        "color": entry.color,
    })
}

fn typography_value(entry: &TypographyEntry) -> Value {
    let mut object = Map::with_capacity(entry.fields.len() + 1);
    if !entry.id.is_empty() {
        object.insert("_id".to_string(), Value::from(entry.id.as_str()));
    }
    for (key, value) in &entry.fields {
        object.insert(key.clone(), value.clone());
    }
    Value::Object(object)
}
