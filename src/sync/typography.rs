//! Typography overlay transform.
//!
//! Each existing kit typography entry is rewritten in place: the attributes
//! computed here are overwritten (or cleared), everything else on the entry
//! is left exactly as stored. Entries are never added, dropped or reordered.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::kit::fields;
use crate::models::{SourceSettings, TypographyEntry};
use crate::sync::mapping::{extras, generic, mapping_for, Slot};
use crate::sync::normalize::{extract_font_family_name, to_size_unit, Numeric};
use crate::sync::resolve::FallbackChain;

/// Weight value meaning "leave the kit's own weight alone".
pub const INHERIT: &str = "inherit";

/// Typography mode that makes the entry's family take effect.
pub const CUSTOM_MODE: &str = "custom";

/// Decoration/transform default for heading and unmapped slots.
pub const HEADING_KEYWORD_DEFAULT: &str = "initial";

/// Decoration/transform default for the body slot.
pub const BODY_KEYWORD_DEFAULT: &str = "none";

/// Default unit for font sizes and letter spacing.
pub const PX: &str = "px";

/// Default unit for line height.
pub const EM: &str = "em";

/// Viewports of a responsive font size block: (value key, unit key, kit field).
const VIEWPORTS: [(&str, &str, &str); 3] = [
    ("desktop", "desktop-unit", fields::FONT_SIZE),
    ("tablet", "tablet-unit", fields::FONT_SIZE_TABLET),
    ("mobile", "mobile-unit", fields::FONT_SIZE_MOBILE),
];

/// Overlays theme typography onto every kit entry, keeping kit order.
#[must_use]
pub fn sync_typography(
    settings: &SourceSettings,
    entries: Vec<TypographyEntry>,
) -> Vec<TypographyEntry> {
    entries
        .into_iter()
        .map(|entry| overlay_entry(settings, entry))
        .collect()
}

/// Overlays theme typography onto a single kit entry.
#[must_use]
pub fn overlay_entry(settings: &SourceSettings, mut entry: TypographyEntry) -> TypographyEntry {
    let mapping = mapping_for(&entry.id);
    let is_body = Slot::from_id(&entry.id).is_some_and(Slot::is_body);

    let mut extras_chain = FallbackChain::new().then(mapping.map(|m| m.extras));
    if !is_body {
        extras_chain = extras_chain.then(Some(generic::HEADINGS_FONT_EXTRAS));
    }
    let extras_bundle = extras_chain.resolve(settings).and_then(Value::as_object);

    apply_family(settings, &mut entry, mapping.map(|m| m.family));
    apply_size(settings, &mut entry, mapping.map(|m| m.size));
    apply_weight(settings, &mut entry, mapping.map(|m| m.weight));

    if let Some(bundle) = extras_bundle {
        apply_spacing(&mut entry, bundle);
    }

    let keyword_default = if is_body {
        BODY_KEYWORD_DEFAULT
    } else {
        HEADING_KEYWORD_DEFAULT
    };
    let decoration = keyword(extras_bundle, extras::TEXT_DECORATION, keyword_default);
    let transform = keyword(extras_bundle, extras::TEXT_TRANSFORM, keyword_default);
    entry.set(fields::TEXT_DECORATION, decoration);
    entry.set(fields::TEXT_TRANSFORM, transform);

    debug!(
        id = %entry.id,
        mapped = mapping.is_some(),
        body = is_body,
        has_extras = extras_bundle.is_some(),
        "overlaid typography entry"
    );

    entry
}

fn apply_family(settings: &SourceSettings, entry: &mut TypographyEntry, key: Option<&str>) {
    let Some(raw) = FallbackChain::new()
        .then(key)
        .then(Some(generic::HEADINGS_FONT_FAMILY))
        .resolve(settings)
    else {
        return;
    };

    let name = extract_font_family_name(raw);
    if !name.is_empty() {
        entry.set(fields::FONT_FAMILY, name);
        entry.set(fields::TYPOGRAPHY_MODE, CUSTOM_MODE);
    }
}

fn apply_size(settings: &SourceSettings, entry: &mut TypographyEntry, key: Option<&str>) {
    let Some(block) = FallbackChain::new()
        .then(key)
        .resolve(settings)
        .and_then(Value::as_object)
    else {
        return;
    };

    for (value_key, unit_key, field) in VIEWPORTS {
        let size = to_size_unit(
            block.get(value_key),
            block.get(unit_key),
            PX,
            Numeric::Integer,
        );
        entry.set(field, size);
    }
}

fn apply_weight(settings: &SourceSettings, entry: &mut TypographyEntry, key: Option<&str>) {
    let inherit = Value::from(INHERIT);
    let weight = FallbackChain::new()
        .then(key)
        .then(Some(generic::HEADINGS_FONT_WEIGHT))
        .resolve_or(settings, &inherit);

    if weight.as_str() != Some(INHERIT) {
        entry.set(fields::FONT_WEIGHT, weight.clone());
    }
}

/// Writes line height and letter spacing from an extras bundle, clearing
/// either one the bundle leaves blank so no stale value lingers.
fn apply_spacing(entry: &mut TypographyEntry, bundle: &Map<String, Value>) {
    let spacing = [
        (extras::LINE_HEIGHT, extras::LINE_HEIGHT_UNIT, EM, fields::LINE_HEIGHT),
        (extras::LETTER_SPACING, extras::LETTER_SPACING_UNIT, PX, fields::LETTER_SPACING),
    ];

    for (value_key, unit_key, default_unit, field) in spacing {
        match bundle.get(value_key).filter(|raw| is_set(raw)) {
            Some(raw) => {
                let size = to_size_unit(Some(raw), bundle.get(unit_key), default_unit, Numeric::Float);
                entry.set(field, size);
            }
            None => {
                entry.remove(field);
            }
        }
    }
}

/// A bundle value counts unless it is `null` or the empty string.
fn is_set(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn keyword(bundle: Option<&Map<String, Value>>, key: &str, default: &str) -> String {
    bundle
        .and_then(|b| b.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}
