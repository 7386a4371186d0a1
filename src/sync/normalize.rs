//! Value normalization for raw theme settings.
//!
//! Every function here is total: malformed input produces an empty string
//! or a zero size, never an error. Theme settings are partially hand-edited,
//! so a single odd value must not sink a whole sync.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::{Size, SizeUnit};

/// Leading quoted family name, or everything from the first comma on.
static FONT_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^'(.+?)'|^"(.+?)"|,.*"#).expect("font name pattern is a valid regex")
});

/// Leading numeric prefix of a string, e.g. `"16px"` -> `16`.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("numeric prefix pattern is a valid regex")
});

/// How the numeric part of a size is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric {
    /// Truncate to a whole number (font sizes)
    Integer,
    /// Keep the fraction (line height, letter spacing)
    Float,
}

/// Reduces a CSS font stack to a single bare family name.
///
/// `"'Roboto', sans-serif"` becomes `Roboto`, `"Open Sans, Arial"` becomes
/// `Open Sans`. Non-string input yields an empty string.
#[must_use]
pub fn extract_font_family_name(raw: &Value) -> String {
    match raw {
        Value::String(stack) => FONT_NAME_PATTERN
            .replace_all(stack, "$1$2")
            .trim()
            .to_string(),
        _ => String::new(),
    }
}

/// Coerces a raw value to a float the way loosely-typed settings expect.
///
/// Strings contribute their leading numeric prefix (`"1.5em"` -> `1.5`),
/// booleans count as 0/1, and anything else is zero.
#[must_use]
pub fn coerce_float(raw: &Value) -> f64 {
    match raw {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => NUMERIC_PREFIX
            .find(s)
            .and_then(|m| m.as_str().trim().parse::<f64>().ok())
            .filter(|f| f.is_finite())
            .unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Coerces a raw value to an integer, truncating toward zero.
#[must_use]
pub fn coerce_int(raw: &Value) -> i64 {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| truncate(n.as_f64().unwrap_or(0.0))),
        other => truncate(coerce_float(other)),
    }
}

fn truncate(value: f64) -> i64 {
    if value.is_finite() {
        // `as` saturates at the i64 bounds
        value.trunc() as i64
    } else {
        0
    }
}

/// Builds a [`SizeUnit`] from a raw size and unit.
///
/// A missing size becomes `0`. The unit is kept when it is a non-empty
/// string, otherwise `default_unit` is used.
#[must_use]
pub fn to_size_unit(
    size: Option<&Value>,
    unit: Option<&Value>,
    default_unit: &str,
    numeric: Numeric,
) -> SizeUnit {
    let unit = unit
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .unwrap_or(default_unit)
        .to_string();

    let size = match (size, numeric) {
        (None, Numeric::Integer) => Size::Int(0),
        (None, Numeric::Float) => Size::Float(0.0),
        (Some(raw), Numeric::Integer) => Size::Int(coerce_int(raw)),
        (Some(raw), Numeric::Float) => Size::Float(coerce_float(raw)),
    };

    SizeUnit { unit, size }
}

/// Converts a resolved scalar into a display string (colors, keywords).
///
/// Numbers are rendered as-is; other non-strings yield `None`.
#[must_use]
pub fn scalar_to_string(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
