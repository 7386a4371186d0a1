//! Runtime CSS derived from the synced typography.
//!
//! Body text gets the `text` slot's decoration and transform; headings are
//! always reset so they never pick up the body's decoration.

use std::fmt::Write as _;

use crate::models::{StyleKit, TypographyEntry};
use crate::sync::mapping::Slot;

/// Default `id` attribute of the emitted `<style>` element.
pub const DEFAULT_STYLE_TAG_ID: &str = "kitsync-styles";

/// Keyword used when the body slot or one of its attributes is missing.
const UNSET_KEYWORD: &str = "initial";

/// Builds the CSS for a typography list.
///
/// When several entries carry the body id, the last one wins.
#[must_use]
pub fn render_sync_css(typography: &[TypographyEntry]) -> String {
    let body = typography
        .iter()
        .rev()
        .find(|entry| Slot::from_id(&entry.id).is_some_and(Slot::is_body));

    let decoration = css_keyword(body.and_then(TypographyEntry::text_decoration));
    let transform = css_keyword(body.and_then(TypographyEntry::text_transform));

    let mut css = String::new();
    let _ = writeln!(css, "body, p, a, span {{");
    let _ = writeln!(css, "    text-decoration: {decoration} !important;");
    let _ = writeln!(css, "    text-transform: {transform} !important;");
    let _ = writeln!(css, "}}");
    let _ = writeln!(css, "h1, h2, h3, h4, h5, h6 {{");
    let _ = writeln!(css, "    text-decoration: none !important;");
    let _ = writeln!(css, "    text-transform: initial !important;");
    let _ = writeln!(css, "}}");
    css
}

/// Builds the CSS for a kit, or `None` if the kit has no typography list.
#[must_use]
pub fn render_kit_css(kit: &StyleKit) -> Option<String> {
    kit.typography().map(|entries| render_sync_css(&entries))
}

/// Wraps CSS in a `<style>` element.
#[must_use]
pub fn wrap_style_tag(css: &str, id: &str) -> String {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let id = if valid { id } else { DEFAULT_STYLE_TAG_ID };
    format!("<style id=\"{id}\">\n{css}</style>\n")
}

/// Accepts plain CSS keywords (`underline`, `line-through overline`, ...)
/// and falls back to `initial` for anything that could break out of the
/// declaration.
fn css_keyword(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v)
            if !v.is_empty()
                && v.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ') =>
        {
            v
        }
        _ => UNSET_KEYWORD,
    }
}
