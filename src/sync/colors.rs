//! Color palette transform.

use tracing::debug;

use crate::models::{SourceSettings, TargetColorEntry};
use crate::sync::mapping::Slot;
use crate::sync::normalize::scalar_to_string;
use crate::sync::resolve::FallbackChain;

/// Color used for any slot the theme leaves unset.
pub const DEFAULT_COLOR: &str = "#000000";

/// Builds the complete palette: always the four slots, always in slot order.
///
/// The result replaces the kit's palette wholesale, so entries the kit had
/// beyond these four are dropped on write.
#[must_use]
pub fn sync_colors(settings: &SourceSettings) -> Vec<TargetColorEntry> {
    Slot::ALL
        .into_iter()
        .map(|slot| {
            let key = slot.mapping().color;
            let color = FallbackChain::new()
                .then(Some(key))
                .resolve(settings)
                .and_then(scalar_to_string)
                .unwrap_or_else(|| DEFAULT_COLOR.to_string());
            debug!(slot = slot.id(), key, color = %color, "resolved palette color");
            TargetColorEntry::new(slot.id(), slot.label(), color)
        })
        .collect()
}
