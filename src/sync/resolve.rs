//! Fallback resolution over theme settings.
//!
//! A per-element key overrides a shared key, which in turn overrides a
//! documented default. A key only counts when it holds a usable value:
//! an empty string or empty list falls through exactly like a missing key.

use serde_json::Value;

use crate::models::SourceSettings;

/// Ordered list of candidate source keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackChain<'k> {
    keys: Vec<&'k str>,
}

impl<'k> FallbackChain<'k> {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Appends a candidate key. `None` is skipped, which lets callers pass
    /// an optional slot-specific key without branching.
    #[must_use]
    pub fn then(mut self, key: Option<&'k str>) -> Self {
        if let Some(key) = key {
            self.keys.push(key);
        }
        self
    }

    /// Candidate keys in lookup order.
    #[must_use]
    pub fn keys(&self) -> &[&'k str] {
        &self.keys
    }

    /// Returns the first usable value in the chain.
    #[must_use]
    pub fn resolve<'s>(&self, settings: &'s SourceSettings) -> Option<&'s Value> {
        self.keys
            .iter()
            .find_map(|key| settings.get(key).value())
    }

    /// Returns the first usable value, or `default` when none is found.
    #[must_use]
    pub fn resolve_or<'s>(&self, settings: &'s SourceSettings, default: &'s Value) -> &'s Value {
        self.resolve(settings).unwrap_or(default)
    }
}

/// Resolves `specific` then `generic`.
#[must_use]
pub fn resolve<'s>(
    settings: &'s SourceSettings,
    specific: Option<&str>,
    generic: Option<&str>,
) -> Option<&'s Value> {
    FallbackChain::new()
        .then(specific)
        .then(generic)
        .resolve(settings)
}
