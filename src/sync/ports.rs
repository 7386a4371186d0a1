//! Read/write ports the sync pipeline talks to.
//!
//! The pipeline never reaches for a global store; it is handed one
//! implementation of each trait. File-backed and in-memory implementations
//! live in [`crate::services`].

use anyhow::Result;

use crate::models::{KitUpdate, SourceSettings, StyleKit};

/// Access to the theme's settings.
pub trait SourceSettingsPort {
    /// Whether the theme integration is available at all.
    fn is_active(&self) -> bool;

    /// Reads a fresh snapshot of the theme settings.
    ///
    /// `Ok(None)` means the store is missing or does not hold a settings
    /// object; `Err` is reserved for I/O failures.
    fn read_settings(&self) -> Result<Option<SourceSettings>>;
}

/// Access to the page builder's active style kit.
pub trait StyleKitPort {
    /// Whether the page builder integration is available at all.
    fn is_active(&self) -> bool;

    /// Reads a fresh snapshot of the active kit, `Ok(None)` if there is none.
    fn read_kit(&self) -> Result<Option<StyleKit>>;

    /// Persists `update` onto the active kit in one write.
    fn write_kit(&mut self, update: &KitUpdate) -> Result<()>;

    /// Drops any compiled CSS derived from the kit.
    fn invalidate_style_cache(&mut self) -> Result<()>;
}
