//! In-memory stores.
//!
//! Used to drive the sync pipeline without touching disk; the kit store
//! records every write and cache invalidation it receives.

use anyhow::{bail, Result};
use serde_json::Value;

use crate::models::{KitUpdate, SourceSettings, StyleKit};
use crate::sync::merge::apply_update;
use crate::sync::ports::{SourceSettingsPort, StyleKitPort};

/// Theme settings held in memory.
#[derive(Debug, Clone)]
pub struct MemorySourceStore {
    active: bool,
    settings: Option<SourceSettings>,
}

impl MemorySourceStore {
    /// Active store holding a JSON document; non-objects count as missing.
    #[must_use]
    pub fn with_settings(document: Value) -> Self {
        Self {
            active: true,
            settings: SourceSettings::from_value(document),
        }
    }

    /// Active store whose settings are missing.
    #[must_use]
    pub const fn without_settings() -> Self {
        Self {
            active: true,
            settings: None,
        }
    }

    /// Store whose theme integration is unavailable.
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            active: false,
            settings: None,
        }
    }
}

impl SourceSettingsPort for MemorySourceStore {
    fn is_active(&self) -> bool {
        self.active
    }

    fn read_settings(&self) -> Result<Option<SourceSettings>> {
        Ok(self.settings.clone())
    }
}

/// Style kit held in memory.
#[derive(Debug, Clone)]
pub struct MemoryKitStore {
    active: bool,
    kit: Option<StyleKit>,
    writes: Vec<KitUpdate>,
    invalidations: usize,
    fail_writes: bool,
}

impl MemoryKitStore {
    /// Active store holding `kit`.
    #[must_use]
    pub const fn new(kit: StyleKit) -> Self {
        Self {
            active: true,
            kit: Some(kit),
            writes: Vec::new(),
            invalidations: 0,
            fail_writes: false,
        }
    }

    /// Active store holding a JSON document; non-objects count as no kit.
    #[must_use]
    pub fn with_kit(document: Value) -> Self {
        Self {
            kit: StyleKit::from_value(document),
            ..Self::without_kit()
        }
    }

    /// Active store with no active kit.
    #[must_use]
    pub const fn without_kit() -> Self {
        Self {
            active: true,
            kit: None,
            writes: Vec::new(),
            invalidations: 0,
            fail_writes: false,
        }
    }

    /// Store whose page builder integration is unavailable.
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            active: false,
            kit: None,
            writes: Vec::new(),
            invalidations: 0,
            fail_writes: false,
        }
    }

    /// Makes every subsequent write fail.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current kit contents.
    #[must_use]
    pub const fn kit(&self) -> Option<&StyleKit> {
        self.kit.as_ref()
    }

    /// Updates received so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[KitUpdate] {
        &self.writes
    }

    /// Number of cache invalidations received.
    #[must_use]
    pub const fn invalidations(&self) -> usize {
        self.invalidations
    }
}

impl StyleKitPort for MemoryKitStore {
    fn is_active(&self) -> bool {
        self.active
    }

    fn read_kit(&self) -> Result<Option<StyleKit>> {
        Ok(self.kit.clone())
    }

    fn write_kit(&mut self, update: &KitUpdate) -> Result<()> {
        if self.fail_writes {
            bail!("Simulated write failure");
        }
        let Some(kit) = self.kit.as_mut() else {
            bail!("No active style kit to write to");
        };
        apply_update(kit, update);
        self.writes.push(update.clone());
        Ok(())
    }

    fn invalidate_style_cache(&mut self) -> Result<()> {
        self.invalidations += 1;
        Ok(())
    }
}
