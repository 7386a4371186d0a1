//! Guarded sync pipeline shared by the color and typography actions.
//!
//! A sync runs in three phases:
//!
//! 1. **Preflight** - availability checks and snapshot reads. Any failure
//!    here is a [`PreconditionFailure`] and nothing is written.
//! 2. **Plan** - a pure in-memory transform producing a [`SyncPlan`].
//! 3. **Commit** - one write of the planned [`KitUpdate`], then one cache
//!    invalidation.
//!
//! Re-running a sync against unchanged theme settings produces the same
//! plan, so repeated runs leave the kit unchanged after the first.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{KitUpdate, SourceSettings, StyleKit, TypographyEntry};
use crate::sync::colors::sync_colors;
use crate::sync::ports::{SourceSettingsPort, StyleKitPort};
use crate::sync::typography::sync_typography;

/// Which collection a sync action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncKind {
    /// Color palette
    Colors,
    /// Typography presets
    Typography,
}

impl SyncKind {
    /// Lowercase name used in reports and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
        }
    }
}

impl fmt::Display for SyncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named reason a sync refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionFailure {
    /// Page builder integration is not available
    PageBuilderInactive,
    /// Theme integration is not available
    ThemeInactive,
    /// Page builder has no active style kit
    KitNotFound,
    /// Theme settings store is missing or not a settings object
    SourceSettingsUnavailable,
    /// Active kit has no typography list to overlay
    TypographyUnavailable,
}

impl PreconditionFailure {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PageBuilderInactive => "page_builder_not_active",
            Self::ThemeInactive => "theme_not_active",
            Self::KitNotFound => "kit_not_found",
            Self::SourceSettingsUnavailable => "source_settings_missing",
            Self::TypographyUnavailable => "typography_missing",
        }
    }

    /// Human-readable explanation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PageBuilderInactive => "Synchronization failed. The page builder is not active.",
            Self::ThemeInactive => "Synchronization failed. The theme is not active.",
            Self::KitNotFound => {
                "Synchronization failed. The page builder's active kit could not be found."
            }
            Self::SourceSettingsUnavailable => {
                "Synchronization failed. The theme settings could not be read."
            }
            Self::TypographyUnavailable => {
                "Synchronization failed. The active kit has no global typography configured."
            }
        }
    }
}

impl fmt::Display for PreconditionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error returned by a sync action.
#[derive(Debug)]
pub enum SyncError {
    /// The sync refused to start; nothing was written
    Precondition(PreconditionFailure),
    /// A store read or write failed
    Store(anyhow::Error),
}

impl SyncError {
    /// The precondition that failed, if that is what happened.
    #[must_use]
    pub const fn precondition(&self) -> Option<PreconditionFailure> {
        match self {
            Self::Precondition(failure) => Some(*failure),
            Self::Store(_) => None,
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition(failure) => write!(f, "{failure}"),
            Self::Store(err) => write!(f, "Synchronization failed. {err:#}"),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Precondition(_) => None,
            Self::Store(err) => Some(&**err),
        }
    }
}

impl From<PreconditionFailure> for SyncError {
    fn from(failure: PreconditionFailure) -> Self {
        Self::Precondition(failure)
    }
}

/// Update computed for one sync action, not yet written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncPlan {
    /// Targeted collection
    pub kind: SyncKind,
    /// Update to write
    pub update: KitUpdate,
}

impl SyncPlan {
    /// Number of entries in the planned collection.
    #[must_use]
    pub fn entries(&self) -> usize {
        match self.kind {
            SyncKind::Colors => self.update.system_colors.as_ref().map_or(0, Vec::len),
            SyncKind::Typography => self.update.system_typography.as_ref().map_or(0, Vec::len),
        }
    }

    /// Entry ids in the planned collection, in write order.
    #[must_use]
    pub fn slots(&self) -> Vec<String> {
        match self.kind {
            SyncKind::Colors => self
                .update
                .system_colors
                .iter()
                .flatten()
                .map(|entry| entry.id.clone())
                .collect(),
            SyncKind::Typography => self
                .update
                .system_typography
                .iter()
                .flatten()
                .map(|entry| entry.id.clone())
                .collect(),
        }
    }

    /// Whether committing the plan would write anything.
    ///
    /// An empty typography list has nothing to overlay and is not written.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        match self.kind {
            SyncKind::Colors => self.update.system_colors.is_some(),
            SyncKind::Typography => self.entries() > 0,
        }
    }
}

/// Summary of a finished sync action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReport {
    /// Targeted collection
    pub kind: SyncKind,
    /// Number of entries in the written collection
    pub entries: usize,
    /// Entry ids in written order
    pub slots: Vec<String>,
    /// Whether a write (and cache invalidation) happened
    pub written: bool,
    /// Completion time
    pub synced_at: DateTime<Utc>,
}

impl SyncReport {
    fn from_plan(plan: &SyncPlan, written: bool) -> Self {
        Self {
            kind: plan.kind,
            entries: plan.entries(),
            slots: plan.slots(),
            written,
            synced_at: Utc::now(),
        }
    }
}

/// Snapshots that passed preflight.
struct Ready {
    settings: SourceSettings,
    kit: StyleKit,
}

/// Runs sync actions against a pair of ports.
pub struct SyncPipeline<'a> {
    source: &'a dyn SourceSettingsPort,
    kit: &'a mut dyn StyleKitPort,
}

impl<'a> SyncPipeline<'a> {
    /// Creates a pipeline over the given ports.
    pub fn new(source: &'a dyn SourceSettingsPort, kit: &'a mut dyn StyleKitPort) -> Self {
        Self { source, kit }
    }

    /// Runs preflight and plan, then commits.
    pub fn run(&mut self, kind: SyncKind) -> Result<SyncReport, SyncError> {
        let plan = self.plan(kind)?;
        self.commit(&plan)
    }

    /// Runs preflight and computes the update without writing it.
    pub fn plan(&self, kind: SyncKind) -> Result<SyncPlan, SyncError> {
        let ready = self.preflight()?;

        let update = match kind {
            SyncKind::Colors => KitUpdate::colors(sync_colors(&ready.settings)),
            SyncKind::Typography => {
                let entries = typography_entries(&ready.kit)?;
                KitUpdate::typography(sync_typography(&ready.settings, entries))
            }
        };

        let plan = SyncPlan { kind, update };
        debug!(kind = %kind, entries = plan.entries(), "planned sync");
        Ok(plan)
    }

    /// Writes a plan in one call and invalidates the style cache.
    pub fn commit(&mut self, plan: &SyncPlan) -> Result<SyncReport, SyncError> {
        if !plan.has_changes() {
            info!(kind = %plan.kind, "nothing to write");
            return Ok(SyncReport::from_plan(plan, false));
        }

        self.kit.write_kit(&plan.update).map_err(SyncError::Store)?;
        info!(kind = %plan.kind, entries = plan.entries(), "wrote style kit");

        if let Err(err) = self.kit.invalidate_style_cache() {
            warn!(error = %err, "style cache invalidation failed after write");
            return Err(SyncError::Store(err));
        }

        Ok(SyncReport::from_plan(plan, true))
    }

    /// Checks availability and reads both snapshots.
    fn preflight(&self) -> Result<Ready, SyncError> {
        if !self.kit.is_active() {
            return Err(PreconditionFailure::PageBuilderInactive.into());
        }
        if !self.source.is_active() {
            return Err(PreconditionFailure::ThemeInactive.into());
        }

        let kit = self
            .kit
            .read_kit()
            .map_err(SyncError::Store)?
            .ok_or(PreconditionFailure::KitNotFound)?;

        let settings = self
            .source
            .read_settings()
            .map_err(SyncError::Store)?
            .ok_or(PreconditionFailure::SourceSettingsUnavailable)?;

        Ok(Ready { settings, kit })
    }
}

fn typography_entries(kit: &StyleKit) -> Result<Vec<TypographyEntry>, SyncError> {
    kit.typography()
        .ok_or_else(|| PreconditionFailure::TypographyUnavailable.into())
}
