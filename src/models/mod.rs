//! Data models for theme settings and the style kit.
//!
//! Models are independent of the sync engine and of any storage backend;
//! they only describe the two schemas being bridged.

pub mod kit;
pub mod settings;

// Re-export all model types
pub use kit::{KitUpdate, Size, SizeUnit, StyleKit, TargetColorEntry, TypographyEntry};
pub use settings::{SettingValue, SourceSettings};
