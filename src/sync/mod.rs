//! Theme to style kit sync engine.
//!
//! Data flows one way: theme settings are resolved through fallback chains,
//! normalized, transformed per slot, and merged onto the kit in one write.
//!
//! ```no_run
//! use kitsync::services::json_store::{JsonKitStore, JsonSourceStore};
//! use kitsync::sync::{SyncKind, SyncPipeline};
//!
//! let source = JsonSourceStore::new(Some("theme.json".into()));
//! let mut kit = JsonKitStore::new(Some("kit.json".into()), None);
//! let report = SyncPipeline::new(&source, &mut kit).run(SyncKind::Colors)?;
//! println!("synced {} entries", report.entries);
//! # Ok::<(), kitsync::sync::SyncError>(())
//! ```

pub mod colors;
pub mod css;
pub mod mapping;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod ports;
pub mod resolve;
pub mod typography;

pub use pipeline::{PreconditionFailure, SyncError, SyncKind, SyncPipeline, SyncPlan, SyncReport};
pub use ports::{SourceSettingsPort, StyleKitPort};
