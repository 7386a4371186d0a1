//! CLI command handlers for KitSync.
//!
//! Each subcommand is a thin shell over the sync engine: it resolves store
//! locations, runs one action, and prints the outcome for humans or as JSON.

pub mod common;
pub mod config;
pub mod css;
pub mod doctor;
pub mod sync;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, StoreArgs};
pub use config::ConfigArgs;
pub use css::CssArgs;
pub use doctor::DoctorArgs;
pub use sync::SyncArgs;
