//! Store adapters for the sync ports.
//!
//! The sync engine only sees [`crate::sync::ports`]; these services decide
//! where the theme settings and the style kit actually live.

pub mod json_store;
pub mod memory;

// Re-export commonly used adapters
pub use json_store::{JsonKitStore, JsonSourceStore};
pub use memory::{MemoryKitStore, MemorySourceStore};
