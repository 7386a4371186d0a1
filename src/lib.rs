//! KitSync Library
//!
//! This library copies design tokens from a theme's settings into a page
//! builder's global style kit: the four palette colors and the typography
//! presets, written back without disturbing unrelated kit settings.

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod sync;
