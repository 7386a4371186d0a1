//! Shared CLI types: errors, exit codes and store location flags.

use std::fmt;
use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::services::{JsonKitStore, JsonSourceStore};
use crate::sync::SyncError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or a failed precondition
    Validation = 1,
    /// Reading or writing a file failed
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message shown to the user
    pub message: String,
    /// Exit code the process ends with
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input or failed precondition (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Validation,
        }
    }

    /// File system or serialization failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SyncError> for CliError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Precondition(failure) => Self::validation(failure.message()),
            SyncError::Store(_) => Self::io(err.to_string()),
        }
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Store locations, each overriding the configured value.
#[derive(Debug, Clone, Default, Args)]
pub struct StoreArgs {
    /// Theme settings JSON file
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Style kit JSON file
    #[arg(long, value_name = "FILE")]
    pub kit: Option<PathBuf>,

    /// Compiled style cache directory to clear after a write
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

impl StoreArgs {
    /// Loads the configuration file.
    pub fn load_config() -> CliResult<Config> {
        Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
    }

    /// Opens both stores, preferring flags over configuration.
    pub fn open(&self, config: &Config) -> (JsonSourceStore, JsonKitStore) {
        let source = self
            .source
            .clone()
            .or_else(|| config.paths.source_settings.clone());
        let kit = self.kit.clone().or_else(|| config.paths.style_kit.clone());
        let cache_dir = self
            .cache_dir
            .clone()
            .or_else(|| config.paths.style_cache.clone());

        (JsonSourceStore::new(source), JsonKitStore::new(kit, cache_dir))
    }
}
