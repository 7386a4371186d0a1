//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Theme settings JSON file
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Style kit JSON file
    #[arg(long, value_name = "FILE")]
    kit: Option<PathBuf>,

    /// Compiled style cache directory
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// `id` attribute of the emitted <style> element
    #[arg(long, value_name = "ID")]
    style_tag_id: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    sync: SyncOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    source_settings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style_kit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style_cache: Option<String>,
}

#[derive(Serialize, Debug)]
struct SyncOutput {
    style_tag_id: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.source.is_none()
            && self.kit.is_none()
            && self.cache_dir.is_none()
            && self.style_tag_id.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --source, --kit, --cache-dir, or --style-tag-id",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|_| Config::default());

        if let Some(path) = &self.source {
            config.paths.source_settings = Some(path.clone());
        }

        if let Some(path) = &self.kit {
            config.paths.style_kit = Some(path.clone());
        }

        if let Some(path) = &self.cache_dir {
            config.paths.style_cache = Some(path.clone());
        }

        if let Some(id) = &self.style_tag_id {
            config.sync.style_tag_id.clone_from(id);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {}", e)))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn display_path(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            source_settings: display_path(config.paths.source_settings.as_ref()),
            style_kit: display_path(config.paths.style_kit.as_ref()),
            style_cache: display_path(config.paths.style_cache.as_ref()),
        },
        sync: SyncOutput {
            style_tag_id: config.sync.style_tag_id.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let show = |path: Option<&PathBuf>| {
        display_path(path).unwrap_or_else(|| "(not configured)".to_string())
    };

    println!("KitSync Configuration");
    println!("=====================");
    println!();

    println!("Paths:");
    println!("  Theme Settings: {}", show(config.paths.source_settings.as_ref()));
    println!("  Style Kit:      {}", show(config.paths.style_kit.as_ref()));
    println!("  Style Cache:    {}", show(config.paths.style_cache.as_ref()));
    println!();

    println!("Sync:");
    println!("  Style Tag Id: {}", config.sync.style_tag_id);
    println!();
}
