//! Doctor command: reports whether a sync could run, without running one.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, StoreArgs};
use crate::sync::{SourceSettingsPort, StyleKitPort};

/// Check that the theme settings and style kit are reachable
#[derive(Debug, Clone, Args)]
pub struct DoctorArgs {
    #[command(flatten)]
    pub stores: StoreArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check passed
    Available,
    /// Check failed
    Missing,
}

/// Result of one check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check name
    pub name: &'static str,
    /// Outcome
    pub status: CheckStatus,
    /// Human-readable detail
    pub message: String,
}

impl CheckResult {
    fn new(name: &'static str, ok: bool, message: impl Into<String>) -> Self {
        Self {
            name,
            status: if ok {
                CheckStatus::Available
            } else {
                CheckStatus::Missing
            },
            message: message.into(),
        }
    }
}

/// Runs every check in preflight order.
pub fn run_checks(
    source: &dyn SourceSettingsPort,
    kit: &dyn StyleKitPort,
) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(5);

    let builder_active = kit.is_active();
    results.push(CheckResult::new(
        "Page builder",
        builder_active,
        if builder_active {
            "style kit location configured"
        } else {
            "style kit location not configured or its directory does not exist"
        },
    ));

    let theme_active = source.is_active();
    results.push(CheckResult::new(
        "Theme",
        theme_active,
        if theme_active {
            "theme settings location configured"
        } else {
            "theme settings location not configured"
        },
    ));

    let kit_snapshot = if builder_active { kit.read_kit() } else { Ok(None) };
    let (kit_found, typography) = match &kit_snapshot {
        Ok(Some(snapshot)) => (true, snapshot.typography().map(|entries| entries.len())),
        _ => (false, None),
    };
    results.push(CheckResult::new(
        "Style kit",
        kit_found,
        match &kit_snapshot {
            Ok(Some(_)) => "active kit found".to_string(),
            Ok(None) => "no active kit".to_string(),
            Err(err) => format!("failed to read kit: {err:#}"),
        },
    ));
    results.push(CheckResult::new(
        "Kit typography",
        typography.is_some(),
        match typography {
            Some(count) => format!("{count} typography entries"),
            None => "no typography list in kit".to_string(),
        },
    ));

    let settings = if theme_active { source.read_settings() } else { Ok(None) };
    results.push(CheckResult::new(
        "Theme settings",
        matches!(settings, Ok(Some(_))),
        match &settings {
            Ok(Some(s)) => format!("{} settings readable", s.len()),
            Ok(None) => "settings missing or not a JSON object".to_string(),
            Err(err) => format!("failed to read settings: {err:#}"),
        },
    ));

    results
}

impl DoctorArgs {
    /// Execute the doctor command
    pub fn execute(&self) -> CliResult<()> {
        let config = StoreArgs::load_config()?;
        let (source, kit) = self.stores.open(&config);
        let results = run_checks(&source, &kit);

        if self.json {
            let json = serde_json::to_string_pretty(&results)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("KitSync Doctor");
            println!("==============");
            println!();
            for result in &results {
                let icon = match result.status {
                    CheckStatus::Available => "✓",
                    CheckStatus::Missing => "✗",
                };
                println!("{} {}: {}", icon, result.name, result.message);
            }
        }

        let failed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Missing)
            .count();
        if failed > 0 {
            return Err(CliError::validation(format!("{failed} check(s) failed")));
        }

        Ok(())
    }
}
