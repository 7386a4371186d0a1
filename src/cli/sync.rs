//! Sync command: copies theme colors or typography into the style kit.

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, StoreArgs};
use crate::sync::{SyncError, SyncKind, SyncPipeline, SyncPlan, SyncReport};

/// Collection to synchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SyncTarget {
    /// Palette colors (primary, secondary, text, accent)
    Colors,
    /// Typography presets
    Typography,
}

impl From<SyncTarget> for SyncKind {
    fn from(target: SyncTarget) -> Self {
        match target {
            SyncTarget::Colors => Self::Colors,
            SyncTarget::Typography => Self::Typography,
        }
    }
}

/// Copy theme colors or typography into the style kit
#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// What to synchronize
    #[arg(value_enum)]
    pub target: SyncTarget,

    #[command(flatten)]
    pub stores: StoreArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Compute and print the update without writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize, Debug)]
struct SuccessResponse<'a> {
    status: &'static str,
    message: &'static str,
    report: &'a SyncReport,
}

#[derive(Serialize, Debug)]
struct FailureResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,
    message: String,
}

const SUCCESS_MESSAGE: &str =
    "Synchronization successful! You can check your page builder's global styles.";

impl SyncArgs {
    /// Execute the sync command
    pub fn execute(&self) -> CliResult<()> {
        let config = StoreArgs::load_config()?;
        let (source, mut kit) = self.stores.open(&config);
        let mut pipeline = SyncPipeline::new(&source, &mut kit);
        let kind = SyncKind::from(self.target);

        if self.dry_run {
            let plan = pipeline.plan(kind).map_err(|e| self.fail(e))?;
            return self.print_plan(&plan);
        }

        let report = pipeline.run(kind).map_err(|e| self.fail(e))?;
        self.print_report(&report)
    }

    /// Prints the failure in JSON mode and converts it to a CLI error.
    fn fail(&self, err: SyncError) -> CliError {
        if self.json {
            let response = FailureResponse {
                status: "fail",
                error_code: err.precondition().map(|failure| failure.code()),
                message: err.to_string(),
            };
            if let Ok(json) = serde_json::to_string_pretty(&response) {
                println!("{json}");
            }
        }
        err.into()
    }

    fn print_plan(&self, plan: &SyncPlan) -> CliResult<()> {
        let json = serde_json::to_string_pretty(plan)
            .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;

        if !self.json {
            println!("Dry run: {} {} entries would be written", plan.entries(), plan.kind);
            println!();
        }
        println!("{json}");
        Ok(())
    }

    fn print_report(&self, report: &SyncReport) -> CliResult<()> {
        if self.json {
            let response = SuccessResponse {
                status: "success",
                message: SUCCESS_MESSAGE,
                report,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if report.written {
            println!("✓ {SUCCESS_MESSAGE}");
            println!();
            println!("Synced {}: {}", report.kind, report.slots.join(", "));
        } else {
            println!("✓ Nothing to synchronize: the style kit has no {} entries", report.kind);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_to_kind() {
        assert_eq!(SyncKind::from(SyncTarget::Colors), SyncKind::Colors);
        assert_eq!(SyncKind::from(SyncTarget::Typography), SyncKind::Typography);
    }
}
