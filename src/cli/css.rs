//! CSS command: prints the runtime stylesheet derived from the kit typography.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::common::{CliError, CliResult, StoreArgs};
use crate::services::JsonKitStore;
use crate::sync::css::{render_kit_css, wrap_style_tag};
use crate::sync::StyleKitPort;

/// Print the body/heading decoration CSS for the active style kit
#[derive(Debug, Clone, Args)]
pub struct CssArgs {
    /// Style kit JSON file
    #[arg(long, value_name = "FILE")]
    pub kit: Option<PathBuf>,

    /// Wrap the CSS in a <style> element
    #[arg(long)]
    pub style_tag: bool,

    /// `id` attribute of the <style> element (overrides config)
    #[arg(long, value_name = "ID", requires = "style_tag")]
    pub style_tag_id: Option<String>,
}

impl CssArgs {
    /// Execute the css command
    ///
    /// Prints nothing when there is no kit or the kit has no typography.
    pub fn execute(&self) -> CliResult<()> {
        let config = StoreArgs::load_config()?;
        let path = self.kit.clone().or_else(|| config.paths.style_kit.clone());
        let store = JsonKitStore::new(path, None);

        if !store.is_active() {
            debug!("page builder not configured; no CSS emitted");
            return Ok(());
        }

        let kit = store
            .read_kit()
            .map_err(|e| CliError::io(format!("Failed to read style kit: {e:#}")))?;

        let Some(css) = kit.as_ref().and_then(render_kit_css) else {
            debug!("no kit typography; no CSS emitted");
            return Ok(());
        };

        if self.style_tag {
            let id = self
                .style_tag_id
                .as_deref()
                .unwrap_or(&config.sync.style_tag_id);
            print!("{}", wrap_style_tag(&css, id));
        } else {
            print!("{css}");
        }

        Ok(())
    }
}
