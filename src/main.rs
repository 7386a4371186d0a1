//! KitSync - copies theme colors and typography into a page builder style kit
//!
//! Reads the theme's global settings, maps them onto the kit's fixed system
//! colors and typography presets, and writes the result back in one shot.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kitsync::cli::{ConfigArgs, CssArgs, DoctorArgs, SyncArgs};

/// KitSync - theme to page builder style synchronization
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy theme colors or typography into the style kit
    Sync(SyncArgs),
    /// Print the runtime decoration CSS for the style kit
    Css(CssArgs),
    /// Check that a sync could run
    Doctor(DoctorArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Sync(args) => args.execute(),
        Command::Css(args) => args.execute(),
        Command::Doctor(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
