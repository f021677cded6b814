//! vlist - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vlist::config::{CliOverrides, ListMode, ResolvedConfig};
use vlist::error::AppError;

/// vlist - scroll a very long list while only rendering what is on screen
#[derive(Parser, Debug)]
#[command(name = "vlist")]
#[command(version)]
#[command(about = "Virtualized list viewer: fixed or measured item heights")]
pub struct Args {
    /// Height model: "fixed" or "dynamic"
    #[arg(short, long)]
    pub mode: Option<ListMode>,

    /// Number of generated items
    #[arg(short = 'n', long = "items")]
    pub items: Option<usize>,

    /// Rows per item in fixed mode
    #[arg(long)]
    pub item_height: Option<f64>,

    /// Rows assumed for unmeasured items in dynamic mode
    #[arg(long)]
    pub estimated_height: Option<f64>,

    /// Items rendered beyond each edge of the viewport
    #[arg(short, long)]
    pub overscan: Option<usize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            mode: self.mode,
            item_count: self.items,
            item_height: self.item_height,
            estimated_height: self.estimated_height,
            overscan: self.overscan,
        }
    }
}

/// Defaults → Config File → Env Vars → CLI Args, then validated.
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = vlist::config::load_config_with_precedence(args.config.clone())?;
    let merged = vlist::config::merge_config(config_file);
    let with_env = vlist::config::apply_env_overrides(merged);
    let config = vlist::config::apply_cli_overrides(with_env, args.overrides());
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    vlist::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    vlist::view::run_with_config(&config)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
