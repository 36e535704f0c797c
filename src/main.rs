//! Five-in-a-row GUI
//!
//! Hotseat play for two players on a configurable board.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, GameSession};

/// Play five-in-a-row on a rectangular board.
#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player five-in-a-row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override seconds before a finished round is cleared
    #[arg(long)]
    reset_delay: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(delay) = cli.reset_delay {
        config.reset_delay_secs = delay;
    }
    config.validate().context("invalid configuration")?;

    let session = GameSession::from_config(&config)?;
    info!(width = config.width, height = config.height, "starting game");
    let app = GomokuApp::new(session, Duration::from_secs(config.reset_delay_secs));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Five in a Row"),
        ..Default::default()
    };

    eframe::run_native("Five in a Row", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
