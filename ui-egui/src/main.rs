// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;
use tictactoe_ui_egui::{ui_config, App, UiConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe board and player views")]
struct Args {
    #[arg(long, help = "Load UI config from this JSON file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Log to stderr at debug level instead of the log file")]
    debug: bool,

    #[arg(long, value_name = "PATH", help = "Write the default config and exit")]
    write_default_config: Option<PathBuf>,
}

fn log_dir() -> Result<PathBuf> {
    let dir = match std::env::consts::OS {
        "macos" => {
            let mut path = PathBuf::from(std::env::var("HOME")?);
            path.push("Library");
            path.push("Logs");
            path.push("tictactoe");
            path
        }
        _ => PathBuf::from(".").join("logs"),
    };
    Ok(dir)
}

/// Start logging. The returned handle must stay alive for file logging.
fn init_logging(debug: bool) -> Result<Option<LoggerHandle>> {
    if debug {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {}", e))?;
        return Ok(None);
    }

    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    // tracing events reach this logger through tracing's `log` feature
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename("tictactoe")
                .suffix("log"),
        )
        .rotate(
            Criterion::Size(10 * 1024 * 1024),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;

    Ok(Some(handle))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _logger = match init_logging(args.debug) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    if let Some(path) = &args.write_default_config {
        UiConfig::default().save_to_file(path)?;
        tracing::info!(path = %path.display(), "Wrote default config");
        return Ok(());
    }

    let config = ui_config::resolve_config(args.config.as_deref())?;
    tracing::info!(title = %config.window.title, "Starting UI");

    let viewport = egui::ViewportBuilder::default()
        .with_title(config.window.title.clone())
        .with_inner_size(config.window.initial_size)
        .with_min_inner_size(config.window.min_size);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(App::new(config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))
}
