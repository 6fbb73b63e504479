// main.rs - Desktop viewer for the decaying Game of Life core

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;     // Simulation state and controls
mod config;  // Command-line options
mod palette; // Decay level colors
mod ui;      // eframe::App implementation

use app::LifeApp;
use config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!(?config, "starting viewer");

    let app = LifeApp::new(&config).context("invalid grid configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Decaying Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("viewer exited with an error: {err}"))
}
