// config.rs - Command-line configuration for the viewer

use std::time::Duration;

use clap::Parser;

/// Decaying Game of Life on a wrap-around grid.
#[derive(Debug, Clone, Parser)]
#[command(name = "life_view", version, about)]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = 48)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 32)]
    pub height: usize,

    /// Chance for each cell to be switched on by a reseed, in [0, 1]
    #[arg(long, default_value_t = 0.2)]
    pub probability: f64,

    /// Seed for reproducible runs; OS entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 50)]
    pub interval_ms: u64,

    /// Side of a drawn cell in points
    #[arg(long, default_value_t = 12.0)]
    pub cell_size: f32,
}

impl Config {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    /// Window big enough for the grid plus the control rows.
    pub fn window_size(&self) -> [f32; 2] {
        let side = self.cell_size.max(2.0);
        [
            (self.width as f32 * side + 32.0).max(640.0),
            self.height as f32 * side + 200.0,
        ]
    }
}
