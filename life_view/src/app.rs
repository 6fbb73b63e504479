// app.rs - Viewer state and the actions the UI can trigger

use std::time::{Duration, Instant};

use life_core::{
    patterns, seeded_rng, CycleDetector, DecayLevel, GenerationStats, Grid, Probability, SeedRng,
    Seeder,
};
use tracing::info;

use crate::config::Config;

pub struct LifeApp {
    grid: Grid,
    rng: SeedRng,
    detector: CycleDetector,
    probability: Probability,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub cell_size: f32,
    pub selected_pattern: usize,
    pub last_stats: GenerationStats,
    pub cycle_detected: bool,
}

/// Everything the UI may ask of the simulation.
pub trait SimulationControls {
    fn step(&mut self);
    fn reseed(&mut self);
    fn clear(&mut self);
    fn apply_selected_pattern(&mut self);
    fn toggle_cell(&mut self, x: usize, y: usize);
    fn toggle_running(&mut self);
}

impl LifeApp {
    /// Builds the grid from `config` and seeds it once.
    pub fn new(config: &Config) -> life_core::Result<Self> {
        let mut app = Self {
            grid: Grid::new(config.width, config.height)?,
            rng: seeded_rng(config.seed),
            detector: CycleDetector::new(),
            probability: Probability::new(config.probability)?,
            is_running: true,
            last_update: Instant::now(),
            update_interval: config.update_interval(),
            cell_size: config.cell_size.max(2.0),
            selected_pattern: 0,
            last_stats: GenerationStats::default(),
            cycle_detected: false,
        };
        app.reseed();
        Ok(app)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn probability(&self) -> f64 {
        self.probability.get()
    }

    /// Slider input is clamped rather than rejected.
    pub fn set_probability(&mut self, value: f64) {
        if let Ok(p) = Probability::new(value.clamp(0.0, 1.0)) {
            self.probability = p;
        }
    }

    /// `(live, total)` cells.
    pub fn population(&self) -> (usize, usize) {
        (self.grid.live_count(), self.grid.cell_count())
    }

    pub fn level_at(&self, index: usize) -> DecayLevel {
        self.grid.cell_state_at(index).unwrap_or_default()
    }

    /// Runs a generation if running and the interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.step();
        self.last_update = now;
        true
    }

    fn restart_history(&mut self) {
        self.detector.reset();
        self.cycle_detected = false;
        self.last_stats = GenerationStats::default();
    }
}

impl SimulationControls for LifeApp {
    fn step(&mut self) {
        self.last_stats = self.grid.advance_generation();
        if self.detector.observe(self.grid.fingerprint()) {
            self.is_running = false;
            self.cycle_detected = true;
            info!(generation = self.grid.generation(), "cycle detected, pausing");
        }
    }

    fn reseed(&mut self) {
        let activated = Seeder::reseed(&mut self.grid, self.probability, &mut self.rng);
        self.restart_history();
        info!(probability = self.probability.get(), activated, "spawned cells");
    }

    fn clear(&mut self) {
        self.is_running = false;
        self.grid.initialize();
        self.restart_history();
        info!("grid cleared");
    }

    fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        self.is_running = false;
        self.grid.initialize();
        let (x, y) = patterns::centered_origin(&self.grid, pattern);
        self.grid.place_pattern(pattern, x, y);
        self.restart_history();
        info!(pattern = pattern.name, "pattern applied");
    }

    fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.is_running {
            return;
        }
        if self.grid.toggle(x, y).is_ok() {
            self.restart_history();
        }
    }

    fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
            if self.cycle_detected {
                // otherwise the very next step reports the same cycle again
                self.detector.reset();
                self.cycle_detected = false;
            }
        }
        info!(running = self.is_running, "pause toggled");
    }
}
