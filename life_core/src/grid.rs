// grid.rs - Cell storage and two-phase generation update

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::cell::{Cell, DecayLevel};
use crate::error::{LifeError, Result};
use crate::torus::Torus;

/// What a single generation did, for display and logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Generation number after the update.
    pub generation: u64,
    /// Cells that became fully alive.
    pub births: usize,
    /// Alive cells that started to decay.
    pub deaths: usize,
}

/// Fixed-size wrap-around grid of decaying cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    torus: Torus,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// All cells start `Dead`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let torus = Torus::new(width, height)?;
        debug!(width, height, "grid created");
        Ok(Self {
            torus,
            cells: vec![Cell::default(); torus.len()],
            generation: 0,
        })
    }

    /// Resets every cell to `Dead` and the generation counter to zero.
    pub fn initialize(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
        self.generation = 0;
        debug!(width = self.torus.width(), height = self.torus.height(), "grid initialized");
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.torus.width(), self.torus.height())
    }

    pub const fn torus(&self) -> &Torus {
        &self.torus
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Generations advanced since construction or the last [`Grid::initialize`].
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_state_at(&self, index: usize) -> Result<DecayLevel> {
        self.cells
            .get(index)
            .map(Cell::state)
            .ok_or(LifeError::IndexOutOfRange { index, len: self.cells.len() })
    }

    pub fn state_at(&self, x: usize, y: usize) -> Result<DecayLevel> {
        let index = self.torus.checked_index(x, y)?;
        Ok(self.cells[index].state())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Makes the cell at `(x, y)` fully alive.
    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.torus.checked_index(x, y)?;
        self.cells[index].revive();
        Ok(())
    }

    /// Alive cells become dead, anything else becomes alive. Returns the new level.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<DecayLevel> {
        let index = self.torus.checked_index(x, y)?;
        let cell = &mut self.cells[index];
        if cell.is_alive() {
            cell.reset();
        } else {
            cell.revive();
        }
        Ok(cell.state())
    }

    /// Hash of every decay level, row-major.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.torus.hash(&mut hasher);
        for cell in &self.cells {
            cell.state().hash(&mut hasher);
        }
        hasher.finish()
    }

    fn live_neighbors(&self, index: usize) -> usize {
        self.torus
            .neighbors(index)
            .iter()
            .filter(|&&n| self.cells[n].is_alive())
            .count()
    }

    /// Advances the automaton by one generation.
    ///
    /// Every cell's transition is decided from the previous generation before
    /// any cell is committed.
    pub fn advance_generation(&mut self) -> GenerationStats {
        let mut stats = GenerationStats::default();

        // evaluation: read states, write marks only
        for index in 0..self.cells.len() {
            let live = self.live_neighbors(index);
            let cell = &mut self.cells[index];
            match (cell.is_alive(), live) {
                (true, 2) | (true, 3) => {}
                (_, n) if n != 3 => {
                    if cell.is_alive() {
                        stats.deaths += 1;
                    }
                    cell.mark_kill();
                }
                _ => {
                    stats.births += 1;
                    cell.mark_activate();
                }
            }
        }

        // commit
        self.cells.iter_mut().for_each(Cell::commit);

        self.generation += 1;
        stats.generation = self.generation;
        trace!(generation = stats.generation, births = stats.births, deaths = stats.deaths, "generation advanced");
        stats
    }
}
