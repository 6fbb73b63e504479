//! Conway's Game of Life on a wrap-around grid, with dying cells fading out
//! over several generations instead of switching off at once.
//!
//! ```
//! use life_core::{Grid, DecayLevel, seeded_rng};
//!
//! let mut grid = Grid::new(48, 32)?;
//! grid.reseed(0.2, &mut seeded_rng(Some(7)))?;
//! let stats = grid.advance_generation();
//! assert_eq!(stats.generation, 1);
//! assert!(grid.cell_state_at(0)? <= DecayLevel::Alive);
//! # Ok::<(), life_core::LifeError>(())
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod seeder;
pub mod torus;

pub use cell::{Cell, DecayLevel};
pub use error::{LifeError, Result};
pub use grid::{GenerationStats, Grid};
pub use history::CycleDetector;
pub use patterns::{Pattern, PATTERNS};
pub use seeder::{seeded_rng, Probability, SeedRng, Seeder};
pub use torus::Torus;
