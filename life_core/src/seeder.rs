// seeder.rs - Stochastic, additive seeding of live cells

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A chance in `[0, 1]`, checked once at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    pub const NEVER: Probability = Probability(0.0);
    pub const ALWAYS: Probability = Probability(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LifeError::InvalidProbability(value))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = LifeError;

    fn try_from(value: f64) -> Result<Self> {
        Probability::new(value)
    }
}

/// Generator handed out by [`seeded_rng`].
pub type SeedRng = ChaCha8Rng;

/// Reproducible generator for a fixed seed, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> SeedRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Raises cells to `Alive` at random. Never lowers a cell.
pub struct Seeder;

impl Seeder {
    /// Each cell independently draws `r` in `[0, 1)` and becomes alive when
    /// `r >= 1 - probability`. Returns how many cells were activated,
    /// including ones that were already alive.
    pub fn reseed<R: Rng + ?Sized>(grid: &mut Grid, probability: Probability, rng: &mut R) -> usize {
        let threshold = 1.0 - probability.get();
        let mut activated = 0;
        for cell in grid.cells_mut() {
            if rng.gen_range(0.0..1.0) >= threshold {
                cell.revive();
                activated += 1;
            }
        }
        debug!(probability = probability.get(), activated, "grid reseeded");
        activated
    }
}

impl Grid {
    /// Validates `probability` and runs [`Seeder::reseed`]. An invalid
    /// probability leaves the grid unmodified.
    pub fn reseed<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) -> Result<usize> {
        let probability = Probability::new(probability)?;
        Ok(Seeder::reseed(self, probability, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::DecayLevel;

    #[test]
    fn probability_bounds_are_inclusive() {
        assert_eq!(Probability::new(0.0), Ok(Probability::NEVER));
        assert_eq!(Probability::new(1.0), Ok(Probability::ALWAYS));
        assert_eq!(Probability::new(-0.01), Err(LifeError::InvalidProbability(-0.01)));
        assert!(Probability::new(1.5).is_err());
        assert!(Probability::new(f64::NAN).is_err());
        assert!(Probability::try_from(0.25).is_ok());
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.reseed(0.4, &mut seeded_rng(Some(7))).unwrap();
        b.reseed(0.4, &mut seeded_rng(Some(7))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reseed_is_roughly_proportional() {
        let mut grid = Grid::new(100, 100).unwrap();
        let activated = grid.reseed(0.5, &mut seeded_rng(Some(42))).unwrap();
        assert!(activated > 4000 && activated < 6000, "activated {activated}");
        assert_eq!(grid.live_count(), activated);
    }

    #[test]
    fn reseed_does_not_lower_decaying_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_alive(2, 2).unwrap();
        grid.advance_generation();
        assert_eq!(grid.state_at(2, 2), Ok(DecayLevel::High));

        grid.reseed(0.0, &mut seeded_rng(Some(1))).unwrap();
        assert_eq!(grid.state_at(2, 2), Ok(DecayLevel::High));
    }

    #[test]
    fn invalid_probability_leaves_grid_unmodified() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_alive(1, 2).unwrap();
        let before = grid.clone();
        assert_eq!(
            grid.reseed(1.01, &mut seeded_rng(Some(3))),
            Err(LifeError::InvalidProbability(1.01))
        );
        assert_eq!(grid, before);
    }
}
