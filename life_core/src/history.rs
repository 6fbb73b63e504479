// history.rs - Repeat detection over recent grid fingerprints

/// How many past fingerprints are remembered.
pub const HISTORY_LEN: usize = 10;

/// Remembers the last [`HISTORY_LEN`] fingerprints and reports when one comes
/// back, which means the grid has settled into a still life or an oscillator
/// with a period of at most `HISTORY_LEN`.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `fingerprint`. Returns true if it was already in the history.
    pub fn observe(&mut self, fingerprint: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.history[..filled].contains(&fingerprint) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = fingerprint;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::patterns;

    #[test]
    fn fresh_detector_does_not_report_zero() {
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(0));
        assert!(detector.observe(0));
    }

    #[test]
    fn forgets_fingerprints_older_than_the_window() {
        let mut detector = CycleDetector::new();
        for fp in 0..=HISTORY_LEN as u64 {
            assert!(!detector.observe(fp));
        }
        // 0 was overwritten by HISTORY_LEN
        assert!(!detector.observe(0));
        assert!(detector.observe(HISTORY_LEN as u64));
    }

    #[test]
    fn reset_forgets_everything() {
        let mut detector = CycleDetector::new();
        detector.observe(5);
        detector.reset();
        assert!(!detector.observe(5));
    }

    #[test]
    fn blinker_repeats_once_its_arms_are_decaying() {
        let mut grid = Grid::new(9, 9).unwrap();
        grid.place_pattern(patterns::find("Blinker").unwrap(), 3, 4);
        let mut detector = CycleDetector::new();
        detector.observe(grid.fingerprint());

        let mut repeated_at = None;
        for _ in 0..12 {
            grid.advance_generation();
            if detector.observe(grid.fingerprint()) {
                repeated_at = Some(grid.generation());
                break;
            }
        }
        // generation 1 and 3 both show a vertical bar with decaying arms
        assert_eq!(repeated_at, Some(3));
    }
}
