// cell.rs - Decay levels and the per-cell two-phase state machine

/// How far along its fade-out a cell is.
///
/// Only [`DecayLevel::Alive`] takes part in the rules. The three middle
/// levels exist so a dying cell can be drawn fading over several generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DecayLevel {
    #[default]
    Dead = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Alive = 4,
}

impl DecayLevel {
    /// Every level, from `Dead` up to `Alive`.
    pub const ALL: [DecayLevel; 5] = [
        DecayLevel::Dead,
        DecayLevel::Low,
        DecayLevel::Medium,
        DecayLevel::High,
        DecayLevel::Alive,
    ];

    /// One step toward `Dead`. Saturates at `Dead`.
    pub const fn decayed(self) -> Self {
        match self {
            DecayLevel::Alive => DecayLevel::High,
            DecayLevel::High => DecayLevel::Medium,
            DecayLevel::Medium => DecayLevel::Low,
            DecayLevel::Low | DecayLevel::Dead => DecayLevel::Dead,
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, DecayLevel::Alive)
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(DecayLevel::Dead),
            1 => Some(DecayLevel::Low),
            2 => Some(DecayLevel::Medium),
            3 => Some(DecayLevel::High),
            4 => Some(DecayLevel::Alive),
            _ => None,
        }
    }
}

/// A single grid cell: its decay level plus the transition decided for it
/// during the evaluation pass of the current generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    state: DecayLevel,
    pending_kill: bool,
    pending_activate: bool,
}

impl Cell {
    pub const fn new(state: DecayLevel) -> Self {
        Self { state, pending_kill: false, pending_activate: false }
    }

    pub const fn state(&self) -> DecayLevel {
        self.state
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// True while a transition is waiting for [`Cell::commit`].
    pub const fn has_pending(&self) -> bool {
        self.pending_kill || self.pending_activate
    }

    pub fn mark_kill(&mut self) {
        self.pending_kill = true;
    }

    pub fn mark_activate(&mut self) {
        self.pending_activate = true;
    }

    /// Applies the pending transition, if any. Activation wins over a kill.
    pub fn commit(&mut self) {
        if self.pending_activate {
            self.state = DecayLevel::Alive;
            self.pending_activate = false;
            self.pending_kill = false;
        } else if self.pending_kill {
            self.state = self.state.decayed();
            self.pending_kill = false;
        }
    }

    /// Forces the cell fully alive, dropping anything pending.
    pub(crate) fn revive(&mut self) {
        *self = Cell::new(DecayLevel::Alive);
    }

    /// Forces the cell fully dead, dropping anything pending.
    pub(crate) fn reset(&mut self) {
        *self = Cell::new(DecayLevel::Dead);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_saturates_at_dead() {
        let mut level = DecayLevel::Alive;
        let mut seen = vec![level];
        for _ in 0..6 {
            level = level.decayed();
            seen.push(level);
        }
        assert_eq!(
            seen,
            vec![
                DecayLevel::Alive,
                DecayLevel::High,
                DecayLevel::Medium,
                DecayLevel::Low,
                DecayLevel::Dead,
                DecayLevel::Dead,
                DecayLevel::Dead,
            ]
        );
    }

    #[test]
    fn levels_are_ordered_and_round_trip_through_u8() {
        for pair in DecayLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for level in DecayLevel::ALL {
            assert_eq!(DecayLevel::from_u8(level.as_u8()), Some(level));
        }
        assert_eq!(DecayLevel::from_u8(5), None);
    }

    #[test]
    fn only_full_life_counts_as_alive() {
        let alive: Vec<bool> = DecayLevel::ALL.iter().map(|l| l.is_alive()).collect();
        assert_eq!(alive, vec![false, false, false, false, true]);
    }

    #[test]
    fn commit_without_marks_is_a_no_op() {
        let mut cell = Cell::new(DecayLevel::Medium);
        cell.commit();
        assert_eq!(cell, Cell::new(DecayLevel::Medium));
    }

    #[test]
    fn kill_decays_one_level_and_clears_the_flag() {
        let mut cell = Cell::new(DecayLevel::Alive);
        cell.mark_kill();
        cell.mark_kill();
        assert!(cell.has_pending());
        cell.commit();
        assert_eq!(cell.state(), DecayLevel::High);
        assert!(!cell.has_pending());

        cell.commit();
        assert_eq!(cell.state(), DecayLevel::High);
    }

    #[test]
    fn kill_on_dead_cell_stays_dead() {
        let mut cell = Cell::default();
        cell.mark_kill();
        cell.commit();
        assert_eq!(cell.state(), DecayLevel::Dead);
        assert!(!cell.has_pending());
    }

    #[test]
    fn activate_takes_precedence_over_kill() {
        let mut cell = Cell::new(DecayLevel::Low);
        cell.mark_kill();
        cell.mark_activate();
        cell.commit();
        assert_eq!(cell.state(), DecayLevel::Alive);
        assert!(!cell.has_pending());
    }

    #[test]
    fn revive_and_reset_drop_pending_marks() {
        let mut cell = Cell::new(DecayLevel::High);
        cell.mark_kill();
        cell.revive();
        assert_eq!(cell, Cell::new(DecayLevel::Alive));

        cell.mark_activate();
        cell.reset();
        assert_eq!(cell, Cell::default());
    }
}
