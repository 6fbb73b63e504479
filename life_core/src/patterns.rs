// patterns.rs - Named starting patterns, normalized to a (0, 0) origin

use tracing::debug;

use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],  // (x, y) offsets from the top-left corner
}

impl Pattern {
    /// Bounding box `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // lower half mirrors the upper
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Anchor that puts the pattern's bounding box in the middle of the grid.
pub fn centered_origin(grid: &Grid, pattern: &Pattern) -> (usize, usize) {
    let (width, height) = grid.dimensions();
    let (pw, ph) = pattern.extent();
    (width.saturating_sub(pw) / 2, height.saturating_sub(ph) / 2)
}

impl Grid {
    /// Sets the pattern's cells alive with its top-left corner at `(x, y)`.
    /// Cells falling off an edge wrap around. Other cells are left alone.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        let torus = *self.torus();
        let (x, y) = torus.wrap(x as isize, y as isize);
        for &(dx, dy) in pattern.cells {
            let (cx, cy) = torus.wrap((x + dx) as isize, (y + dy) as isize);
            self.cells_mut()[torus.index(cx, cy)].revive();
        }
        debug!(pattern = pattern.name, x, y, "pattern placed");
    }
}
