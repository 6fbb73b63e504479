// torus.rs - Toroidal coordinate resolution

use crate::error::{LifeError, Result};

/// Neighbor offsets in resolution order:
/// up-left, up, up-right, left, right, down-left, down, down-right.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Shape of a `width x height` wrap-around grid stored row-major.
///
/// Holds no cells. It only converts between linear indices and coordinates
/// and resolves neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Torus {
    width: usize,
    height: usize,
}

impl Torus {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = LifeError::InvalidDimension { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        // rem_euclid in `wrap` works on isize
        let len = width.checked_mul(height).ok_or(invalid)?;
        if isize::try_from(len).is_err() {
            return Err(invalid);
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Linear index to `(x, y)`.
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.len());
        (index % self.width, index / self.width)
    }

    /// `(x, y)` to linear index. Coordinates must already be in range.
    pub const fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        x + y * self.width
    }

    /// Checked `(x, y)` to linear index.
    pub fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(self.index(x, y))
        } else {
            Err(LifeError::IndexOutOfRange {
                index: x.saturating_add(y.saturating_mul(self.width)),
                len: self.len(),
            })
        }
    }

    /// Folds any signed coordinate back onto the torus.
    pub fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    /// The eight neighbor indices of `index`, in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// On a grid one cell wide or tall some entries repeat, and may be
    /// `index` itself.
    pub fn neighbors(&self, index: usize) -> [usize; 8] {
        let (x, y) = self.coords(index);
        let (x, y) = (x as isize, y as isize);
        NEIGHBOR_OFFSETS.map(|(dx, dy)| {
            let (nx, ny) = self.wrap(x + dx, y + dy);
            self.index(nx, ny)
        })
    }
}
