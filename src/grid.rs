use std::collections::HashSet;
use std::fmt;

use rand::Rng;

use crate::config::GridSize;
use crate::input::Direction;

/// Rejection-sampling attempts before switching to enumerating free cells.
const MAX_SAMPLE_ATTEMPTS: usize = 32;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that a head stepped past the edge is still
/// representable for the boundary check.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside `[0, cols) x [0, rows)`.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.cols)
            && self.y < i32::from(bounds.rows)
    }

    /// Returns the neighbouring cell in `direction`. No wrapping.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Size of one cell in presentation units.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Tile {
    pub width: u16,
    pub height: u16,
}

impl Tile {
    #[must_use]
    pub const fn square(size: u16) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Maps a cell to the centre of its tile in presentation coordinates.
#[must_use]
pub fn cell_center(cell: Cell, tile: Tile) -> (i32, i32) {
    let width = i32::from(tile.width);
    let height = i32::from(tile.height);
    (cell.x * width + width / 2, cell.y * height + height / 2)
}

/// Picks a uniformly random in-bounds cell that is not in `occupied`.
///
/// Samples at random while the grid is mostly free, then enumerates the
/// complement so the call always terminates. Returns `None` on a full grid.
#[must_use]
pub fn random_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    let total = bounds.total_cells();
    let taken = occupied
        .iter()
        .filter(|cell| cell.is_within_bounds(bounds))
        .count();
    let free = total.saturating_sub(taken);
    if free == 0 {
        return None;
    }

    if free * 2 >= total {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = Cell {
                x: rng.gen_range(0..i32::from(bounds.cols)),
                y: rng.gen_range(0..i32::from(bounds.rows)),
            };
            if !occupied.contains(&candidate) {
                return Some(candidate);
            }
        }
        log::warn!("free-cell sampling exhausted {MAX_SAMPLE_ATTEMPTS} attempts, enumerating");
    }

    let candidates: Vec<Cell> = (0..i32::from(bounds.rows))
        .flat_map(|y| (0..i32::from(bounds.cols)).map(move |x| Cell { x, y }))
        .filter(|cell| !occupied.contains(cell))
        .collect();

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
