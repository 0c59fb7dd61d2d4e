//! Food placement
//!
//! Food lands uniformly at random on an empty cell. Sparse boards use
//! rejection sampling; once the board is mostly occupied every empty cell is
//! enumerated and one is picked by index, which keeps the cost bounded.

use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::{CellState, Grid, Position};

/// Occupied fraction above which placement enumerates empty cells
pub const DENSE_GRID_THRESHOLD: f64 = 0.7;

/// Random draws attempted before falling back to enumeration
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Pick a random empty cell. Returns `None` only when the grid has no empty
/// cell left. The grid itself is not modified.
pub fn place_food<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Position> {
    let total = grid.cell_count();
    if total == 0 {
        return None;
    }

    let occupancy = grid.occupied_count() as f64 / total as f64;
    if occupancy > DENSE_GRID_THRESHOLD {
        return pick_from_empty_cells(grid, rng);
    }

    sample_empty_cell(grid, rng).or_else(|| {
        debug!("rejection sampling missed {MAX_SAMPLE_ATTEMPTS} times, enumerating");
        pick_from_empty_cells(grid, rng)
    })
}

/// Enumerate every empty cell and choose one uniformly
fn pick_from_empty_cells<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Position> {
    grid.empty_cells().choose(rng)
}

/// Draw random coordinates until one lands on an empty cell
fn sample_empty_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Position> {
    (0..MAX_SAMPLE_ATTEMPTS).find_map(|_| {
        let x = rng.gen_range(0..grid.width()) as i32;
        let y = rng.gen_range(0..grid.height()) as i32;
        let pos = Position::new(x, y);
        (grid.state(pos) == CellState::Empty).then_some(pos)
    })
}
