use rand::Rng;

use crate::config::Grid;
use crate::snake::{Cell, Snake};

/// Random placement attempts before falling back to a deterministic scan.
const MAX_SAMPLE_ATTEMPTS: u32 = 1024;

/// Picks an unoccupied, unit-aligned cell for the next food.
///
/// Samples uniformly over all grid cells until a free one turns up, then
/// falls back to a row-major scan so the call terminates even on a nearly
/// full board.
pub fn place<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Cell {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let cell = random_cell(rng, grid);
        if !snake.occupies(cell) {
            return cell;
        }
    }

    first_free_cell(grid, snake)
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Cell {
    let cells = grid.cells_per_axis();
    Cell {
        x: rng.gen_range(0..cells) * grid.unit(),
        y: rng.gen_range(0..cells) * grid.unit(),
    }
}

fn first_free_cell(grid: Grid, snake: &Snake) -> Cell {
    for row in 0..grid.cells_per_axis() {
        for col in 0..grid.cells_per_axis() {
            let cell = Cell {
                x: col * grid.unit(),
                y: row * grid.unit(),
            };
            if !snake.occupies(cell) {
                return cell;
            }
        }
    }

    panic!(
        "place: no free cells on a {0}x{0} board",
        grid.cells_per_axis()
    );
}
