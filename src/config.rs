use std::time::Duration;

use thiserror::Error;

use crate::snake::Cell;

/// Default board extent in board units (one axis).
pub const DEFAULT_BOARD_EXTENT: i32 = 400;

/// Default grid unit (cell side) in board units.
pub const DEFAULT_GRID_UNIT: i32 = 20;

/// Default tick period in milliseconds (~3.3 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

/// Smallest playable board side, in cells. One cell for the snake plus room
/// for food; anything below cannot seat both.
pub const MIN_CELLS_PER_AXIS: i32 = 2;

/// Configuration problems that are fatal at startup.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid unit must be positive, got {0}")]
    NonPositiveUnit(i32),
    #[error("board extent must be positive, got {0}")]
    NonPositiveExtent(i32),
    #[error("board extent {extent} is not an exact multiple of grid unit {unit}")]
    UnalignedExtent { extent: i32, unit: i32 },
    #[error(
        "board extent {extent} with grid unit {unit} leaves fewer than {min} cells per axis",
        min = MIN_CELLS_PER_AXIS
    )]
    BoardTooSmall { extent: i32, unit: i32 },
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// The discrete coordinate space of the board.
///
/// Coordinates are board units; every valid cell coordinate is a multiple of
/// `unit` in `0..extent`. Construction enforces exact division, so
/// `cells_per_axis` is always whole.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    extent: i32,
    unit: i32,
}

impl Grid {
    /// Validates and builds a grid from a board extent and a cell side.
    pub fn new(extent: i32, unit: i32) -> Result<Self, ConfigError> {
        if unit <= 0 {
            return Err(ConfigError::NonPositiveUnit(unit));
        }
        if extent <= 0 {
            return Err(ConfigError::NonPositiveExtent(extent));
        }
        if extent % unit != 0 {
            return Err(ConfigError::UnalignedExtent { extent, unit });
        }
        if extent / unit < MIN_CELLS_PER_AXIS {
            return Err(ConfigError::BoardTooSmall { extent, unit });
        }

        Ok(Self { extent, unit })
    }

    #[must_use]
    pub fn extent(self) -> i32 {
        self.extent
    }

    #[must_use]
    pub fn unit(self) -> i32 {
        self.unit
    }

    /// Returns the number of cells along one axis.
    #[must_use]
    pub fn cells_per_axis(self) -> i32 {
        self.extent / self.unit
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        let cells = self.cells_per_axis() as usize;
        cells * cells
    }

    /// Returns true when the cell lies inside the board on both axes.
    #[must_use]
    pub fn is_in_bounds(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.extent && cell.y < self.extent
    }

    /// Returns the unit-aligned cell at the board center.
    #[must_use]
    pub fn center_cell(self) -> Cell {
        let center = (self.cells_per_axis() / 2) * self.unit;
        Cell {
            x: center,
            y: center,
        }
    }
}

/// Validated runtime configuration for one process.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid: Grid,
    /// Fixed tick period for the whole game; changing it means restarting.
    pub tick_interval: Duration,
}

impl GameConfig {
    /// Validates raw CLI values into a usable configuration.
    pub fn new(extent: i32, unit: i32, tick_ms: u64) -> Result<Self, ConfigError> {
        if tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Self {
            grid: Grid::new(extent, unit)?,
            tick_interval: Duration::from_millis(tick_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GameConfig, Grid};
    use crate::snake::Cell;

    #[test]
    fn grid_accepts_exactly_divisible_extent() {
        let grid = Grid::new(400, 20).expect("400/20 grid should be valid");

        assert_eq!(grid.cells_per_axis(), 20);
        assert_eq!(grid.total_cells(), 400);
        assert_eq!(grid.center_cell(), Cell { x: 200, y: 200 });
    }

    #[test]
    fn grid_rejects_unaligned_extent() {
        assert_eq!(
            Grid::new(410, 20),
            Err(ConfigError::UnalignedExtent {
                extent: 410,
                unit: 20
            })
        );
    }

    #[test]
    fn grid_rejects_non_positive_dimensions() {
        assert_eq!(Grid::new(400, 0), Err(ConfigError::NonPositiveUnit(0)));
        assert_eq!(
            Grid::new(-400, 20),
            Err(ConfigError::NonPositiveExtent(-400))
        );
    }

    #[test]
    fn bounds_check_covers_all_edges() {
        let grid = Grid::new(400, 20).expect("valid grid");

        assert!(grid.is_in_bounds(Cell { x: 0, y: 0 }));
        assert!(grid.is_in_bounds(Cell { x: 380, y: 380 }));
        assert!(!grid.is_in_bounds(Cell { x: 400, y: 0 }));
        assert!(!grid.is_in_bounds(Cell { x: 0, y: 400 }));
        assert!(!grid.is_in_bounds(Cell { x: -20, y: 0 }));
        assert!(!grid.is_in_bounds(Cell { x: 0, y: -20 }));
    }

    #[test]
    fn grid_rejects_boards_too_small_to_seat_snake_and_food() {
        assert_eq!(
            Grid::new(20, 20),
            Err(ConfigError::BoardTooSmall {
                extent: 20,
                unit: 20
            })
        );
    }

    #[test]
    fn config_rejects_zero_tick_interval() {
        assert_eq!(
            GameConfig::new(400, 20, 0).map(|_| ()),
            Err(ConfigError::ZeroTickInterval)
        );
    }
}
