use std::collections::VecDeque;

use crate::config::Grid;
use crate::input::Heading;

/// Board position in board units; valid cells are unit-aligned.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns the neighboring cell one grid unit along `heading`.
    #[must_use]
    pub fn offset(self, heading: Heading, unit: i32) -> Self {
        let (dx, dy) = heading.displacement(unit);
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Outcome of advancing the snake by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepResult {
    Moved,
    Ate,
    Collided,
}

/// Ordered body segments (head first) plus the committed heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Heading,
}

impl Snake {
    /// Creates a one-segment snake at `start` with the given heading.
    #[must_use]
    pub fn new(start: Cell, heading: Heading) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, heading }
    }

    /// Creates a snake from explicit segments (front is the head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Heading) -> Self {
        Self {
            body: VecDeque::from(segments),
            heading,
        }
    }

    /// Applies one tick of movement.
    ///
    /// A `pending` heading is committed first unless it reverses the current
    /// heading; reversal requests are silently ignored. The step then either
    /// collides with a wall or the body (leaving the body untouched), eats
    /// the food (growing by one segment), or moves one cell.
    pub fn step(&mut self, pending: Option<Heading>, grid: Grid, food: Cell) -> StepResult {
        if let Some(requested) = pending {
            if requested != self.heading.opposite() {
                self.heading = requested;
            }
        }

        let new_head = self.head().offset(self.heading, grid.unit());
        if !grid.is_in_bounds(new_head) || self.occupies(new_head) {
            return StepResult::Collided;
        }

        self.body.push_front(new_head);
        if new_head == food {
            StepResult::Ate
        } else {
            let _ = self.body.pop_back();
            StepResult::Moved
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment covers `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed heading.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
