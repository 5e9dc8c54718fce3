use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Grid;
use crate::food;
use crate::input::Heading;
use crate::snake::{Cell, Snake, StepResult};

/// Lifecycle phase of a session.
///
/// `Idle` exists only before the first game; a finished game restarts
/// straight from `Over` back into `Running`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Idle,
    Running,
    Over,
}

/// Event emitted by one tick, consumed by the render/persistence driver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    Moved,
    /// Food was eaten; carries the raised high score when one was set.
    Ate { new_high_score: Option<u32> },
    GameOver,
}

/// One game session: exclusive owner of the snake, food, score, and pending
/// heading. Nothing outside the session mutates this state.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    high_score: u32,
    reached_new_high: bool,
    pending_heading: Option<Heading>,
    phase: GamePhase,
    grid: Grid,
    rng: StdRng,
}

impl GameSession {
    /// Creates an idle session showing the initial board.
    #[must_use]
    pub fn new(grid: Grid, high_score: u32) -> Self {
        Self::with_rng(grid, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: Grid, high_score: u32, seed: u64) -> Self {
        Self::with_rng(grid, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, high_score: u32, mut rng: StdRng) -> Self {
        let snake = Snake::new(grid.center_cell(), Heading::Right);
        let food = food::place(&mut rng, grid, &snake);

        Self {
            snake,
            food,
            score: 0,
            high_score,
            reached_new_high: false,
            pending_heading: None,
            phase: GamePhase::Idle,
            grid,
            rng,
        }
    }

    /// Starts a fresh game, from `Idle` and from `Over` alike. All prior
    /// snake, food, score, and pending-heading state is discarded.
    pub fn start(&mut self) {
        self.snake = Snake::new(self.grid.center_cell(), Heading::Right);
        self.food = food::place(&mut self.rng, self.grid, &self.snake);
        self.score = 0;
        self.reached_new_high = false;
        self.pending_heading = None;
        self.phase = GamePhase::Running;
    }

    /// Records a heading request. Ignored outside `Running`; the latest
    /// request between two ticks wins and is consumed by the next tick.
    pub fn request_heading(&mut self, heading: Heading) {
        if self.phase == GamePhase::Running {
            self.pending_heading = Some(heading);
        }
    }

    /// Advances the session by one tick. Returns `None` outside `Running`.
    pub fn tick(&mut self) -> Option<TickEvent> {
        if self.phase != GamePhase::Running {
            return None;
        }

        let pending = self.pending_heading.take();
        match self.snake.step(pending, self.grid, self.food) {
            StepResult::Collided => {
                self.phase = GamePhase::Over;
                Some(TickEvent::GameOver)
            }
            StepResult::Ate => {
                self.score += 1;
                let new_high_score = if self.score > self.high_score {
                    self.high_score = self.score;
                    self.reached_new_high = true;
                    Some(self.high_score)
                } else {
                    None
                };
                if self.snake.len() == self.grid.total_cells() {
                    // The snake covers the whole board; there is no cell
                    // left for food and the game ends here.
                    self.phase = GamePhase::Over;
                } else {
                    self.food = food::place(&mut self.rng, self.grid, &self.snake);
                }
                Some(TickEvent::Ate { new_high_score })
            }
            StepResult::Moved => Some(TickEvent::Moved),
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Returns true when this game beat the high score it started with.
    #[must_use]
    pub fn has_new_high_score(&self) -> bool {
        self.reached_new_high
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Grid;
    use crate::input::Heading;
    use crate::snake::{Cell, Snake};

    use super::{GamePhase, GameSession, TickEvent};

    fn grid_400_by_20() -> Grid {
        Grid::new(400, 20).expect("400/20 grid should be valid")
    }

    fn running_session(high_score: u32) -> GameSession {
        let mut session = GameSession::new_with_seed(grid_400_by_20(), high_score, 1);
        session.start();
        session
    }

    #[test]
    fn new_session_is_idle_until_started() {
        let mut session = GameSession::new_with_seed(grid_400_by_20(), 0, 1);

        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.tick(), None);

        session.start();
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn session_starts_centered_with_score_zero() {
        let session = running_session(0);

        assert_eq!(session.snake.head(), Cell { x: 200, y: 200 });
        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.score, 0);
        assert!(!session.snake.occupies(session.food));
    }

    #[test]
    fn eating_raises_score_and_high_score() {
        let mut session = running_session(0);
        session.snake = Snake::new(Cell { x: 100, y: 100 }, Heading::Right);
        session.food = Cell { x: 120, y: 100 };

        let event = session.tick();

        assert_eq!(
            event,
            Some(TickEvent::Ate {
                new_high_score: Some(1)
            })
        );
        assert_eq!(session.score, 1);
        assert_eq!(session.high_score(), 1);
        assert!(session.has_new_high_score());
        assert!(!session.snake.occupies(session.food));
    }

    #[test]
    fn matching_the_high_score_does_not_report_a_new_one() {
        let mut session = running_session(1);
        session.snake = Snake::new(Cell { x: 100, y: 100 }, Heading::Right);
        session.food = Cell { x: 120, y: 100 };

        let event = session.tick();

        assert_eq!(
            event,
            Some(TickEvent::Ate {
                new_high_score: None
            })
        );
        assert_eq!(session.high_score(), 1);
        assert!(!session.has_new_high_score());
    }

    #[test]
    fn wall_collision_ends_the_game() {
        let mut session = running_session(0);
        session.snake = Snake::new(Cell { x: 380, y: 160 }, Heading::Right);

        let event = session.tick();

        assert_eq!(event, Some(TickEvent::GameOver));
        assert_eq!(session.phase(), GamePhase::Over);
        // Over is terminal until restart; ticks no longer mutate anything.
        assert_eq!(session.tick(), None);
        assert_eq!(session.snake.head(), Cell { x: 380, y: 160 });
    }

    #[test]
    fn heading_requests_are_ignored_outside_running() {
        let mut session = GameSession::new_with_seed(grid_400_by_20(), 0, 2);
        session.request_heading(Heading::Up);
        session.start();
        session.food = Cell { x: 0, y: 380 };

        // The pre-start request must not have survived into the new game.
        session.tick();
        assert_eq!(session.snake.head(), Cell { x: 220, y: 200 });
    }

    #[test]
    fn latest_heading_request_wins() {
        let mut session = running_session(0);
        session.snake = Snake::new(Cell { x: 200, y: 200 }, Heading::Right);
        session.food = Cell { x: 0, y: 380 };

        session.request_heading(Heading::Up);
        session.request_heading(Heading::Down);
        session.tick();

        assert_eq!(session.snake.head(), Cell { x: 200, y: 220 });
    }

    #[test]
    fn reversal_in_the_pending_slot_moves_straight() {
        // The slot is last-write-wins even for an invalid request; the
        // reversal is then rejected when the step consumes it.
        let mut session = running_session(0);
        session.snake = Snake::new(Cell { x: 200, y: 200 }, Heading::Right);
        session.food = Cell { x: 0, y: 380 };

        session.request_heading(Heading::Up);
        session.request_heading(Heading::Left);
        session.tick();

        assert_eq!(session.snake.head(), Cell { x: 220, y: 200 });
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        // 2x2 board: cells (0,0), (20,0), (0,20), (20,20).
        let grid = Grid::new(40, 20).expect("valid grid");
        let mut session = GameSession::new_with_seed(grid, 0, 3);
        session.start();

        session.snake = Snake::new(Cell { x: 0, y: 0 }, Heading::Right);
        session.food = Cell { x: 20, y: 0 };

        assert_eq!(
            session.tick(),
            Some(TickEvent::Ate {
                new_high_score: Some(1)
            })
        );

        session.food = Cell { x: 20, y: 20 };
        session.request_heading(Heading::Down);
        assert_eq!(
            session.tick(),
            Some(TickEvent::Ate {
                new_high_score: Some(2)
            })
        );
        // (0,20) is the one free cell left, so the food must be there.
        assert_eq!(session.food, Cell { x: 0, y: 20 });

        session.request_heading(Heading::Left);
        let event = session.tick();

        // The last free cell was eaten; the session ends instead of trying
        // to place food on a full board.
        assert_eq!(
            event,
            Some(TickEvent::Ate {
                new_high_score: Some(3)
            })
        );
        assert_eq!(session.snake.len(), grid.total_cells());
        assert_eq!(session.phase(), GamePhase::Over);
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn restart_discards_all_prior_game_state() {
        let mut session = running_session(5);
        session.snake = Snake::from_segments(
            vec![
                Cell { x: 380, y: 160 },
                Cell { x: 360, y: 160 },
                Cell { x: 340, y: 160 },
            ],
            Heading::Right,
        );
        session.score = 7;

        session.tick();
        assert_eq!(session.phase(), GamePhase::Over);

        session.start();

        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.snake.head(), Cell { x: 200, y: 200 });
        // The high score outlives the restart.
        assert_eq!(session.high_score(), 5);
        assert!(!session.has_new_high_score());
    }
}
