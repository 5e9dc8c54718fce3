use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::Grid;
use crate::game::{GamePhase, GameSession};
use crate::snake::Cell;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const GLYPH_SNAKE: &str = "█";
const GLYPH_FOOD: &str = "●";

/// Renders one full frame from immutable session state.
///
/// Called once per frame; the `Idle` and `Over` phases get their overlay on
/// top of the board.
pub fn render(frame: &mut Frame<'_>, session: &GameSession) {
    let area = frame.area();
    let [score_row, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    render_score_line(frame, score_row, session.score, session.high_score());

    let viewport = grid_viewport(play_area, session.grid());
    let board = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = board.inner(viewport);
    frame.render_widget(board, viewport);

    render_food(frame, inner, session);
    render_snake(frame, inner, session);

    match session.phase() {
        GamePhase::Idle => render_start_menu(frame, play_area, session.high_score()),
        GamePhase::Over => render_game_over_menu(
            frame,
            play_area,
            session.score,
            session.high_score(),
            session.has_new_high_score(),
        ),
        GamePhase::Running => {}
    }
}

fn render_score_line(frame: &mut Frame<'_>, area: Rect, score: u32, high_score: u32) {
    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Score: {score} | High Score: {high_score}"
        ))),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let Some((x, y)) = cell_to_terminal(inner, session.grid(), session.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(FOOD_COLOR));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let head = session.snake.head();

    for segment in session.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, session.grid(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(SNAKE_COLOR)
        };
        frame.buffer_mut().set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Centers the board (grid plus border) inside `area`, clamped to what fits.
fn grid_viewport(area: Rect, grid: Grid) -> Rect {
    let side = u16::try_from(grid.cells_per_axis())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let width = side.min(area.width);
    let height = side.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a board cell to a terminal coordinate inside the board interior.
fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.is_in_bounds(cell) {
        return None;
    }

    let col = u16::try_from(cell.x / grid.unit()).ok()?;
    let row = u16::try_from(cell.y / grid.unit()).ok()?;

    let x = inner.x.saturating_add(col);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
