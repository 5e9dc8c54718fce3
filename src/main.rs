use std::io;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use arcade_snake::config::{
    GameConfig, DEFAULT_BOARD_EXTENT, DEFAULT_GRID_UNIT, DEFAULT_TICK_INTERVAL_MS,
};
use arcade_snake::game::{GamePhase, GameSession, TickEvent};
use arcade_snake::input::{self, GameInput};
use arcade_snake::renderer;
use arcade_snake::score;
use arcade_snake::terminal_runtime::{self, TerminalSession};

/// Frame pacing for the input/render loop; game ticks run on their own
/// fixed period from the configuration.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(about = "Fixed-tick grid Snake with a persisted high score")]
struct Cli {
    /// Board extent in board units (one axis).
    #[arg(long, default_value_t = DEFAULT_BOARD_EXTENT)]
    board_extent: i32,

    /// Grid unit (cell side); must divide the board extent exactly.
    #[arg(long, default_value_t = DEFAULT_GRID_UNIT)]
    grid_unit: i32,

    /// Tick period in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match GameConfig::new(cli.board_extent, cli.grid_unit, cli.tick_ms) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Load before entering raw mode so a corrupt score file can be reported
    // on a readable screen. An unreadable file is not fatal.
    let high_score = match score::load_high_score() {
        Ok(high_score) => high_score,
        Err(error) => {
            eprintln!("Ignoring unreadable high score file: {error}");
            0
        }
    };

    terminal_runtime::install_panic_hook();

    match run(config, high_score) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: GameConfig, high_score: u32) -> io::Result<()> {
    let mut terminal = TerminalSession::enter()?;
    let mut session = GameSession::new(config.grid, high_score);
    let mut last_tick = Instant::now();

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session))?;

        while let Some(game_input) = input::poll_input()? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::Confirm => {
                    if matches!(session.phase(), GamePhase::Idle | GamePhase::Over) {
                        session.start();
                        // Restart the tick clock; the old cadence must not
                        // fire into the new game.
                        last_tick = Instant::now();
                    }
                }
                GameInput::Heading(heading) => session.request_heading(heading),
            }
        }

        if session.phase() == GamePhase::Running && last_tick.elapsed() >= config.tick_interval {
            if let Some(TickEvent::Ate {
                new_high_score: Some(best),
            }) = session.tick()
            {
                // Best-effort persistence; a failed save never ends the game.
                if let Err(error) = score::save_high_score(best) {
                    eprintln!("Failed to save high score: {error}");
                }
            }
            last_tick = Instant::now();
        }

        thread::sleep(FRAME_SLEEP);
    }
}
