mod cell;
mod config;
mod food;
mod game;
mod grid;
mod input;
mod logger;
mod session;
mod snake;
mod term;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::{anyhow, ensure};
use clap::Parser;
use log::{info, warn};

use crate::config::Config;
use crate::food::FoodFactory;
use crate::game::SnakeGame;
use crate::grid::Grid;
use crate::session::Outcome;
use crate::term::TermManager;

pub type TermInt = u16;
pub type Coords = (u16, u16);
pub type Coord = i32;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate()?;
    logger::init(&config.log_file, config.verbose)?;

    // Walls take one extra row and column past the playfield size
    let (cols, rows) = TermManager::terminal_size()?;
    ensure!(
        cols > config.width && rows > config.height,
        "terminal is {}x{}, need at least {}x{}",
        cols, rows, config.width + 1, config.height + 1
    );

    let grid = Grid::new(config.width, config.height);
    let food_factory = FoodFactory::new(&grid, config.seed);
    info!("Starting a {}x{} game, seed {}", config.width, config.height, food_factory.seed());

    let mut term = TermManager::new(config.width, config.height);
    let setup = term.setup();
    undo_on_err(setup, || {
        // Setup may have stopped half way, with raw mode or the alternate screen on
        if let Err(err) = term.restore() {
            warn!("Failed to restore the terminal: {}", err);
        }
    })?;

    let mut game = SnakeGame::new(grid, food_factory, term);
    let result = play(&mut game, &config);

    let game_len = game.snake().len();
    let mut term = game.into_canvas();
    let result = result.and_then(|outcome| {
        // Leave the banner up until the player has seen it
        if let Outcome::GameOver(_) = outcome {
            term.read_key_blocking()?;
        }
        Ok(outcome)
    });
    term.restore()?;

    let outcome = result?;
    info!("Session ended: {:?}, length {}", outcome, game_len);
    Ok(())
}

/// Runs `undo` when `result` is an error, then hands `result` back.
fn undo_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

fn play(game: &mut SnakeGame<TermManager>, config: &Config) -> anyhow::Result<Outcome> {
    let stop = Arc::new(AtomicBool::new(false));
    let input = input::spawn(game.steering(), Arc::clone(&stop));

    let outcome = session::run(game, config.tick_interval(), &stop);

    input.join().map_err(|_| anyhow!("input thread panicked"))??;
    Ok(outcome)
}
