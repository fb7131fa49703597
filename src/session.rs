use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::game::{Canvas, DeathReason, SnakeGame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    GameOver(DeathReason),
    Quit,
}

/// Ticks `game` every `interval` until it ends or `stop` is raised. Ticks
/// follow a fixed schedule; a slow tick shortens the next wait rather than
/// shifting every later one. `stop` is raised on the way out either way.
pub fn run<C: Canvas>(game: &mut SnakeGame<C>, interval: Duration, stop: &AtomicBool) -> Outcome {
    let mut deadline = Instant::now();

    let outcome = loop {
        if stop.load(Ordering::SeqCst) {
            break Outcome::Quit;
        }

        game.tick();

        if !game.is_alive() {
            if let Some(reason) = game.death() {
                break Outcome::GameOver(reason);
            }
        }

        deadline += interval;
        let now = Instant::now();
        if deadline > now {
            sleep(deadline - now);
        } else {
            deadline = now;
        }
    };

    stop.store(true, Ordering::SeqCst);
    outcome
}
