use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};

use crate::snake::Direction::{self, *};

// How long a read waits before looking at the stop flag again
const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Reads keys on its own thread until `stop` is raised, forwarding turns to
/// `steering`. The thread raises `stop` itself when it leaves, whether from a
/// quit key or a failed read, so the session never ticks on without input.
pub fn spawn(steering: Sender<Direction>, stop: Arc<AtomicBool>) -> JoinHandle<crossterm::Result<()>> {
    thread::spawn(move || read_until_stopped(next_event, &steering, &stop))
}

fn read_until_stopped<F>(next_event: F, steering: &Sender<Direction>, stop: &AtomicBool) -> crossterm::Result<()>
where
    F: FnMut() -> crossterm::Result<Option<Event>>,
{
    let res = read_keys(next_event, steering, stop);
    if let Err(err) = &res {
        warn!("Reading input failed: {}", err);
    }

    stop.store(true, Ordering::SeqCst);
    res
}

fn next_event() -> crossterm::Result<Option<Event>> {
    if event::poll(POLL_INTERVAL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn read_keys<F>(mut next_event: F, steering: &Sender<Direction>, stop: &AtomicBool) -> crossterm::Result<()>
where
    F: FnMut() -> crossterm::Result<Option<Event>>,
{
    while !stop.load(Ordering::SeqCst) {
        let key_ev = match next_event()? {
            Some(Event::Key(ev)) => ev,
            _ => continue,
        };

        match command_for(&key_ev) {
            Some(Command::Turn(dir)) => {
                // The game is gone once the receiver hangs up
                if steering.send(dir).is_err() {
                    break;
                }
            },
            Some(Command::Quit) => {
                debug!("Quit requested");
                stop.store(true, Ordering::SeqCst);
            },
            None => {},
        }
    }

    Ok(())
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::io;
    use std::sync::mpsc::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    /// Replays `events`, then fails like a terminal that went away.
    fn scripted(events: Vec<Event>) -> impl FnMut() -> crossterm::Result<Option<Event>> {
        let mut events: VecDeque<Event> = events.into();
        move || match events.pop_front() {
            Some(ev) => Ok(Some(ev)),
            None => Err(crossterm::ErrorKind::IoError(io::Error::new(io::ErrorKind::Other, "tty gone"))),
        }
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::Turn(Up)));
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Some(Command::Turn(Left)));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::Turn(Down)));
        assert_eq!(command_for(&key(KeyCode::Char('d'))), Some(Command::Turn(Right)));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for(&KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(command_for(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn turns_are_forwarded_until_quit() {
        let (tx, rx) = channel();
        let stop = AtomicBool::new(false);
        let events = vec![Event::Key(key(KeyCode::Up)), Event::Key(key(KeyCode::Enter)), Event::Key(key(KeyCode::Char('a'))), Event::Key(key(KeyCode::Esc))];

        assert!(read_keys(scripted(events), &tx, &stop).is_ok());
        assert!(stop.load(Ordering::SeqCst));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Up, Left]);
    }

    #[test]
    fn failed_read_stops_the_session() {
        let (tx, rx) = channel();
        let stop = AtomicBool::new(false);

        let res = read_until_stopped(scripted(vec![Event::Key(key(KeyCode::Down))]), &tx, &stop);

        assert!(res.is_err());
        assert!(stop.load(Ordering::SeqCst));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Down]);
    }

    #[test]
    fn hung_up_game_stops_reading() {
        let (tx, rx) = channel();
        drop(rx);
        let stop = AtomicBool::new(false);

        let res = read_until_stopped(scripted(vec![Event::Key(key(KeyCode::Up))]), &tx, &stop);

        assert!(res.is_ok());
        assert!(stop.load(Ordering::SeqCst));
    }
}
