use crate::{TermInt, Coords};
use crate::cell::{Cell, Point, EMPTY_CHAR, WALL_CHAR};
use crate::game::Canvas;
use std::convert::TryFrom;
use std::io::{Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read};
use log::warn;

const GAME_OVER_LINES: &[&str] = &["GAME OVER!!!", "", "Press any key to exit"];

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    /// `width` and `height` are the playfield size the messages get centred on.
    pub fn new(width: TermInt, height: TermInt) -> Self {
        TermManager { width, height, stdout: stdout() }
    }

    pub fn terminal_size() -> crossterm::Result<Coords> {
        terminal::size()
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)?;
        execute!(self.stdout, LeaveAlternateScreen)
    }

    pub fn read_key_blocking(&self) -> crossterm::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Draws `lines` centred on the playfield inside a `#` border.
    pub fn show_message(&mut self, lines: &[&str]) -> crossterm::Result<()> {
        let msg = Message::fit(lines, self.width + 1, self.height + 1);

        for y_diff in 0..msg.height {
            for x_diff in 0..msg.width {
                let border = y_diff == 0 || y_diff == msg.height - 1 || x_diff == 0 || x_diff == msg.width - 1;
                let ch = if border { WALL_CHAR } else { EMPTY_CHAR };
                self.print_at((msg.top_left.0 + x_diff, msg.top_left.1 + y_diff), ch)?;
            }
        }

        for (i, line) in msg.lines.iter().enumerate() {
            let y = msg.top_left.1 + i as TermInt + 2;
            for (x_diff, ch) in line.chars().enumerate() {
                self.print_at((msg.top_left.0 + 2 + x_diff as TermInt, y), ch)?;
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: Coords, ch: char) -> crossterm::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }

    pub fn flush(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_cell(&mut self, point: Point, ch: char) {
        let pos = match (TermInt::try_from(point.x), TermInt::try_from(point.y)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return,
        };

        if let Err(err) = self.print_at(pos, ch) {
            warn!("Failed to draw at {:?}: {}", pos, err);
        }
    }
}

/// A bordered box sized to fit inside `cols` x `rows`. Rows that do not fit
/// are dropped and long lines are truncated.
#[derive(Debug, PartialEq)]
struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
    lines: Vec<String>,
}

impl Message {
    fn fit(lines: &[&str], cols: TermInt, rows: TermInt) -> Self {
        let widest = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0);
        let width = ((widest + 4).min(cols as usize)) as TermInt;
        let height = ((lines.len() + 4).min(rows as usize)) as TermInt;
        let text_width = width.saturating_sub(4) as usize;
        let text_rows = height.saturating_sub(4) as usize;

        let lines = lines.iter()
            .take(text_rows)
            .map(|line| {
                let cut: String = line.chars().take(text_width).collect();
                format!("{line: ^width$}", line = cut, width = text_width)
            })
            .collect();

        let top_left = ((cols - width) / 2, (rows - height) / 2);
        Message { top_left, width, height, lines }
    }
}

impl Canvas for TermManager {
    fn draw(&mut self, cell: &Cell) {
        self.print_cell(cell.point(), cell.glyph());
    }

    fn clear(&mut self, cell: &Cell) {
        self.print_cell(cell.point(), EMPTY_CHAR);
    }

    fn game_over(&mut self) {
        if let Err(err) = self.show_message(GAME_OVER_LINES) {
            warn!("Failed to show the game over message: {}", err);
        }
    }

    fn present(&mut self) {
        if let Err(err) = self.flush() {
            warn!("Failed to flush the terminal: {}", err);
        }
    }
}
