use std::path::PathBuf;
use std::time::Duration;

use anyhow::ensure;
use clap::Parser;

pub const MIN_WIDTH: u16 = 16;
pub const MIN_HEIGHT: u16 = 5;
pub const MIN_TICK_MS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "term-snake", about = "Snake in the terminal")]
pub struct Config {
    /// Playfield width; walls sit on columns 0 and WIDTH
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Playfield height; walls sit on rows 0 and HEIGHT
    #[arg(long, default_value_t = 30)]
    pub height: u16,

    /// Milliseconds between two steps of the snake
    #[arg(long, default_value_t = 125)]
    pub tick_ms: u64,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "term-snake.log")]
    pub log_file: PathBuf,

    /// Log at debug level
    #[arg(long)]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.width >= MIN_WIDTH, "width must be at least {}, got {}", MIN_WIDTH, self.width);
        ensure!(self.height >= MIN_HEIGHT, "height must be at least {}, got {}", MIN_HEIGHT, self.height);
        ensure!(self.width < u16::MAX && self.height < u16::MAX, "playfield does not fit a terminal");
        ensure!(self.tick_ms >= MIN_TICK_MS, "tick must be at least {} ms, got {}", MIN_TICK_MS, self.tick_ms);
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
