use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

/// Logs go to a file: the terminal itself is the playfield.
pub fn init(path: &Path, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    Ok(())
}
