//! Converts a Windows bitmap font into a static `phf_map!` glyph table.

use std::{
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};
use convfont::{cli, convert, list_fonts};
use winfnt::WinFntDecoder;

fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );
    let config = cli::get_config();

    let font = fs::read(&config.font_path)
        .with_context(|| format!("error reading \"{}\"", config.font_path.display()))?;

    // Buffered so that a failed conversion leaves no partial output behind.
    let mut buffer = Vec::new();
    if config.list {
        list_fonts(&WinFntDecoder, &font, &mut buffer)?;
    } else {
        convert(&WinFntDecoder, &font, config.font_index, &mut buffer)?;
    }

    match config.output {
        Some(path) => fs::write(&path, buffer)
            .with_context(|| format!("error writing \"{}\"", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(&buffer)
            .context("error writing to standard output")?,
    }

    Ok(())
}
