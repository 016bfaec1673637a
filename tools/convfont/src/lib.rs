//! Tool for converting bitmap fonts into static [`GlyphTable`] source text.

use core::error;
use std::io::Write;

use anyhow::{Context, Result};
use font::{FontDecoder, GlyphTable};
use log::info;

pub mod cli;

/// Statistics about a successful [`convert`] run.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ConvertSummary {
    /// The face name of the converted font.
    pub face_name: String,
    /// The number of emitted table entries.
    pub entries: usize,
    /// The number of slots skipped because their glyph has zero width.
    pub skipped_empty: usize,
    /// The number of glyphs skipped because their index has no Windows-1252 character.
    pub skipped_unmapped: usize,
}

/// Decodes `font` with `decoder` and writes the [`GlyphTable`] of the font at `font_index` to
/// `writer`.
///
/// Nothing is written unless the whole table could be built.
///
/// # Errors
///
/// Returns [`Err`] if decoding fails, if `font_index` is out of range, if the selected font
/// cannot be packed into a [`GlyphTable`], or if writing fails.
pub fn convert<D, W>(
    decoder: &D,
    font: &[u8],
    font_index: usize,
    writer: W,
) -> Result<ConvertSummary>
where
    D: FontDecoder,
    D::Error: error::Error + Send + Sync + 'static,
    W: Write,
{
    let fonts = decoder.decode(font).context("error decoding font")?;
    let Some(selected) = fonts.get(font_index) else {
        anyhow::bail!(
            "font index {font_index} is out of range: the file holds {} fonts",
            fonts.len()
        );
    };

    let face_name = selected.info().face_name.clone();
    info!(
        "converting font {font_index} \"{face_name}\" ({} px, {} glyphs)",
        selected.info().pixel_height,
        selected.present_count()
    );

    let table = GlyphTable::from_font(selected)
        .with_context(|| format!("error building glyph table for \"{face_name}\""))?;
    table.emit(writer).context("error writing glyph table")?;
    info!(
        "wrote {} entries ({} empty and {} unmapped slots skipped)",
        table.len(),
        table.skipped_empty(),
        table.skipped_unmapped()
    );

    Ok(ConvertSummary {
        face_name,
        entries: table.len(),
        skipped_empty: table.skipped_empty(),
        skipped_unmapped: table.skipped_unmapped(),
    })
}

/// Decodes `font` with `decoder` and writes one line describing each font to `writer`.
///
/// Returns the number of fonts listed.
///
/// # Errors
///
/// Returns [`Err`] if decoding or writing fails.
pub fn list_fonts<D, W>(decoder: &D, font: &[u8], mut writer: W) -> Result<usize>
where
    D: FontDecoder,
    D::Error: error::Error + Send + Sync + 'static,
    W: Write,
{
    let fonts = decoder.decode(font).context("error decoding font")?;
    for (index, decoded) in fonts.iter().enumerate() {
        let info = decoded.info();
        writeln!(
            writer,
            "{index}: \"{}\" {} pt, height {} px, charset {}",
            info.face_name, info.points, info.pixel_height, info.char_set
        )
        .context("error writing font list")?;
    }

    Ok(fonts.len())
}
