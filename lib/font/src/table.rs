//! Construction and emission of the static `phf_map!` glyph table.
//!
//! Every present glyph whose byte index is assigned in Windows-1252 becomes a [`TableEntry`]
//! keyed by the decoded character. Row values are packed into bytes by dropping their rightmost
//! column, which must always be empty.

use core::{error, fmt};
use std::io::{self, Write};

use log::debug;

use crate::{cp1252, glyph::Font};

/// The number of rows every emitted glyph must have.
pub const ROW_COUNT: usize = 9;

/// The line that opens the emitted table.
pub const PREAMBLE: &str = "pub static FONT: phf::Map<u32, (u8, [u8; 9])> = phf::phf_map! {";

/// The line that closes the emitted table.
pub const POSTAMBLE: &str = "};";

/// A single entry of a [`GlyphTable`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TableEntry {
    /// The byte index of the source glyph.
    pub index: u8,
    /// The key of the [`TableEntry`].
    pub code: char,
    /// The unchanged width of the source glyph.
    pub width: u8,
    /// The source rows with the rightmost column dropped.
    pub rows: [u8; ROW_COUNT],
}

impl TableEntry {
    /// Returns the rows as they were before packing.
    pub fn unpack_rows(&self) -> [u32; ROW_COUNT] {
        self.rows.map(|row| u32::from(row) * 2)
    }
}

/// A lookup table from character to packed glyph, built from a [`Font`].
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct GlyphTable {
    /// The entries, in ascending byte index order.
    entries: Vec<TableEntry>,
    /// The number of slots skipped because their glyph has zero width.
    skipped_empty: usize,
    /// The number of present glyphs skipped because Windows-1252 leaves their index unassigned.
    skipped_unmapped: usize,
}

impl GlyphTable {
    /// Builds a [`GlyphTable`] from every slot of `font`.
    ///
    /// # Errors
    ///
    /// Returns [`PackError`] if any kept glyph is wider than 255 columns or if its rows cannot be
    /// packed. No table is produced in that case.
    pub fn from_font(font: &Font) -> Result<Self, PackError> {
        let mut table = Self::default();

        for (index, glyph) in font.glyphs() {
            if !glyph.is_present() {
                debug!("skipping glyph {index:#04X}: zero width");
                table.skipped_empty += 1;
                continue;
            }

            let Some(code) = cp1252::decode_byte(index) else {
                debug!("skipping glyph {index:#04X}: unassigned in Windows-1252");
                table.skipped_unmapped += 1;
                continue;
            };

            let width = u8::try_from(glyph.width).map_err(|_| PackError::WidthOverflow {
                index,
                width: glyph.width,
            })?;
            let rows = pack_rows(&glyph.rows).map_err(|error| PackError::Rows { index, error })?;

            table.entries.push(TableEntry {
                index,
                code,
                width,
                rows,
            });
        }

        Ok(table)
    }

    /// Returns the entries of this [`GlyphTable`] in ascending byte index order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Returns the [`TableEntry`] keyed by `code`, if any.
    pub fn get(&self, code: char) -> Option<&TableEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this [`GlyphTable`] has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of slots skipped because their glyph has zero width.
    pub const fn skipped_empty(&self) -> usize {
        self.skipped_empty
    }

    /// Returns the number of present glyphs skipped because their byte index has no character.
    pub const fn skipped_unmapped(&self) -> usize {
        self.skipped_unmapped
    }

    /// Writes this [`GlyphTable`] to `writer` as a `phf::phf_map!` static.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `writer`.
    pub fn emit<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{PREAMBLE}")?;
        for entry in &self.entries {
            writeln!(
                writer,
                "    {}_u32 => ({}, {:?}),",
                u32::from(entry.code),
                entry.width,
                entry.rows
            )?;
        }
        writeln!(writer, "{POSTAMBLE}")
    }
}

/// Halves every value in `rows`.
///
/// # Errors
///
/// - [`PackRowsError::RowCount`]: `rows` does not hold exactly [`ROW_COUNT`] values.
/// - [`PackRowsError::OddRow`]: a row has its rightmost column set.
/// - [`PackRowsError::RowOverflow`]: a halved row does not fit in a byte.
pub fn pack_rows(rows: &[u32]) -> Result<[u8; ROW_COUNT], PackRowsError> {
    let rows: &[u32; ROW_COUNT] = rows
        .try_into()
        .map_err(|_| PackRowsError::RowCount { actual: rows.len() })?;

    let mut packed = [0; ROW_COUNT];
    for (row, (&value, slot)) in rows.iter().zip(packed.iter_mut()).enumerate() {
        if value % 2 != 0 {
            return Err(PackRowsError::OddRow { row, value });
        }

        *slot = u8::try_from(value / 2).map_err(|_| PackRowsError::RowOverflow { row, value })?;
    }

    Ok(packed)
}

/// Errors that can occur when building a [`GlyphTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackError {
    /// A kept glyph is wider than 255 columns.
    WidthOverflow {
        /// The byte index of the glyph.
        index: u8,
        /// The width of the glyph.
        width: u16,
    },
    /// The rows of a kept glyph could not be packed.
    Rows {
        /// The byte index of the glyph.
        index: u8,
        /// The reason packing failed.
        error: PackRowsError,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthOverflow { index, width } => {
                write!(f, "glyph {index:#04X} is {width} columns wide, more than 255")
            }
            Self::Rows { index, .. } => write!(f, "rows of glyph {index:#04X} cannot be packed"),
        }
    }
}

impl error::Error for PackError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::WidthOverflow { .. } => None,
            Self::Rows { error, .. } => Some(error),
        }
    }
}

/// Errors that can occur when packing the rows of a single glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackRowsError {
    /// The glyph does not have exactly [`ROW_COUNT`] rows.
    RowCount {
        /// The number of rows the glyph has.
        actual: usize,
    },
    /// The rightmost column of a row is set.
    OddRow {
        /// The index of the row.
        row: usize,
        /// The value of the row.
        value: u32,
    },
    /// A row is still wider than a byte after packing.
    RowOverflow {
        /// The index of the row.
        row: usize,
        /// The value of the row.
        value: u32,
    },
}

impl fmt::Display for PackRowsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { actual } => {
                write!(f, "expected {ROW_COUNT} rows but got {actual} rows")
            }
            Self::OddRow { row, value } => write!(
                f,
                "row {row} has its rightmost column set (value {value:#X})"
            ),
            Self::RowOverflow { row, value } => {
                write!(f, "row {row} does not fit in a byte (value {value:#X})")
            }
        }
    }
}

impl error::Error for PackRowsError {}
