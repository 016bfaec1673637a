//! Parsing of individual FNT font resources.
//!
//! Only raster fonts in the 2.0 and 3.0 layouts are supported. Both layouts share the same
//! 118-byte header prefix and differ in the width of the glyph offsets in the character table.

use font::{Font, FontInfo, Glyph, cp1252};
use log::debug;

use crate::{
    bytes::{read_u8, read_u16, read_u32, slice, u32_to_usize},
    error::WinFntError,
};

/// The 2.0 layout, with 16-bit glyph offsets.
const VERSION_2: u16 = 0x0200;
/// The 3.0 layout, with 32-bit glyph offsets.
const VERSION_3: u16 = 0x0300;

/// Offset of the fixed-size copyright field.
const COPYRIGHT: usize = 6;
/// Size of the copyright field.
const COPYRIGHT_LENGTH: usize = 60;
/// Offset of the font type flags.
const TYPE: usize = 66;
/// Offset of the nominal point size.
const POINTS: usize = 68;
/// Offset of the ascent.
const ASCENT: usize = 74;
/// Offset of the italic flag.
const ITALIC: usize = 80;
/// Offset of the weight.
const WEIGHT: usize = 83;
/// Offset of the character set.
const CHAR_SET: usize = 85;
/// Offset of the pixel height shared by every glyph.
const PIXEL_HEIGHT: usize = 88;
/// Offset of the first byte index in the character table.
const FIRST_CHAR: usize = 95;
/// Offset of the last byte index in the character table.
const LAST_CHAR: usize = 96;
/// Offset of the face name offset.
const FACE: usize = 105;

/// Start of the character table in the 2.0 layout.
const CHAR_TABLE_V2: usize = 118;
/// Start of the character table in the 3.0 layout.
const CHAR_TABLE_V3: usize = 148;

/// Set in the type field for vector fonts.
const TYPE_VECTOR: u16 = 0x0001;

/// Glyph rows are stored in a `u32`.
const MAX_GLYPH_WIDTH: u16 = 32;

/// Parses `bytes` as a single FNT resource.
///
/// # Errors
///
/// - [`WinFntError::UnsupportedVersion`]: the resource is not a 2.0 or 3.0 font.
/// - [`WinFntError::VectorFont`]: the resource describes a vector font.
/// - [`WinFntError::GlyphTooWide`]: a glyph does not fit in a `u32` row.
/// - [`WinFntError::Truncated`]: a header field, table entry or bitmap lies outside `bytes`.
pub fn parse_fnt(bytes: &[u8]) -> Result<Font, WinFntError> {
    let version = read_u16(bytes, 0)?;
    let (char_table, entry_size) = match version {
        VERSION_2 => (CHAR_TABLE_V2, 4),
        VERSION_3 => (CHAR_TABLE_V3, 6),
        _ => return Err(WinFntError::UnsupportedVersion(version)),
    };

    if read_u16(bytes, TYPE)? & TYPE_VECTOR == TYPE_VECTOR {
        return Err(WinFntError::VectorFont);
    }

    let info = FontInfo {
        face_name: read_face_name(bytes)?,
        copyright: read_copyright(bytes)?,
        points: read_u16(bytes, POINTS)?,
        pixel_height: read_u16(bytes, PIXEL_HEIGHT)?,
        ascent: read_u16(bytes, ASCENT)?,
        char_set: read_u8(bytes, CHAR_SET)?,
        weight: read_u16(bytes, WEIGHT)?,
        italic: read_u8(bytes, ITALIC)? != 0,
    };
    let height = usize::from(info.pixel_height);
    let first_char = read_u8(bytes, FIRST_CHAR)?;
    let last_char = read_u8(bytes, LAST_CHAR)?;
    debug!(
        "parsing FNT {}.{} \"{}\": {} px, chars {first_char:#04X}..={last_char:#04X}",
        version >> 8,
        version & 0xFF,
        info.face_name,
        info.pixel_height
    );

    let mut font = Font::new(info);
    for (position, index) in (first_char..=last_char).enumerate() {
        let entry = char_table + position * entry_size;
        let width = read_u16(bytes, entry)?;
        // Absent glyphs keep their empty slot; their offset is meaningless.
        if width == 0 {
            continue;
        }

        let offset = match version {
            VERSION_2 => usize::from(read_u16(bytes, entry + 2)?),
            _ => u32_to_usize(read_u32(bytes, entry + 2)?),
        };

        font.set_glyph(index, read_glyph(bytes, index, offset, width, height)?);
    }

    Ok(font)
}

/// Reads the column-major bitmap of the glyph at byte `index` into one value per row.
fn read_glyph(
    bytes: &[u8],
    index: u8,
    offset: usize,
    width: u16,
    height: usize,
) -> Result<Glyph, WinFntError> {
    if width > MAX_GLYPH_WIDTH {
        return Err(WinFntError::GlyphTooWide { index, width });
    }

    let columns = usize::from(width.div_ceil(8));
    let bitmap = slice(bytes, offset, columns * height)?;
    let padding = columns * 8 - usize::from(width);

    let rows = (0..height)
        .map(|row| {
            let value = (0..columns).fold(0u64, |value, column| {
                (value << 8) | u64::from(bitmap[column * height + row])
            }) >> padding;
            u32::try_from(value).map_err(|_| WinFntError::GlyphTooWide { index, width })
        })
        .collect::<Result<Vec<u32>, WinFntError>>()?;

    Ok(Glyph::new(width, rows))
}

/// Reads the NUL-terminated face name referenced by the header.
fn read_face_name(bytes: &[u8]) -> Result<String, WinFntError> {
    let offset = u32_to_usize(read_u32(bytes, FACE)?);
    let tail = bytes.get(offset..).ok_or(WinFntError::Truncated {
        offset,
        length: 1,
        size: bytes.len(),
    })?;

    Ok(cp1252::decode_lossy(until_nul(tail)))
}

/// Reads the fixed-size copyright field.
fn read_copyright(bytes: &[u8]) -> Result<String, WinFntError> {
    let field = slice(bytes, COPYRIGHT, COPYRIGHT_LENGTH)?;

    Ok(cp1252::decode_lossy(until_nul(field)).trim_end().to_owned())
}

/// Returns the prefix of `bytes` before its first NUL byte.
fn until_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&byte| byte == 0).unwrap_or(bytes.len());
    &bytes[..end]
}
