//! Errors produced while decoding Windows bitmap fonts.

use core::{error, fmt};

/// Various errors that can occur when decoding a `.FON` or `.FNT` file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WinFntError {
    /// A requested region lies outside of the input.
    Truncated {
        /// The offset, in bytes, of the start of the requested region.
        offset: usize,
        /// The size, in bytes, of the requested region.
        length: usize,
        /// The size, in bytes, of the input.
        size: usize,
    },
    /// The executable header signature is neither `NE` nor `PE\0\0`.
    UnknownContainer(u16),
    /// The FNT version is not 2.0 or 3.0.
    UnsupportedVersion(u16),
    /// The FNT resource describes a vector font.
    VectorFont,
    /// A glyph is wider than 32 columns.
    GlyphTooWide {
        /// The byte index of the glyph.
        index: u8,
        /// The width of the glyph.
        width: u16,
    },
    /// The NE resource table alignment shift is too large.
    InvalidAlignmentShift(u16),
    /// The PE optional header magic is not PE32 or PE32+.
    UnsupportedOptionalHeader(u16),
    /// A PE relative virtual address lies outside of every section.
    UnmappedRva(u32),
    /// The PE resource directory tree is nested deeper than three levels.
    ResourceTreeTooDeep,
    /// A PE resource directory is referenced more than once.
    ResourceDirectoryRevisited(usize),
    /// The container holds no font resources.
    NoFonts,
    /// A font resource in a container could not be decoded.
    Resource {
        /// The position of the resource among the container's font resources.
        index: usize,
        /// The reason decoding failed.
        error: Box<WinFntError>,
    },
}

impl fmt::Display for WinFntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                offset,
                length,
                size,
            } => write!(
                f,
                "input is truncated: {length} bytes at offset {offset:#X} exceed {size} bytes"
            ),
            Self::UnknownContainer(signature) => {
                write!(f, "unknown executable signature: {signature:04X}")
            }
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported FNT version: {version:#06X}")
            }
            Self::VectorFont => write!(f, "vector fonts are not supported"),
            Self::GlyphTooWide { index, width } => {
                write!(f, "glyph {index:#04X} is {width} columns wide, more than 32")
            }
            Self::InvalidAlignmentShift(shift) => {
                write!(f, "invalid resource alignment shift: {shift}")
            }
            Self::UnsupportedOptionalHeader(magic) => {
                write!(f, "unsupported optional header magic: {magic:#06X}")
            }
            Self::UnmappedRva(rva) => write!(f, "rva {rva:#010X} is not inside any section"),
            Self::ResourceTreeTooDeep => write!(f, "resource directory is nested too deeply"),
            Self::ResourceDirectoryRevisited(offset) => {
                write!(f, "resource directory at offset {offset:#X} is referenced twice")
            }
            Self::NoFonts => write!(f, "container holds no font resources"),
            Self::Resource { index, .. } => write!(f, "font resource {index} is malformed"),
        }
    }
}

impl error::Error for WinFntError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Resource { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}
