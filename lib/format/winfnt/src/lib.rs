//! The `winfnt` crate decodes Windows bitmap fonts into [`font::Font`]s.
//!
//! # Capabilities
//!
//! ## Containers
//!
//! `.FON` files are executables that carry one or more FNT resources. Both 16-bit NE
//! executables and PE executables are supported. Anything that does not start with an `MZ`
//! header is parsed as a single raw `.FNT` resource.
//!
//! ## Raster fonts only
//!
//! FNT resources in the 2.0 and 3.0 layouts are supported. Vector fonts and 1.0 fonts are
//! rejected.
//!
//! ## Uses no unsafe code
//!
//! This crate contains zero unsafe blocks of code.

use font::{Font, FontDecoder};
use log::debug;

use crate::bytes::{read_u16, read_u32, u32_to_usize};

pub use crate::error::WinFntError;

mod bytes;
pub mod error;
pub mod fnt;
pub mod ne;
pub mod pe;

#[cfg(test)]
mod fixture;

/// Offset of the new executable header offset in the MZ header.
const NEW_HEADER_OFFSET: usize = 0x3C;

/// The [`FontDecoder`] for `.FON` and `.FNT` files.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct WinFntDecoder;

impl FontDecoder for WinFntDecoder {
    type Error = WinFntError;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Font>, Self::Error> {
        decode(bytes)
    }
}

/// Decodes every font stored in `bytes`, in container order.
///
/// # Errors
///
/// - [`WinFntError::UnknownContainer`]: `bytes` is an executable of an unsupported kind.
/// - [`WinFntError::NoFonts`]: the executable holds no font resources.
/// - [`WinFntError::Resource`]: a font resource inside the executable is malformed.
/// - Any error of [`fnt::parse_fnt`] when `bytes` is a raw `.FNT` resource.
pub fn decode(bytes: &[u8]) -> Result<Vec<Font>, WinFntError> {
    if !bytes.starts_with(b"MZ") {
        debug!("no MZ header, decoding a raw FNT resource");
        return Ok(vec![fnt::parse_fnt(bytes)?]);
    }

    let header = u32_to_usize(read_u32(bytes, NEW_HEADER_OFFSET)?);
    let signature = read_u16(bytes, header)?;
    let resources = match &signature.to_le_bytes() {
        b"NE" => ne::font_resources(bytes, header)?,
        b"PE" if bytes.get(header + 2..header + 4) == Some(&[0u8, 0][..]) => {
            pe::font_resources(bytes, header)?
        }
        _ => return Err(WinFntError::UnknownContainer(signature)),
    };
    debug!("found {} font resources", resources.len());

    if resources.is_empty() {
        return Err(WinFntError::NoFonts);
    }

    resources
        .into_iter()
        .enumerate()
        .map(|(index, resource)| {
            fnt::parse_fnt(resource).map_err(|error| WinFntError::Resource {
                index,
                error: Box::new(error),
            })
        })
        .collect()
}
