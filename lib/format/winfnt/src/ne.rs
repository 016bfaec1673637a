//! Extraction of font resources from 16-bit NE executables.

use log::debug;

use crate::{
    bytes::{read_u16, slice},
    error::WinFntError,
};

/// Offset of the resource table offset within the NE header.
const RESOURCE_TABLE: usize = 0x24;

/// `RT_FONT` with the integer identifier flag set.
const FONT_TYPE: u16 = 0x8008;

/// Size of a resource type block header.
const TYPE_HEADER_SIZE: usize = 8;
/// Size of a single resource entry.
const RESOURCE_SIZE: usize = 12;

/// Returns every font resource of the NE executable whose header starts at `header`, in table
/// order.
///
/// Resource lengths are rounded up to the table's alignment, so a resource that runs past the
/// end of the file is cut at the end of the file.
///
/// # Errors
///
/// - [`WinFntError::InvalidAlignmentShift`]: the alignment shift overflows a `usize`.
/// - [`WinFntError::Truncated`]: the resource table or a resource start lies outside `bytes`.
pub fn font_resources(bytes: &[u8], header: usize) -> Result<Vec<&[u8]>, WinFntError> {
    let table = header + usize::from(read_u16(bytes, header + RESOURCE_TABLE)?);
    let shift = read_u16(bytes, table)?;
    let unit = 1usize
        .checked_shl(u32::from(shift))
        .ok_or(WinFntError::InvalidAlignmentShift(shift))?;
    let scale = |value: u16| {
        usize::from(value)
            .checked_mul(unit)
            .ok_or(WinFntError::InvalidAlignmentShift(shift))
    };

    let mut resources = Vec::new();
    let mut cursor = table + 2;
    loop {
        let type_id = read_u16(bytes, cursor)?;
        if type_id == 0 {
            break;
        }

        let count = usize::from(read_u16(bytes, cursor + 2)?);
        cursor += TYPE_HEADER_SIZE;
        if type_id != FONT_TYPE {
            debug!("skipping {count} resources of type {type_id:#06X}");
            cursor += count * RESOURCE_SIZE;
            continue;
        }

        for _ in 0..count {
            let offset = scale(read_u16(bytes, cursor)?)?;
            let length = scale(read_u16(bytes, cursor + 2)?)?;
            let length = length.min(bytes.len().saturating_sub(offset));
            resources.push(slice(bytes, offset, length)?);
            cursor += RESOURCE_SIZE;
        }
    }

    Ok(resources)
}
