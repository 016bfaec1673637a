//! Extraction of font resources from PE executables.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    bytes::{read_u16, read_u32, slice, u32_to_usize},
    error::WinFntError,
};

/// Size of the `PE\0\0` signature.
const SIGNATURE_SIZE: usize = 4;
/// Size of the COFF file header.
const FILE_HEADER_SIZE: usize = 20;
/// Size of a section header.
const SECTION_HEADER_SIZE: usize = 40;

/// Optional header magic of 32-bit images.
const PE32_MAGIC: u16 = 0x010B;
/// Optional header magic of 64-bit images.
const PE32_PLUS_MAGIC: u16 = 0x020B;

/// Index of the resource table in the data directories.
const RESOURCE_DIRECTORY: u32 = 2;

/// `RT_FONT`.
const FONT_TYPE: u32 = 8;

/// Type, name and language.
const TREE_DEPTH: usize = 3;

/// Set in a directory entry that points at another directory.
const SUBDIRECTORY_FLAG: u32 = 0x8000_0000;

/// The file location of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Section {
    /// The address of the section relative to the image base.
    virtual_address: u32,
    /// The size of the section once loaded.
    virtual_size: u32,
    /// The offset of the section's data in the file.
    raw_offset: u32,
    /// The size of the section's data in the file.
    raw_size: u32,
}

impl Section {
    /// Returns the file offset of `rva` if it lies inside this [`Section`].
    fn file_offset(&self, rva: u32) -> Option<usize> {
        let delta = rva.checked_sub(self.virtual_address)?;
        if delta >= self.virtual_size.max(self.raw_size) {
            return None;
        }

        Some(u32_to_usize(self.raw_offset) + u32_to_usize(delta))
    }
}

/// Returns every font resource of the PE executable whose signature starts at `header`, in
/// resource directory order.
///
/// # Errors
///
/// - [`WinFntError::UnsupportedOptionalHeader`]: the optional header is not PE32 or PE32+.
/// - [`WinFntError::UnmappedRva`]: the resource tree points outside of every section.
/// - [`WinFntError::ResourceTreeTooDeep`]: the resource tree is nested deeper than expected.
/// - [`WinFntError::ResourceDirectoryRevisited`]: two entries point at the same directory.
/// - [`WinFntError::Truncated`]: a header, directory or resource lies outside `bytes`.
pub fn font_resources(bytes: &[u8], header: usize) -> Result<Vec<&[u8]>, WinFntError> {
    let file_header = header + SIGNATURE_SIZE;
    let section_count = usize::from(read_u16(bytes, file_header + 2)?);
    let optional_size = usize::from(read_u16(bytes, file_header + 16)?);

    let optional = file_header + FILE_HEADER_SIZE;
    let magic = read_u16(bytes, optional)?;
    let directory_count = match magic {
        PE32_MAGIC => optional + 92,
        PE32_PLUS_MAGIC => optional + 108,
        _ => return Err(WinFntError::UnsupportedOptionalHeader(magic)),
    };
    if read_u32(bytes, directory_count)? <= RESOURCE_DIRECTORY {
        return Ok(Vec::new());
    }

    let resource_directory = directory_count + 4 + u32_to_usize(RESOURCE_DIRECTORY) * 8;
    let resource_rva = read_u32(bytes, resource_directory)?;
    if resource_rva == 0 {
        return Ok(Vec::new());
    }

    let sections = (0..section_count)
        .map(|index| -> Result<Section, WinFntError> {
            let section = optional + optional_size + index * SECTION_HEADER_SIZE;
            Ok(Section {
                virtual_size: read_u32(bytes, section + 8)?,
                virtual_address: read_u32(bytes, section + 12)?,
                raw_size: read_u32(bytes, section + 16)?,
                raw_offset: read_u32(bytes, section + 20)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let to_offset = |rva: u32| {
        sections
            .iter()
            .find_map(|section| section.file_offset(rva))
            .ok_or(WinFntError::UnmappedRva(rva))
    };

    let base = to_offset(resource_rva)?;
    let mut leaves = Vec::new();
    let mut visited = BTreeSet::from([base]);
    for (id, target) in directory_entries(bytes, base)? {
        if id != FONT_TYPE || target & SUBDIRECTORY_FLAG == 0 {
            debug!("skipping resource type {id:#X}");
            continue;
        }

        collect_leaves(bytes, base, target, 1, &mut visited, &mut leaves)?;
    }

    leaves
        .into_iter()
        .map(|leaf| {
            let rva = read_u32(bytes, leaf)?;
            let size = u32_to_usize(read_u32(bytes, leaf + 4)?);
            slice(bytes, to_offset(rva)?, size)
        })
        .collect()
}

/// Returns the `(name or id, target)` pairs of the resource directory at `directory`.
fn directory_entries(bytes: &[u8], directory: usize) -> Result<Vec<(u32, u32)>, WinFntError> {
    let named = usize::from(read_u16(bytes, directory + 12)?);
    let ids = usize::from(read_u16(bytes, directory + 14)?);

    (0..named + ids)
        .map(|index| -> Result<(u32, u32), WinFntError> {
            let entry = directory + 16 + index * 8;
            Ok((read_u32(bytes, entry)?, read_u32(bytes, entry + 4)?))
        })
        .collect()
}

/// Appends the file offsets of every data entry reachable from `target` to `leaves`.
///
/// Every directory may be entered once; `visited` holds the offsets already walked.
fn collect_leaves(
    bytes: &[u8],
    base: usize,
    target: u32,
    depth: usize,
    visited: &mut BTreeSet<usize>,
    leaves: &mut Vec<usize>,
) -> Result<(), WinFntError> {
    let offset = base + u32_to_usize(target & !SUBDIRECTORY_FLAG);
    if target & SUBDIRECTORY_FLAG == 0 {
        leaves.push(offset);
        return Ok(());
    }

    if depth >= TREE_DEPTH {
        return Err(WinFntError::ResourceTreeTooDeep);
    }
    if !visited.insert(offset) {
        return Err(WinFntError::ResourceDirectoryRevisited(offset));
    }

    for (_, child) in directory_entries(bytes, offset)? {
        collect_leaves(bytes, base, child, depth + 1, visited, leaves)?;
    }

    Ok(())
}
