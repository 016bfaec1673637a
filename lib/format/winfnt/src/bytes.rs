//! Bounds-checked little-endian reads over the input bytes.

use crate::error::WinFntError;

/// Returns the `length` bytes at `offset`.
pub(crate) fn slice(bytes: &[u8], offset: usize, length: usize) -> Result<&[u8], WinFntError> {
    offset
        .checked_add(length)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(WinFntError::Truncated {
            offset,
            length,
            size: bytes.len(),
        })
}

/// Returns the `N` bytes at `offset`.
pub(crate) fn read_array<const N: usize>(
    bytes: &[u8],
    offset: usize,
) -> Result<[u8; N], WinFntError> {
    bytes
        .get(offset..)
        .and_then(<[u8]>::first_chunk::<N>)
        .copied()
        .ok_or(WinFntError::Truncated {
            offset,
            length: N,
            size: bytes.len(),
        })
}

/// Reads the byte at `offset`.
pub(crate) fn read_u8(bytes: &[u8], offset: usize) -> Result<u8, WinFntError> {
    read_array::<1>(bytes, offset).map(|[byte]| byte)
}

/// Reads the little-endian `u16` at `offset`.
pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> Result<u16, WinFntError> {
    read_array(bytes, offset).map(u16::from_le_bytes)
}

/// Reads the little-endian `u32` at `offset`.
pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, WinFntError> {
    read_array(bytes, offset).map(u32::from_le_bytes)
}

/// Converts `value` to a `usize` relying on compile time code checking.
#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
pub(crate) const fn u32_to_usize(value: u32) -> usize {
    value as usize
}
