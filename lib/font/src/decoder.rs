//! Abstraction over the font file formats that can produce a [`Font`].

use crate::glyph::Font;

/// A capability that turns the raw bytes of a font file into [`Font`]s.
///
/// Implementations must produce fonts in the order they appear in the file. Consumers that only
/// need a single font use the first one.
pub trait FontDecoder {
    /// The error returned when the bytes cannot be decoded.
    type Error;

    /// Decodes every [`Font`] stored in `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`FontDecoder::Error`] if `bytes` is not a well-formed font file.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Font>, Self::Error>;
}
