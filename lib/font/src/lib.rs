//! Defines the in-memory font model shared by font decoders and the static glyph table emitter.
//!
//! A [`Font`][f] is always exactly 256 [`Glyph`][g] slots indexed by raw byte value. Decoders
//! produce fonts through the [`FontDecoder`][fd] trait, and [`GlyphTable`][gt] turns a decoded
//! font into `phf_map!` source text.
//!
//! [f]: crate::glyph::Font
//! [g]: crate::glyph::Glyph
//! [fd]: crate::decoder::FontDecoder
//! [gt]: crate::table::GlyphTable

pub mod cp1252;
pub mod decoder;
pub mod glyph;
pub mod table;

pub use decoder::FontDecoder;
pub use glyph::{Font, FontInfo, GLYPH_SLOTS, Glyph};
pub use table::{GlyphTable, PackError, TableEntry};
