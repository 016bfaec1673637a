//! Interface for interacting with glyphs and the fonts that contain them.

/// The number of [`Glyph`] slots in every [`Font`], one per byte value.
pub const GLYPH_SLOTS: usize = 256;

/// Stores the on/off layout of a specific glyph in a [`Font`].
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Glyph {
    /// The number of visible columns. A width of zero marks an unused slot.
    pub width: u16,
    /// One value per row, from the top down.
    ///
    /// Each value holds `width` bits. The leftmost pixel is the most significant used bit and the
    /// rightmost pixel is bit 0.
    pub rows: Vec<u32>,
}

impl Glyph {
    /// Creates a new [`Glyph`].
    pub const fn new(width: u16, rows: Vec<u32>) -> Self {
        Self { width, rows }
    }

    /// Creates an unused [`Glyph`] with `height` blank rows.
    pub fn empty(height: usize) -> Self {
        Self {
            width: 0,
            rows: vec![0; height],
        }
    }

    /// Returns `true` if this [`Glyph`] occupies its slot.
    pub const fn is_present(&self) -> bool {
        self.width != 0
    }

    /// Returns the number of rows in this [`Glyph`].
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Descriptive metadata attached to a [`Font`].
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct FontInfo {
    /// The face name of the font.
    pub face_name: String,
    /// The copyright notice embedded in the font.
    pub copyright: String,
    /// The nominal point size.
    pub points: u16,
    /// The height of every glyph, in pixels.
    pub pixel_height: u16,
    /// The distance from the top of a glyph to its baseline, in pixels.
    pub ascent: u16,
    /// The character set identifier declared by the font.
    pub char_set: u8,
    /// The weight of the font, from 1 to 1000.
    pub weight: u16,
    /// Whether the font is italic.
    pub italic: bool,
}

/// A fixed collection of [`GLYPH_SLOTS`] [`Glyph`]s indexed by raw byte value.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Font {
    /// Metadata describing this [`Font`].
    info: FontInfo,
    /// The glyph slots, indexed by byte value.
    glyphs: Box<[Glyph; GLYPH_SLOTS]>,
}

impl Font {
    /// Creates a new [`Font`] in which every slot holds an unused [`Glyph`] that is
    /// [`FontInfo::pixel_height`] rows tall.
    pub fn new(info: FontInfo) -> Self {
        let height = usize::from(info.pixel_height);

        Self {
            info,
            glyphs: Box::new(core::array::from_fn(|_| Glyph::empty(height))),
        }
    }

    /// Returns the [`FontInfo`] of this [`Font`].
    pub const fn info(&self) -> &FontInfo {
        &self.info
    }

    /// Returns the [`Glyph`] stored at `index`.
    pub fn glyph(&self, index: u8) -> &Glyph {
        &self.glyphs[usize::from(index)]
    }

    /// Replaces the [`Glyph`] stored at `index`.
    pub fn set_glyph(&mut self, index: u8, glyph: Glyph) {
        self.glyphs[usize::from(index)] = glyph;
    }

    /// Returns an [`Iterator`] over every slot and its byte index, in ascending order.
    pub fn glyphs(&self) -> impl Iterator<Item = (u8, &Glyph)> {
        (0..=u8::MAX).zip(self.glyphs.iter())
    }

    /// Returns the number of slots that hold a present [`Glyph`].
    pub fn present_count(&self) -> usize {
        self.glyphs.iter().filter(|glyph| glyph.is_present()).count()
    }
}
