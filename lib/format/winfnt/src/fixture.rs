//! Builders for synthetic FNT resources and the NE and PE containers that hold them.

use std::collections::BTreeMap;

/// Writes `value` in little-endian order at `offset`.
pub fn put_u16(buffer: &mut [u8], offset: usize, value: u16) {
    buffer[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Writes `value` in little-endian order at `offset`.
pub fn put_u32(buffer: &mut [u8], offset: usize, value: u32) {
    buffer[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Converts a test offset into a `u32`.
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap()
}

/// Converts a test offset into a `u16`.
fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap()
}

/// Builds a raster FNT resource.
pub struct FntBuilder {
    /// Whether to use the 3.0 layout.
    version_3: bool,
    /// Whether to set the vector flag.
    vector: bool,
    /// The pixel height of every glyph.
    height: u16,
    /// The face name.
    face: &'static str,
    /// The glyphs, keyed by byte index.
    glyphs: BTreeMap<u8, (u16, Vec<u32>)>,
}

impl FntBuilder {
    /// Creates a 2.0 layout builder with glyphs `height` pixels tall.
    pub fn new(height: u16) -> Self {
        Self {
            version_3: false,
            vector: false,
            height,
            face: "Test",
            glyphs: BTreeMap::new(),
        }
    }

    /// Switches to the 3.0 layout.
    pub fn version_3(mut self) -> Self {
        self.version_3 = true;
        self
    }

    /// Marks the resource as a vector font.
    pub fn vector(mut self) -> Self {
        self.vector = true;
        self
    }

    /// Sets the face name.
    pub fn face(mut self, face: &'static str) -> Self {
        self.face = face;
        self
    }

    /// Adds a glyph at `index`. `rows` hold `width` bits each, rightmost pixel in bit 0.
    pub fn glyph(mut self, index: u8, width: u16, rows: &[u32]) -> Self {
        assert_eq!(rows.len(), usize::from(self.height));
        self.glyphs.insert(index, (width, rows.to_vec()));
        self
    }

    /// Serializes the resource.
    pub fn build(&self) -> Vec<u8> {
        let first = *self.glyphs.keys().next().unwrap();
        let last = *self.glyphs.keys().next_back().unwrap();
        let (char_table, entry_size) = if self.version_3 { (148, 6) } else { (118, 4) };
        // One extra sentinel entry follows the last glyph.
        let entry_count = usize::from(last - first) + 2;

        let mut out = vec![0; char_table + entry_count * entry_size];
        put_u16(&mut out, 0, if self.version_3 { 0x0300 } else { 0x0200 });
        out[6..6 + 14].copy_from_slice(b"Test copyright");
        put_u16(&mut out, 66, u16::from(self.vector));
        put_u16(&mut out, 68, 7);
        put_u16(&mut out, 70, 96);
        put_u16(&mut out, 72, 96);
        put_u16(&mut out, 74, self.height.saturating_sub(2));
        put_u16(&mut out, 83, 400);
        put_u16(&mut out, 88, self.height);
        out[95] = first;
        out[96] = last;

        let height = usize::from(self.height);
        for (position, index) in (first..=last).enumerate() {
            let (width, rows) = self
                .glyphs
                .get(&index)
                .cloned()
                .unwrap_or_else(|| (0, vec![0; height]));

            let offset = out.len();
            let columns = usize::from(width.div_ceil(8));
            for column in 0..columns {
                for row in &rows {
                    let aligned = u64::from(*row) << (columns * 8 - usize::from(width));
                    let byte = (aligned >> (8 * (columns - 1 - column))) & 0xFF;
                    out.push(u8::try_from(byte).unwrap());
                }
            }

            let entry = char_table + position * entry_size;
            put_u16(&mut out, entry, width);
            if self.version_3 {
                put_u32(&mut out, entry + 2, to_u32(offset));
            } else {
                put_u16(&mut out, entry + 2, to_u16(offset));
            }
        }

        let face = out.len();
        out.extend_from_slice(self.face.as_bytes());
        out.push(0);
        put_u32(&mut out, 105, to_u32(face));

        let size = to_u32(out.len());
        put_u32(&mut out, 2, size);
        out
    }
}

/// Builds an MZ stub whose new header starts at offset 64.
fn mz_stub() -> Vec<u8> {
    let mut out = vec![0; 64];
    out[..2].copy_from_slice(b"MZ");
    put_u32(&mut out, 0x3C, 64);
    out
}

/// Wraps `fonts` in an NE executable with a font directory resource ahead of the fonts.
pub fn wrap_ne(fonts: &[Vec<u8>]) -> Vec<u8> {
    const SHIFT: u16 = 4;
    const ALIGN: usize = 1 << SHIFT;

    let mut out = mz_stub();
    out.resize(128, 0);
    out[64..66].copy_from_slice(b"NE");
    // The resource table follows the 64-byte NE header.
    put_u16(&mut out, 64 + 0x24, 64);

    let table = 128;
    let table_size = 2 + (8 + 12) + (8 + 12 * fonts.len()) + 2;
    out.resize(table + table_size, 0);
    put_u16(&mut out, table, SHIFT);

    let mut data = Vec::new();
    let mut place = |bytes: &[u8]| -> (u16, u16) {
        let start = (table + table_size).next_multiple_of(ALIGN) + data.len();
        data.extend_from_slice(bytes);
        data.resize(data.len().next_multiple_of(ALIGN), 0);
        (to_u16(start / ALIGN), to_u16(bytes.len().div_ceil(ALIGN)))
    };

    let mut cursor = table + 2;
    put_u16(&mut out, cursor, 0x8007);
    put_u16(&mut out, cursor + 2, 1);
    let (offset, length) = place(b"font directory");
    put_u16(&mut out, cursor + 8, offset);
    put_u16(&mut out, cursor + 10, length);
    cursor += 8 + 12;

    put_u16(&mut out, cursor, 0x8008);
    put_u16(&mut out, cursor + 2, to_u16(fonts.len()));
    cursor += 8;
    for font in fonts {
        let (offset, length) = place(font);
        put_u16(&mut out, cursor, offset);
        put_u16(&mut out, cursor + 2, length);
        cursor += 12;
    }

    out.resize((table + table_size).next_multiple_of(ALIGN), 0);
    out.extend_from_slice(&data);
    out
}

/// Wraps `fonts` in a PE32 executable with a single `.rsrc` section.
pub fn wrap_pe(fonts: &[Vec<u8>]) -> Vec<u8> {
    const SECTION_RVA: usize = 0x1000;
    const SECTION_OFFSET: usize = 0x200;

    let mut out = mz_stub();
    out.resize(SECTION_OFFSET, 0);
    out[64..68].copy_from_slice(b"PE\0\0");
    let file_header = 68;
    put_u16(&mut out, file_header, 0x014C);
    put_u16(&mut out, file_header + 2, 1);
    put_u16(&mut out, file_header + 16, 224);

    let optional = file_header + 20;
    put_u16(&mut out, optional, 0x010B);
    put_u32(&mut out, optional + 92, 16);

    // Resource tree: root (types 7 and 8), an empty type 7 directory, the font name directory,
    // one language directory per font, then the data entries and the font bytes.
    let root = 0;
    let empty = root + 16 + 2 * 8;
    let names = empty + 16;
    let languages = names + 16 + 8 * fonts.len();
    let data_entries = languages + 24 * fonts.len();
    let payload = data_entries + 16 * fonts.len();

    let mut section = vec![0; payload];
    put_u16(&mut section, root + 14, 2);
    put_u32(&mut section, root + 16, 7);
    put_u32(&mut section, root + 20, 0x8000_0000 | to_u32(empty));
    put_u32(&mut section, root + 24, 8);
    put_u32(&mut section, root + 28, 0x8000_0000 | to_u32(names));

    put_u16(&mut section, names + 14, to_u16(fonts.len()));
    for (position, font) in fonts.iter().enumerate() {
        let language = languages + 24 * position;
        let data_entry = data_entries + 16 * position;

        let name_entry = names + 16 + 8 * position;
        put_u32(&mut section, name_entry, to_u32(position + 1));
        put_u32(&mut section, name_entry + 4, 0x8000_0000 | to_u32(language));

        put_u16(&mut section, language + 14, 1);
        put_u32(&mut section, language + 16, 0x0409);
        put_u32(&mut section, language + 20, to_u32(data_entry));

        let start = section.len();
        section.extend_from_slice(font);
        put_u32(&mut section, data_entry, to_u32(SECTION_RVA + start));
        put_u32(&mut section, data_entry + 4, to_u32(font.len()));
    }

    let data_directory = optional + 96 + 2 * 8;
    put_u32(&mut out, data_directory, to_u32(SECTION_RVA));
    put_u32(&mut out, data_directory + 4, to_u32(section.len()));

    let section_header = optional + 224;
    out[section_header..section_header + 5].copy_from_slice(b".rsrc");
    put_u32(&mut out, section_header + 8, to_u32(section.len()));
    put_u32(&mut out, section_header + 12, to_u32(SECTION_RVA));
    put_u32(&mut out, section_header + 16, to_u32(section.len()));
    put_u32(&mut out, section_header + 20, to_u32(SECTION_OFFSET));

    out.extend_from_slice(&section);
    out
}
