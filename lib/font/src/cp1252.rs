//! Windows-1252 byte to Unicode scalar value mapping.

/// Windows-1252 to Unicode mapping for bytes `0x80`–`0x9F`.
///
/// Index 0 corresponds to byte `0x80`. Unassigned bytes are [`None`].
const SPECIALS: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 EURO SIGN
    None,             // 0x81
    Some('\u{201A}'), // 0x82 SINGLE LOW-9 QUOTATION MARK
    Some('\u{0192}'), // 0x83 LATIN SMALL LETTER F WITH HOOK
    Some('\u{201E}'), // 0x84 DOUBLE LOW-9 QUOTATION MARK
    Some('\u{2026}'), // 0x85 HORIZONTAL ELLIPSIS
    Some('\u{2020}'), // 0x86 DAGGER
    Some('\u{2021}'), // 0x87 DOUBLE DAGGER
    Some('\u{02C6}'), // 0x88 MODIFIER LETTER CIRCUMFLEX ACCENT
    Some('\u{2030}'), // 0x89 PER MILLE SIGN
    Some('\u{0160}'), // 0x8A LATIN CAPITAL LETTER S WITH CARON
    Some('\u{2039}'), // 0x8B SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    Some('\u{0152}'), // 0x8C LATIN CAPITAL LIGATURE OE
    None,             // 0x8D
    Some('\u{017D}'), // 0x8E LATIN CAPITAL LETTER Z WITH CARON
    None,             // 0x8F
    None,             // 0x90
    Some('\u{2018}'), // 0x91 LEFT SINGLE QUOTATION MARK
    Some('\u{2019}'), // 0x92 RIGHT SINGLE QUOTATION MARK
    Some('\u{201C}'), // 0x93 LEFT DOUBLE QUOTATION MARK
    Some('\u{201D}'), // 0x94 RIGHT DOUBLE QUOTATION MARK
    Some('\u{2022}'), // 0x95 BULLET
    Some('\u{2013}'), // 0x96 EN DASH
    Some('\u{2014}'), // 0x97 EM DASH
    Some('\u{02DC}'), // 0x98 SMALL TILDE
    Some('\u{2122}'), // 0x99 TRADE MARK SIGN
    Some('\u{0161}'), // 0x9A LATIN SMALL LETTER S WITH CARON
    Some('\u{203A}'), // 0x9B SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    Some('\u{0153}'), // 0x9C LATIN SMALL LIGATURE OE
    None,             // 0x9D
    Some('\u{017E}'), // 0x9E LATIN SMALL LETTER Z WITH CARON
    Some('\u{0178}'), // 0x9F LATIN CAPITAL LETTER Y WITH DIAERESIS
];

/// Decodes a single Windows-1252 `byte`.
///
/// Returns [`None`] for the five bytes that Windows-1252 leaves unassigned (`0x81`, `0x8D`,
/// `0x8F`, `0x90` and `0x9D`).
pub const fn decode_byte(byte: u8) -> Option<char> {
    match byte {
        0x80..=0x9F => SPECIALS[(byte - 0x80) as usize],
        _ => Some(byte as char),
    }
}

/// Decodes `bytes` as Windows-1252 text, substituting U+FFFD for unassigned bytes.
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| decode_byte(byte).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod test {
    use super::{decode_byte, decode_lossy};

    #[test]
    fn ascii_and_latin1_map_to_themselves() {
        for byte in (0x00..=0x7F).chain(0xA0..=0xFF) {
            assert_eq!(decode_byte(byte), Some(char::from(byte)));
        }
    }

    #[test]
    fn specials() {
        assert_eq!(decode_byte(0x80), Some('€'));
        assert_eq!(decode_byte(0x85), Some('…'));
        assert_eq!(decode_byte(0x99), Some('™'));
        assert_eq!(decode_byte(0x9F), Some('Ÿ'));
    }

    #[test]
    fn unassigned_bytes() {
        let unassigned: Vec<u8> = (0..=u8::MAX)
            .filter(|&byte| decode_byte(byte).is_none())
            .collect();

        assert_eq!(unassigned, [0x81, 0x8D, 0x8F, 0x90, 0x9D]);
    }

    #[test]
    fn mapping_is_injective() {
        let mut codes: Vec<char> = (0..=u8::MAX).filter_map(decode_byte).collect();
        let count = codes.len();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), count);
    }

    #[test]
    fn lossy_text() {
        assert_eq!(decode_lossy(b"Fixedsys"), "Fixedsys");
        assert_eq!(decode_lossy(b"\xA9 1991\x81"), "© 1991\u{FFFD}");
    }
}
