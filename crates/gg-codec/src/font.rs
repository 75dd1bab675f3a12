//! Builtin reference monospace bitmap font.
//!
//! Each glyph is an 8×8 two-level bitmap: 8 bytes top to bottom, MSB is the
//! left-most pixel of the row, bit = 1 means ink. There is no antialiasing,
//! so the set/unset pixel classification used by signature measurement is
//! exact.
//!
//! The table covers printable 7-bit ASCII (32..=126). Latin-1 letters are
//! composed from their base glyph plus an accent row; a handful of Latin-1
//! symbols are drawn explicitly; anything else renders blank.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 8;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 8;

/// Bitmap rows for a character code, top to bottom.
///
/// Codes without coverage return the blank glyph (all background).
///
/// # Example
/// ```
/// use gg_codec::font::glyph_rows;
/// assert_eq!(glyph_rows(32), [0; 8]);       // space
/// assert_ne!(glyph_rows(u32::from('@')), [0; 8]);
/// ```
#[must_use]
pub fn glyph_rows(code: u32) -> [u8; GLYPH_HEIGHT] {
    match code {
        32..=126 => BASIC[(code - 32) as usize],
        161..=255 => latin1_rows(code),
        _ => BLANK,
    }
}

const BLANK: [u8; 8] = [0; 8];

/// Printable ASCII, codes 32..=126 in order.
#[rustfmt::skip]
const BASIC: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // '!'
    [0x36, 0x36, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // '#'
    [0x0C, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x18, 0x00], // '$'
    [0x00, 0x63, 0x66, 0x0C, 0x18, 0x33, 0x63, 0x00], // '%'
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // '&'
    [0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00], // '('
    [0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00], // ')'
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // '*'
    [0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30], // ','
    [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // '.'
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // '/'
    [0x3E, 0x63, 0x67, 0x6B, 0x73, 0x63, 0x3E, 0x00], // '0'
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], // '1'
    [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00], // '2'
    [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00], // '3'
    [0x0E, 0x1E, 0x36, 0x66, 0x7F, 0x06, 0x06, 0x00], // '4'
    [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00], // '5'
    [0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00], // '6'
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00], // '7'
    [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00], // '8'
    [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00], // '9'
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00], // ':'
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x30], // ';'
    [0x0C, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0C, 0x00], // '<'
    [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00], // '='
    [0x30, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x30, 0x00], // '>'
    [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x00, 0x18, 0x00], // '?'
    [0x3E, 0x63, 0x6F, 0x6B, 0x6F, 0x60, 0x3E, 0x00], // '@'
    [0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00], // 'A'
    [0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x00], // 'B'
    [0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00], // 'C'
    [0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00], // 'D'
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00], // 'E'
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00], // 'F'
    [0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3E, 0x00], // 'G'
    [0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00], // 'H'
    [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00], // 'I'
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38, 0x00], // 'J'
    [0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00], // 'K'
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00], // 'L'
    [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00], // 'M'
    [0x63, 0x73, 0x7B, 0x6F, 0x67, 0x63, 0x63, 0x00], // 'N'
    [0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // 'O'
    [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00], // 'P'
    [0x3C, 0x66, 0x66, 0x66, 0x66, 0x6E, 0x3C, 0x06], // 'Q'
    [0x7C, 0x66, 0x66, 0x7C, 0x78, 0x6C, 0x66, 0x00], // 'R'
    [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00], // 'S'
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // 'T'
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // 'U'
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00], // 'V'
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // 'W'
    [0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00], // 'X'
    [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00], // 'Y'
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00], // 'Z'
    [0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00], // '['
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // '\\'
    [0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00], // ']'
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // '_'
    [0x18, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x3E, 0x00], // 'a'
    [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x00], // 'b'
    [0x00, 0x00, 0x3C, 0x66, 0x60, 0x66, 0x3C, 0x00], // 'c'
    [0x06, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x00], // 'd'
    [0x00, 0x00, 0x3C, 0x66, 0x7E, 0x60, 0x3C, 0x00], // 'e'
    [0x1C, 0x36, 0x30, 0x78, 0x30, 0x30, 0x30, 0x00], // 'f'
    [0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x7C], // 'g'
    [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00], // 'h'
    [0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00], // 'i'
    [0x06, 0x00, 0x06, 0x06, 0x06, 0x06, 0x66, 0x3C], // 'j'
    [0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x00], // 'k'
    [0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00], // 'l'
    [0x00, 0x00, 0x66, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // 'm'
    [0x00, 0x00, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00], // 'n'
    [0x00, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x00], // 'o'
    [0x00, 0x00, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60], // 'p'
    [0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x06], // 'q'
    [0x00, 0x00, 0x7C, 0x66, 0x60, 0x60, 0x60, 0x00], // 'r'
    [0x00, 0x00, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x00], // 's'
    [0x18, 0x18, 0x7E, 0x18, 0x18, 0x18, 0x0E, 0x00], // 't'
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x00], // 'u'
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00], // 'v'
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // 'w'
    [0x00, 0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00], // 'x'
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x0C, 0x78], // 'y'
    [0x00, 0x00, 0x7E, 0x0C, 0x18, 0x30, 0x7E, 0x00], // 'z'
    [0x0E, 0x18, 0x18, 0x70, 0x18, 0x18, 0x0E, 0x00], // '{'
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // '|'
    [0x70, 0x18, 0x18, 0x0E, 0x18, 0x18, 0x70, 0x00], // '}'
    [0x3B, 0x6E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '~'
];

/// Accent marks drawn into the top row(s) of a composed glyph.
#[derive(Clone, Copy)]
enum Accent {
    Grave,
    Acute,
    Circumflex,
    Tilde,
    Diaeresis,
    Ring,
    Cedilla,
}

fn compose(base: char, accent: Accent) -> [u8; 8] {
    let mut rows = glyph_rows(u32::from(base));
    match accent {
        Accent::Grave => rows[0] |= 0x30,
        Accent::Acute => rows[0] |= 0x0C,
        Accent::Circumflex => rows[0] |= 0x18,
        Accent::Tilde => rows[0] |= 0x36,
        Accent::Diaeresis => rows[0] |= 0x24,
        Accent::Ring => rows[0] |= 0x18,
        Accent::Cedilla => rows[7] |= 0x18,
    }
    rows
}

#[rustfmt::skip]
fn latin1_rows(code: u32) -> [u8; 8] {
    use Accent::{Acute, Cedilla, Circumflex, Diaeresis, Grave, Ring, Tilde};
    match code {
        0xA1 => [0x18, 0x00, 0x18, 0x18, 0x3C, 0x3C, 0x18, 0x00], // '¡'
        0xA2 => [0x18, 0x3E, 0x60, 0x60, 0x60, 0x3E, 0x18, 0x00], // '¢'
        0xA3 => [0x1C, 0x36, 0x30, 0x7C, 0x30, 0x30, 0x7E, 0x00], // '£'
        0xA5 => [0x66, 0x3C, 0x18, 0x7E, 0x18, 0x7E, 0x18, 0x00], // '¥'
        0xA7 => [0x3C, 0x60, 0x3C, 0x66, 0x3C, 0x06, 0x3C, 0x00], // '§'
        0xAB => [0x00, 0x1B, 0x36, 0x6C, 0x36, 0x1B, 0x00, 0x00], // '«'
        0xAC => [0x00, 0x00, 0x7E, 0x06, 0x06, 0x00, 0x00, 0x00], // '¬'
        0xB0 => [0x1C, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00], // '°'
        0xB1 => [0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x7E, 0x00], // '±'
        0xB5 => [0x00, 0x00, 0x66, 0x66, 0x66, 0x7C, 0x60, 0x60], // 'µ'
        0xB6 => [0x3F, 0x7B, 0x7B, 0x3B, 0x1B, 0x1B, 0x1B, 0x00], // '¶'
        0xB7 => [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00], // '·'
        0xBB => [0x00, 0x6C, 0x36, 0x1B, 0x36, 0x6C, 0x00, 0x00], // '»'
        0xBF => [0x18, 0x00, 0x18, 0x30, 0x60, 0x66, 0x3C, 0x00], // '¿'
        0xC0 => compose('A', Grave),
        0xC1 => compose('A', Acute),
        0xC2 => compose('A', Circumflex),
        0xC3 => compose('A', Tilde),
        0xC4 => compose('A', Diaeresis),
        0xC5 => compose('A', Ring),
        0xC6 => [0x3F, 0x6C, 0x6C, 0x7F, 0x6C, 0x6C, 0x6F, 0x00], // 'Æ'
        0xC7 => compose('C', Cedilla),
        0xC8 => compose('E', Grave),
        0xC9 => compose('E', Acute),
        0xCA => compose('E', Circumflex),
        0xCB => compose('E', Diaeresis),
        0xCC => compose('I', Grave),
        0xCD => compose('I', Acute),
        0xCE => compose('I', Circumflex),
        0xCF => compose('I', Diaeresis),
        0xD1 => compose('N', Tilde),
        0xD2 => compose('O', Grave),
        0xD3 => compose('O', Acute),
        0xD4 => compose('O', Circumflex),
        0xD5 => compose('O', Tilde),
        0xD6 => compose('O', Diaeresis),
        0xD7 => [0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00, 0x00], // '×'
        0xD8 => [0x3D, 0x66, 0x6E, 0x7E, 0x76, 0x66, 0xBC, 0x00], // 'Ø'
        0xD9 => compose('U', Grave),
        0xDA => compose('U', Acute),
        0xDB => compose('U', Circumflex),
        0xDC => compose('U', Diaeresis),
        0xDD => compose('Y', Acute),
        0xDF => [0x3C, 0x66, 0x66, 0x6C, 0x66, 0x66, 0x6C, 0x60], // 'ß'
        0xE0 => compose('a', Grave),
        0xE1 => compose('a', Acute),
        0xE2 => compose('a', Circumflex),
        0xE3 => compose('a', Tilde),
        0xE4 => compose('a', Diaeresis),
        0xE5 => compose('a', Ring),
        0xE6 => [0x00, 0x00, 0x7E, 0x1B, 0x7F, 0xD8, 0x7F, 0x00], // 'æ'
        0xE7 => compose('c', Cedilla),
        0xE8 => compose('e', Grave),
        0xE9 => compose('e', Acute),
        0xEA => compose('e', Circumflex),
        0xEB => compose('e', Diaeresis),
        0xEC => compose('i', Grave),
        0xED => compose('i', Acute),
        0xEE => compose('i', Circumflex),
        0xEF => compose('i', Diaeresis),
        0xF1 => compose('n', Tilde),
        0xF2 => compose('o', Grave),
        0xF3 => compose('o', Acute),
        0xF4 => compose('o', Circumflex),
        0xF5 => compose('o', Tilde),
        0xF6 => compose('o', Diaeresis),
        0xF7 => [0x00, 0x18, 0x00, 0x7E, 0x00, 0x18, 0x00, 0x00], // '÷'
        0xF8 => [0x00, 0x00, 0x3D, 0x66, 0x76, 0x6E, 0xBC, 0x00], // 'ø'
        0xF9 => compose('u', Grave),
        0xFA => compose('u', Acute),
        0xFB => compose('u', Circumflex),
        0xFC => compose('u', Diaeresis),
        0xFD => compose('y', Acute),
        0xFF => compose('y', Diaeresis),
        _ => BLANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_blank() {
        assert_eq!(glyph_rows(32), BLANK);
    }

    #[test]
    fn full_basic_coverage() {
        // Every printable ASCII code except space has at least one ink bit.
        for code in 33..=126 {
            assert_ne!(glyph_rows(code), BLANK, "code {code} has no bitmap");
        }
    }

    #[test]
    fn composed_accent_adds_ink() {
        let plain = glyph_rows(u32::from('e'));
        let acute = glyph_rows(0xE9);
        let plain_bits: u32 = plain.iter().map(|r| r.count_ones()).sum();
        let acute_bits: u32 = acute.iter().map(|r| r.count_ones()).sum();
        assert!(acute_bits > plain_bits);
    }

    #[test]
    fn uncovered_codes_render_blank() {
        assert_eq!(glyph_rows(0xA4), BLANK);
        assert_eq!(glyph_rows(31), BLANK);
    }
}
