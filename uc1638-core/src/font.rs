//! 6x12 glyph tables
//!
//! A glyph is 12 row bytes, top row first. Bit `n` of a row is the pixel in
//! column `n` of the cell, so bit 0 is the leftmost column. Only the low six
//! bits are drawn.

/// Glyph cell width in pixels
pub const GLYPH_WIDTH: usize = 6;

/// Glyph cell height in pixels
pub const GLYPH_HEIGHT: usize = 12;

/// One glyph bitmap, a byte per row
pub type Glyph = [u8; GLYPH_HEIGHT];

/// Filled box drawn for characters a font does not cover
pub const FALLBACK_GLYPH: Glyph = [
    0x00, 0x1E, 0x3F, 0x3F, 0x3F, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Source of glyph bitmaps
///
/// Lookups are total: characters without a bitmap resolve to a fallback.
pub trait GlyphSource {
    /// Bitmap for `code`
    fn glyph_for(&self, code: char) -> Glyph;
}

impl<F: GlyphSource + ?Sized> GlyphSource for &F {
    fn glyph_for(&self, code: char) -> Glyph {
        (**self).glyph_for(code)
    }
}

/// Built-in 6x12 font
///
/// Covers space, `!`, the digits, `A B C D E H L M P S U` and `e l o`.
/// Anything else draws [`FALLBACK_GLYPH`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Font6x12;

impl Font6x12 {
    /// Whether the font has a bitmap for `code`
    pub fn covers(&self, code: char) -> bool {
        lookup(code).is_some()
    }
}

impl GlyphSource for Font6x12 {
    fn glyph_for(&self, code: char) -> Glyph {
        lookup(code).unwrap_or(FALLBACK_GLYPH)
    }
}

#[rustfmt::skip]
fn lookup(code: char) -> Option<Glyph> {
    let glyph = match code {
        ' ' => [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00],
        '!' => [0x00,0x00,0x04,0x04,0x04,0x04,0x04,0x00,0x00,0x04,0x00,0x00],
        '0' => [0x00,0x00,0x0E,0x11,0x11,0x11,0x11,0x11,0x11,0x0E,0x00,0x00],
        '1' => [0x00,0x00,0x04,0x06,0x04,0x04,0x04,0x04,0x04,0x0E,0x00,0x00],
        '2' => [0x00,0x00,0x0E,0x11,0x11,0x08,0x04,0x02,0x01,0x1F,0x00,0x00],
        '3' => [0x00,0x00,0x0E,0x11,0x10,0x0C,0x10,0x10,0x11,0x0E,0x00,0x00],
        '4' => [0x00,0x00,0x08,0x0C,0x0C,0x0A,0x09,0x1F,0x08,0x1C,0x00,0x00],
        '5' => [0x00,0x00,0x1F,0x01,0x01,0x0F,0x11,0x10,0x11,0x0E,0x00,0x00],
        '6' => [0x00,0x00,0x0C,0x12,0x01,0x0D,0x13,0x11,0x11,0x0E,0x00,0x00],
        '7' => [0x00,0x00,0x1E,0x10,0x08,0x08,0x04,0x04,0x04,0x04,0x00,0x00],
        '8' => [0x00,0x00,0x0E,0x11,0x11,0x0E,0x11,0x11,0x11,0x0E,0x00,0x00],
        '9' => [0x00,0x00,0x0E,0x11,0x11,0x19,0x16,0x10,0x09,0x06,0x00,0x00],
        'A' => [0x00,0x00,0x04,0x04,0x0C,0x0A,0x0A,0x1E,0x12,0x33,0x00,0x00],
        'B' => [0x00,0x00,0x0F,0x12,0x12,0x0E,0x12,0x12,0x12,0x0F,0x00,0x00],
        'C' => [0x00,0x00,0x1E,0x11,0x01,0x01,0x01,0x01,0x11,0x0E,0x00,0x00],
        'D' => [0x00,0x00,0x0F,0x12,0x12,0x12,0x12,0x12,0x12,0x0F,0x00,0x00],
        'E' => [0x00,0x00,0x1F,0x12,0x0A,0x0E,0x0A,0x02,0x12,0x1F,0x00,0x00],
        'H' => [0x00,0x00,0x33,0x12,0x12,0x1E,0x12,0x12,0x12,0x33,0x00,0x00],
        'L' => [0x00,0x00,0x07,0x02,0x02,0x02,0x02,0x02,0x22,0x3F,0x00,0x00],
        'M' => [0x00,0x00,0x3B,0x1B,0x1B,0x1B,0x15,0x15,0x15,0x35,0x00,0x00],
        'P' => [0x00,0x00,0x0F,0x12,0x12,0x0E,0x02,0x02,0x02,0x07,0x00,0x00],
        'S' => [0x00,0x00,0x0E,0x11,0x01,0x0E,0x10,0x11,0x11,0x0E,0x00,0x00],
        'U' => [0x00,0x00,0x11,0x11,0x11,0x11,0x11,0x11,0x11,0x0E,0x00,0x00],
        'e' => [0x00,0x00,0x00,0x00,0x00,0x0C,0x12,0x1E,0x02,0x1C,0x00,0x00],
        'l' => [0x00,0x07,0x04,0x04,0x04,0x04,0x04,0x04,0x04,0x1F,0x00,0x00],
        'o' => [0x00,0x00,0x00,0x00,0x00,0x0C,0x12,0x12,0x12,0x0C,0x00,0x00],
        _ => return None,
    };
    Some(glyph)
}
