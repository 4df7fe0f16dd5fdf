//! Glyph blitter
//!
//! Text is drawn cell by cell: each character occupies a 6x12 cell whose
//! top-left corner is at the pen position. Strings advance the pen by one
//! cell width and never wrap.

use crate::color::Color;
use crate::font::{GlyphSource, GLYPH_WIDTH};
use crate::framebuffer::FrameBuffer;

const ADVANCE: i32 = GLYPH_WIDTH as i32;

impl FrameBuffer {
    /// Draw one character, painting the whole cell
    ///
    /// Glyph bits take `fg`, every other pixel of the cell takes `bg`.
    pub fn show_char<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        code: char,
        fg: Color,
        bg: Color,
    ) {
        self.blit(font, x, y, code, fg, Some(bg));
    }

    /// Draw one character, leaving background pixels untouched
    pub fn show_char_transparent<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        code: char,
        fg: Color,
    ) {
        self.blit(font, x, y, code, fg, None);
    }

    /// Draw a string left to right on one line
    pub fn show_string<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        text: &str,
        fg: Color,
        bg: Color,
    ) {
        let mut pen = x;
        for code in text.chars() {
            self.show_char(font, pen, y, code, fg, bg);
            pen = pen.saturating_add(ADVANCE);
        }
    }

    /// Draw a string without painting cell backgrounds
    pub fn show_string_transparent<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        text: &str,
        fg: Color,
    ) {
        let mut pen = x;
        for code in text.chars() {
            self.show_char_transparent(font, pen, y, code, fg);
            pen = pen.saturating_add(ADVANCE);
        }
    }

    /// Draw `value` right-justified in a field of `digit_count` cells
    ///
    /// Leading zeros are drawn as spaces, the last digit always shows.
    /// Values wider than the field keep their low-order digits.
    #[allow(clippy::too_many_arguments)]
    pub fn show_uint<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        value: u32,
        digit_count: u8,
        fg: Color,
        bg: Color,
    ) {
        let mut leading = true;
        let mut pen = x;

        for i in 0..digit_count {
            let place = u32::from(digit_count - 1 - i);
            // 10^place past u32 range means the digit is always zero
            let digit = 10u32
                .checked_pow(place)
                .map_or(0, |divisor| (value / divisor) % 10);

            let code = if leading && digit == 0 && place != 0 {
                ' '
            } else {
                leading = false;
                char::from(b'0' + digit as u8)
            };
            self.show_char(font, pen, y, code, fg, bg);
            pen = pen.saturating_add(ADVANCE);
        }
    }

    fn blit<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        x: i32,
        y: i32,
        code: char,
        fg: Color,
        bg: Option<Color>,
    ) {
        let glyph = font.glyph_for(code);
        for (h, &row) in glyph.iter().enumerate() {
            let py = y.saturating_add(h as i32);
            for w in 0..GLYPH_WIDTH {
                let px = x.saturating_add(w as i32);
                if row & (1 << w) != 0 {
                    self.set_pixel(px, py, fg);
                } else if let Some(bg) = bg {
                    self.set_pixel(px, py, bg);
                }
            }
        }
    }
}
