//! Panel test patterns
//!
//! Full-screen fills that make column offset and page addressing mistakes
//! easy to spot on real glass.

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Column and row bands of the 3x3 checkerboard, inclusive
const BANDS: [(i32, i32); 3] = [(0, 42), (43, 85), (86, 127)];

/// 3x3 checkerboard, corners and centre on
pub fn checkerboard(fb: &mut FrameBuffer) {
    fb.clear(Color::Off);
    for (r, &(top, bottom)) in BANDS.iter().enumerate() {
        for (c, &(left, right)) in BANDS.iter().enumerate() {
            if (r + c) % 2 == 0 {
                fb.fill_rect(left, top, right, bottom, Color::On);
            }
        }
    }
}

/// Upper half off, lower half on
pub fn split_screen(fb: &mut FrameBuffer) {
    fb.clear(Color::Off);
    fb.fill_rect(0, 64, 127, 127, Color::On);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(v: i32) -> usize {
        BANDS.iter().position(|&(lo, hi)| v >= lo && v <= hi).unwrap()
    }

    #[test]
    fn test_checkerboard() {
        let mut fb = FrameBuffer::new();
        fb.clear(Color::On);
        checkerboard(&mut fb);

        for y in 0..128 {
            for x in 0..128 {
                let on = (band(x) + band(y)) % 2 == 0;
                assert_eq!(fb.get_pixel(x, y), Some(Color::from(on)), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_split_screen() {
        let mut fb = FrameBuffer::new();
        split_screen(&mut fb);

        let (top, bottom) = fb.as_bytes().split_at(8 * 128);
        assert!(top.iter().all(|&b| b == 0x00));
        assert!(bottom.iter().all(|&b| b == 0xFF));
    }
}
