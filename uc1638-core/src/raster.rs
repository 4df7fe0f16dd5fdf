//! Primitive rasterizer
//!
//! Outlines go through [`FrameBuffer::set_pixel`] and are clipped pixel by
//! pixel. Filled rectangles are clamped to the panel and written a page
//! column at a time.

use crate::color::Color;
use crate::framebuffer::FrameBuffer;
use crate::{HEIGHT, WIDTH};

impl FrameBuffer {
    /// Draw a line between two points, both endpoints included
    ///
    /// Integer Bresenham walk covering all octants. Off-panel segments are
    /// clipped.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        // Widened so extreme coordinates cannot overflow the error term
        let (mut x, mut y) = (i64::from(x1), i64::from(y1));
        let (x2, y2) = (i64::from(x2), i64::from(y2));

        let dx = (x2 - x).abs();
        let dy = (y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw the outline of the rectangle spanned by two corners
    pub fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.draw_line(x1, y1, x2, y1, color);
        self.draw_line(x1, y1, x1, y2, color);
        self.draw_line(x1, y2, x2, y2, color);
        self.draw_line(x2, y1, x2, y2, color);
    }

    /// Draw a circle outline with the midpoint algorithm
    ///
    /// A negative radius draws nothing; radius 0 draws the centre pixel.
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let mut a: i64 = 0;
        let mut b = i64::from(r);
        let mut d = 3 - 2 * b;

        while a <= b {
            self.plot(x0 + a, y0 - b, color);
            self.plot(x0 + b, y0 - a, color);
            self.plot(x0 + b, y0 + a, color);
            self.plot(x0 + a, y0 + b, color);
            self.plot(x0 - a, y0 + b, color);
            self.plot(x0 - b, y0 + a, color);
            self.plot(x0 - a, y0 - b, color);
            self.plot(x0 - b, y0 - a, color);

            a += 1;
            if d < 0 {
                d += 4 * a + 6;
            } else {
                d += 10 + 4 * (a - b);
                b -= 1;
            }
        }
    }

    /// Fill the rectangle spanned by two corners, inclusive
    ///
    /// Each coordinate is clamped to the panel on its own, before the span
    /// is built. Corners are not reordered: a start past its end fills
    /// nothing, unless both clamp to the same edge, in which case that edge
    /// row or column is filled.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let x1 = clamp_axis(x1, WIDTH);
        let x2 = clamp_axis(x2, WIDTH);
        let y1 = clamp_axis(y1, HEIGHT);
        let y2 = clamp_axis(y2, HEIGHT);

        let (page_start, row_start) = (y1 / 8, y1 % 8);
        let (page_end, row_end) = (y2 / 8, y2 % 8);

        for page in page_start..=page_end {
            let lo = if page == page_start { row_start } else { 0 };
            let hi = if page == page_end { row_end } else { 7 };
            let mask = row_mask(lo, hi);
            if mask == 0 {
                continue;
            }
            for x in x1..=x2 {
                self.apply_mask(page, x, mask, color);
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }
}

fn clamp_axis(v: i32, len: usize) -> usize {
    v.clamp(0, len as i32 - 1) as usize
}

/// Bits `lo..=hi` of a page byte
fn row_mask(lo: usize, hi: usize) -> u8 {
    if lo > hi {
        return 0;
    }
    (0xFFu8 << lo) & (0xFFu8 >> (7 - hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lit(fb: &FrameBuffer) -> u32 {
        fb.as_bytes().iter().map(|b| b.count_ones()).sum()
    }

    #[test]
    fn test_row_mask() {
        assert_eq!(row_mask(0, 7), 0xFF);
        assert_eq!(row_mask(2, 5), 0b0011_1100);
        assert_eq!(row_mask(3, 3), 0b0000_1000);
        assert_eq!(row_mask(5, 2), 0);
    }

    fn from_points(points: &[(i32, i32)]) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        for &(x, y) in points {
            fb.set_pixel(x, y, Color::On);
        }
        fb
    }

    fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        fb.draw_line(x1, y1, x2, y2, Color::On);
        fb
    }

    /// Circle built from its first-octant `(a, b)` offsets
    fn circle_from_octant(cx: i32, cy: i32, octant: &[(i32, i32)]) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        for &(a, b) in octant {
            for (dx, dy) in [(a, b), (b, a), (-a, b), (-b, a), (a, -b), (b, -a), (-a, -b), (-b, -a)] {
                fb.set_pixel(cx + dx, cy + dy, Color::On);
            }
        }
        fb
    }

    #[test]
    fn test_steep_line_pixels() {
        assert!(line(0, 0, 1, 2) == from_points(&[(0, 0), (0, 1), (1, 2)]));
        assert!(
            line(2, 5, 4, 0) == from_points(&[(2, 5), (2, 4), (3, 3), (3, 2), (4, 1), (4, 0)])
        );
    }

    #[test]
    fn test_shallow_line_pixels() {
        let expected = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 3), (7, 3)];
        assert!(line(0, 0, 7, 3) == from_points(&expected));
        assert!(line(7, 3, 0, 0) == from_points(&expected));
    }

    #[test]
    fn test_reversed_line_pixels() {
        // Walking back from the far end rounds the other way
        assert!(line(1, 2, 0, 0) == from_points(&[(1, 2), (1, 1), (0, 0)]));
        assert!(
            line(10, 2, 4, 4)
                == from_points(&[(10, 2), (9, 2), (8, 3), (7, 3), (6, 3), (5, 4), (4, 4)])
        );
    }

    #[test]
    fn test_vertical_line_pixels() {
        let expected = [(3, 1), (3, 2), (3, 3), (3, 4)];
        assert!(line(3, 1, 3, 4) == from_points(&expected));
        assert!(line(3, 4, 3, 1) == from_points(&expected));
    }

    #[test]
    fn test_small_circle_pixels() {
        let cases: [(i32, &[(i32, i32)], u32); 3] = [
            (2, &[(0, 2), (1, 2)], 12),
            (3, &[(0, 3), (1, 3), (2, 2)], 16),
            (5, &[(0, 5), (1, 5), (2, 4), (3, 3)], 24),
        ];
        for (r, octant, count) in cases {
            let mut fb = FrameBuffer::new();
            fb.draw_circle(40, 40, r, Color::On);
            assert!(fb == circle_from_octant(40, 40, octant), "radius {r}");
            assert_eq!(lit(&fb), count, "radius {r}");
        }
    }

    #[test]
    fn test_circle_radius_twenty_pixels() {
        let octant = [
            (0, 20), (1, 20), (2, 20), (3, 20), (4, 19), (5, 19), (6, 19),
            (7, 18), (8, 18), (9, 17), (10, 17), (11, 16), (12, 15), (13, 14),
        ];
        let mut fb = FrameBuffer::new();
        fb.draw_circle(80, 40, 20, Color::On);
        assert!(fb == circle_from_octant(80, 40, &octant));
    }

    #[test]
    fn test_fill_reversed_past_edge_fills_edge() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(200, 0, 150, 7, Color::On);
        assert_eq!(fb.as_bytes()[127], 0xFF);
        assert_eq!(lit(&fb), 8);
    }

    #[test]
    fn test_horizontal_line() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(10, 20, 30, 20, Color::On);
        assert_eq!(lit(&fb), 21);
        for x in 10..=30 {
            assert_eq!(fb.get_pixel(x, 20), Some(Color::On));
        }
    }

    #[test]
    fn test_diagonal_line() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(5, 5, 0, 0, Color::On);
        assert_eq!(lit(&fb), 6);
        for i in 0..=5 {
            assert_eq!(fb.get_pixel(i, i), Some(Color::On));
        }
    }

    #[test]
    fn test_full_diagonal() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(0, 0, 127, 127, Color::On);
        assert_eq!(lit(&fb), 128);
        for i in 0..128 {
            assert_eq!(fb.get_pixel(i, i), Some(Color::On));
        }
    }

    #[test]
    fn test_degenerate_line() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(10, 5, 10, 5, Color::On);
        assert_eq!(lit(&fb), 1);
        assert_eq!(fb.get_pixel(10, 5), Some(Color::On));
    }

    #[test]
    fn test_line_clipped_off_panel() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(-10, 3, 200, 3, Color::On);
        assert_eq!(lit(&fb), 128);
    }

    #[test]
    fn test_rectangle_outline() {
        let mut fb = FrameBuffer::new();
        fb.draw_rectangle(10, 10, 20, 15, Color::On);
        // Perimeter of an 11x6 box
        assert_eq!(lit(&fb), 2 * 11 + 2 * 4);
        assert_eq!(fb.get_pixel(15, 12), Some(Color::Off));
        assert_eq!(fb.get_pixel(20, 15), Some(Color::On));
    }

    #[test]
    fn test_circle_radius_zero() {
        let mut fb = FrameBuffer::new();
        fb.draw_circle(40, 50, 0, Color::On);
        assert_eq!(lit(&fb), 1);
        assert_eq!(fb.get_pixel(40, 50), Some(Color::On));
    }

    #[test]
    fn test_circle_negative_radius() {
        let mut fb = FrameBuffer::new();
        fb.draw_circle(40, 50, -3, Color::On);
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_circle_extremes() {
        let mut fb = FrameBuffer::new();
        fb.draw_circle(64, 64, 10, Color::On);
        assert_eq!(fb.get_pixel(74, 64), Some(Color::On));
        assert_eq!(fb.get_pixel(54, 64), Some(Color::On));
        assert_eq!(fb.get_pixel(64, 74), Some(Color::On));
        assert_eq!(fb.get_pixel(64, 54), Some(Color::On));
        assert_eq!(fb.get_pixel(64, 64), Some(Color::Off));
    }

    #[test]
    fn test_circle_clipped_at_corner() {
        let mut fb = FrameBuffer::new();
        fb.draw_circle(0, 0, 5, Color::On);
        assert_eq!(fb.get_pixel(5, 0), Some(Color::On));
        assert_eq!(fb.get_pixel(0, 5), Some(Color::On));
    }

    #[test]
    fn test_circle_eight_way_symmetry() {
        let (cx, cy) = (80, 40);
        let mut fb = FrameBuffer::new();
        fb.draw_circle(cx, cy, 20, Color::On);

        for dy in -20..=20 {
            for dx in -20..=20 {
                let here = fb.get_pixel(cx + dx, cy + dy);
                assert_eq!(here, fb.get_pixel(cx - dx, cy + dy));
                assert_eq!(here, fb.get_pixel(cx + dx, cy - dy));
                assert_eq!(here, fb.get_pixel(cx + dy, cy + dx));
            }
        }
    }

    #[test]
    fn test_fill_lower_half() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(5, 10, Color::On);
        fb.fill_rect(0, 64, 127, 127, Color::On);

        for y in 0..128 {
            for x in 0..128 {
                let expected = y >= 64 || (x, y) == (5, 10);
                assert_eq!(fb.get_pixel(x, y), Some(Color::from(expected)));
            }
        }
    }

    #[test]
    fn test_fill_within_one_page() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(0, 2, 3, 5, Color::On);
        for x in 0..=3 {
            assert_eq!(fb.as_bytes()[x], 0b0011_1100);
        }
        assert_eq!(fb.as_bytes()[4], 0);
    }

    #[test]
    fn test_fill_spanning_pages() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(1, 5, 1, 17, Color::On);
        assert_eq!(fb.as_bytes()[1], 0b1110_0000);
        assert_eq!(fb.as_bytes()[WIDTH + 1], 0xFF);
        assert_eq!(fb.as_bytes()[2 * WIDTH + 1], 0b0000_0011);
    }

    #[test]
    fn test_fill_off_clears_only_masked_bits() {
        let mut fb = FrameBuffer::new();
        fb.clear(Color::On);
        fb.fill_rect(0, 2, 0, 5, Color::Off);
        assert_eq!(fb.as_bytes()[0], 0b1100_0011);
        assert_eq!(fb.as_bytes()[1], 0xFF);
    }

    #[test]
    fn test_fill_reversed_is_noop() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(20, 5, 10, 9, Color::On);
        fb.fill_rect(0, 6, 5, 2, Color::On);
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_fill_clamps_to_panel() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(-50, -50, 500, 500, Color::On);
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
    }

    proptest! {
        #[test]
        fn fill_matches_pixel_loop(
            x1 in -20..150i32, y1 in -20..150i32,
            x2 in -20..150i32, y2 in -20..150i32,
            on in any::<bool>(), base in any::<bool>(),
        ) {
            let color = Color::from(on);
            let mut fast = FrameBuffer::new();
            fast.clear(Color::from(base));
            let mut slow = fast.clone();

            fast.fill_rect(x1, y1, x2, y2, color);

            let (cx1, cx2) = (x1.clamp(0, 127), x2.clamp(0, 127));
            let (cy1, cy2) = (y1.clamp(0, 127), y2.clamp(0, 127));
            for y in cy1..=cy2 {
                for x in cx1..=cx2 {
                    slow.set_pixel(x, y, color);
                }
            }
            prop_assert!(fast == slow);
        }

        #[test]
        fn line_hits_endpoints_and_stays_in_box(
            x1 in 0..128i32, y1 in 0..128i32, x2 in 0..128i32, y2 in 0..128i32,
        ) {
            let mut fb = FrameBuffer::new();
            fb.draw_line(x1, y1, x2, y2, Color::On);

            prop_assert_eq!(fb.get_pixel(x1, y1), Some(Color::On));
            prop_assert_eq!(fb.get_pixel(x2, y2), Some(Color::On));

            let dx = (x2 - x1).unsigned_abs();
            let dy = (y2 - y1).unsigned_abs();
            let count = lit(&fb);
            prop_assert!(count >= dx.max(dy) + 1);
            prop_assert!(count <= dx + dy + 1);

            for y in 0..128 {
                for x in 0..128 {
                    if fb.get_pixel(x, y) == Some(Color::On) {
                        prop_assert!(x >= x1.min(x2) && x <= x1.max(x2));
                        prop_assert!(y >= y1.min(y2) && y <= y1.max(y2));
                    }
                }
            }
        }

        #[test]
        fn circle_is_mirror_symmetric(r in 0..60i32) {
            let mut fb = FrameBuffer::new();
            fb.draw_circle(64, 64, r, Color::On);
            for y in 1..128 {
                for x in 1..128 {
                    let here = fb.get_pixel(x, y);
                    prop_assert_eq!(here, fb.get_pixel(128 - x, y));
                    prop_assert_eq!(here, fb.get_pixel(x, 128 - y));
                }
            }
        }

        #[test]
        fn shapes_never_escape_the_panel(
            x1 in -300..300i32, y1 in -300..300i32,
            x2 in -300..300i32, y2 in -300..300i32,
            r in -10..200i32,
        ) {
            let mut fb = FrameBuffer::new();
            fb.draw_line(x1, y1, x2, y2, Color::On);
            fb.draw_rectangle(x1, y1, x2, y2, Color::On);
            fb.draw_circle(x1, y1, r, Color::On);
            fb.fill_rect(x1, y1, x2, y2, Color::Off);
        }
    }
}
