//! Page-organised 1bpp framebuffer
//!
//! The buffer mirrors the controller's display RAM: 16 pages of 128
//! columns. Each byte is a vertical strip of 8 pixels, bit `n` being the
//! pixel at `y = page * 8 + n`.
//!
//! ```text
//!            x=0    x=1          x=127
//!  page 0  [byte0][byte1] ... [byte127]    y = 0..7
//!  page 1  [b128 ][b129 ] ... [b255   ]    y = 8..15
//!   ...
//!  page 15 [b1920]        ... [b2047  ]    y = 120..127
//! ```
//!
//! Coordinates outside the panel are ignored by every write.

use crate::color::Color;
use crate::{HEIGHT, PAGES, WIDTH};

/// Size of the framebuffer in bytes
pub const BUFFER_SIZE: usize = PAGES * WIDTH;

/// In-memory copy of the panel contents
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    data: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank (all off) framebuffer
    ///
    /// `const` so the buffer can live in a `static`.
    pub const fn new() -> Self {
        Self {
            data: [0; BUFFER_SIZE],
        }
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.data.fill(color.fill_byte());
    }

    /// Set a single pixel
    ///
    /// Out-of-range coordinates are a no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((idx, bit)) = Self::locate(x, y) {
            match color {
                Color::On => self.data[idx] |= bit,
                Color::Off => self.data[idx] &= !bit,
            }
        }
    }

    /// Read a single pixel, `None` outside the panel
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        Self::locate(x, y).map(|(idx, bit)| Color::from(self.data[idx] & bit != 0))
    }

    /// The 128 bytes of one page, `None` past the last page
    pub fn page_slice(&self, page: usize) -> Option<&[u8]> {
        if page < PAGES {
            let start = page * WIDTH;
            Some(&self.data[start..start + WIDTH])
        } else {
            None
        }
    }

    /// Iterate over all pages from top to bottom
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(WIDTH)
    }

    /// Raw buffer contents, page-major
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.data
    }

    /// Flip every pixel
    pub fn invert(&mut self) {
        for byte in self.data.iter_mut() {
            *byte = !*byte;
        }
    }

    /// Apply a row mask to one column of one page
    ///
    /// Bulk path for span fills; `page` and `x` must be in range.
    pub(crate) fn apply_mask(&mut self, page: usize, x: usize, mask: u8, color: Color) {
        let idx = page * WIDTH + x;
        match color {
            Color::On => self.data[idx] |= mask,
            Color::Off => self.data[idx] &= !mask,
        }
    }

    /// Byte index and bit mask for a pixel
    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let page = y >> 3;
        let bit = 1u8 << (y & 7);
        Some((page * WIDTH + x, bit))
    }
}

impl AsRef<FrameBuffer> for FrameBuffer {
    fn as_ref(&self) -> &FrameBuffer {
        self
    }
}

impl AsMut<FrameBuffer> for FrameBuffer {
    fn as_mut(&mut self) -> &mut FrameBuffer {
        self
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.data.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("FrameBuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("pixels_on", &lit)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        let lit = self.data.iter().map(|b| b.count_ones()).sum::<u32>();
        defmt::write!(f, "FrameBuffer[{}x{}, {} on]", WIDTH, HEIGHT, lit);
    }
}
