//! Binary pixel color

/// Pixel color on the monochrome panel
///
/// `On` is a set bit in the framebuffer and shows as a dark pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Cleared bit, white pixel
    #[default]
    Off,
    /// Set bit, black pixel
    On,
}

impl Color {
    /// The other color
    pub fn invert(self) -> Self {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }

    /// Byte value of a page column filled with this color
    pub(crate) fn fill_byte(self) -> u8 {
        match self {
            Color::Off => 0x00,
            Color::On => 0xFF,
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::On
        } else {
            Color::Off
        }
    }
}

impl From<Color> for bool {
    fn from(color: Color) -> Self {
        color == Color::On
    }
}
