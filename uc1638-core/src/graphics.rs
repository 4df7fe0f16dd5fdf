//! `embedded-graphics` support
//!
//! Lets any embedded-graphics primitive, font or image draw into a
//! [`FrameBuffer`]. `BinaryColor::On` maps to [`Color::On`].

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;

use crate::color::Color;
use crate::framebuffer::FrameBuffer;
use crate::{HEIGHT, WIDTH};

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        Color::from(color.is_on())
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        BinaryColor::from(bool::from(color))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if let Some(bottom_right) = area.bottom_right() {
            let top_left = area.top_left;
            self.fill_rect(
                top_left.x,
                top_left.y,
                bottom_right.x,
                bottom_right.y,
                color.into(),
            );
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, color.into());
        Ok(())
    }
}
