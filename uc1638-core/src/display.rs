//! UC1638 display engine
//!
//! Owns the transport, the framebuffer and the font. Drawing only touches
//! the framebuffer; nothing reaches the panel until [`Uc1638::flush`].
//!
//! The framebuffer can be owned (the default) or borrowed from a `static`
//! through any `B: AsRef<FrameBuffer> + AsMut<FrameBuffer>`.

use uc1638_protocol::{cmd, execute, init_script, page_header, Transport};

use crate::color::Color;
use crate::config::{ConfigError, PanelConfig};
use crate::font::{Font6x12, GlyphSource};
use crate::framebuffer::FrameBuffer;

/// UC1638 panel driver
pub struct Uc1638<T, F = Font6x12, B = FrameBuffer> {
    transport: T,
    font: F,
    buffer: B,
    config: PanelConfig,
}

impl<T: Transport> Uc1638<T> {
    /// Create a driver with the built-in font, an owned framebuffer and the
    /// default panel configuration
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            font: Font6x12,
            buffer: FrameBuffer::new(),
            config: PanelConfig::default(),
        }
    }

    /// Create a driver for a panel with non-default settings
    pub fn with_config(transport: T, config: PanelConfig) -> Result<Self, ConfigError> {
        Self::with_parts(transport, Font6x12, FrameBuffer::new(), config)
    }
}

impl<T, F, B> Uc1638<T, F, B>
where
    T: Transport,
    F: GlyphSource,
    B: AsRef<FrameBuffer> + AsMut<FrameBuffer>,
{
    /// Create a driver from its parts
    pub fn with_parts(
        transport: T,
        font: F,
        buffer: B,
        config: PanelConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            transport,
            font,
            buffer,
            config,
        })
    }

    /// Reset the controller, program its registers and blank the panel
    ///
    /// Ends with a cleared framebuffer that has been flushed.
    pub fn init(&mut self) -> Result<(), T::Error> {
        let result = self.bring_up();

        #[cfg(feature = "defmt")]
        match &result {
            Ok(()) => defmt::info!(
                "UC1638 ready, column offset {}",
                self.config.column_offset()
            ),
            Err(_) => defmt::warn!("UC1638 init failed"),
        }

        result
    }

    /// Send the whole framebuffer to the panel
    ///
    /// On a transport error the remaining pages are skipped and the error is
    /// returned. Pages already sent keep their new contents.
    pub fn flush(&mut self) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("flush {} pages", uc1638_protocol::PAGES);

        let result = self.write_pages();

        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::warn!("flush aborted by transport error");
        }

        result
    }

    /// Change the bias voltage (contrast) register
    pub fn set_contrast(&mut self, vbias: u8) -> Result<(), T::Error> {
        self.transport.send_command(cmd::SET_VBIAS)?;
        self.transport.send_data(vbias)?;
        self.config.init.vbias = vbias;
        Ok(())
    }

    /// Swap black and white on the glass without touching display RAM
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), T::Error> {
        self.transport
            .send_command(cmd::SET_INVERSE_DISPLAY | u8::from(inverted))
    }

    /// Force every pixel on, or return to showing display RAM
    pub fn set_all_pixels_on(&mut self, on: bool) -> Result<(), T::Error> {
        self.transport
            .send_command(cmd::SET_ALL_PIXEL_ON | u8::from(on))
    }

    /// Fill the framebuffer with one color
    pub fn clear(&mut self, color: Color) {
        self.buffer.as_mut().clear(color);
    }

    /// Flip every pixel of the framebuffer
    pub fn invert(&mut self) {
        self.buffer.as_mut().invert();
    }

    /// Set a single pixel
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.buffer.as_mut().set_pixel(x, y, color);
    }

    /// Read a single pixel back from the framebuffer
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.buffer.as_ref().get_pixel(x, y)
    }

    /// See [`FrameBuffer::draw_line`]
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.buffer.as_mut().draw_line(x1, y1, x2, y2, color);
    }

    /// See [`FrameBuffer::draw_rectangle`]
    pub fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.buffer.as_mut().draw_rectangle(x1, y1, x2, y2, color);
    }

    /// See [`FrameBuffer::draw_circle`]
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        self.buffer.as_mut().draw_circle(x0, y0, r, color);
    }

    /// See [`FrameBuffer::fill_rect`]
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.buffer.as_mut().fill_rect(x1, y1, x2, y2, color);
    }

    /// Draw one character cell
    pub fn show_char(&mut self, x: i32, y: i32, code: char, fg: Color, bg: Color) {
        self.buffer
            .as_mut()
            .show_char(&self.font, x, y, code, fg, bg);
    }

    /// Draw one character, foreground pixels only
    pub fn show_char_transparent(&mut self, x: i32, y: i32, code: char, fg: Color) {
        self.buffer
            .as_mut()
            .show_char_transparent(&self.font, x, y, code, fg);
    }

    /// Draw a string on one line
    pub fn show_string(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        self.buffer
            .as_mut()
            .show_string(&self.font, x, y, text, fg, bg);
    }

    /// Draw a string, foreground pixels only
    pub fn show_string_transparent(&mut self, x: i32, y: i32, text: &str, fg: Color) {
        self.buffer
            .as_mut()
            .show_string_transparent(&self.font, x, y, text, fg);
    }

    /// Draw a right-justified, space-padded decimal number
    pub fn show_uint(
        &mut self,
        x: i32,
        y: i32,
        value: u32,
        digit_count: u8,
        fg: Color,
        bg: Color,
    ) {
        self.buffer
            .as_mut()
            .show_uint(&self.font, x, y, value, digit_count, fg, bg);
    }

    /// The framebuffer
    pub fn frame_buffer(&self) -> &FrameBuffer {
        self.buffer.as_ref()
    }

    /// The framebuffer, for drawing with other tools
    pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        self.buffer.as_mut()
    }

    /// Active panel configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }

    fn bring_up(&mut self) -> Result<(), T::Error> {
        self.transport.reset_pulse(self.config.reset)?;
        execute(&mut self.transport, &init_script(&self.config.init))?;
        self.clear(Color::Off);
        self.write_pages()
    }

    fn write_pages(&mut self) -> Result<(), T::Error> {
        let offset = self.config.column_offset();
        let buffer: &FrameBuffer = self.buffer.as_ref();

        for (page, bytes) in buffer.pages().enumerate() {
            execute(&mut self.transport, &page_header(page as u8, offset))?;
            self.transport.send_data_bulk(bytes)?;
        }
        Ok(())
    }
}

impl<T, F, B> core::fmt::Debug for Uc1638<T, F, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Uc1638")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
