//! Board-agnostic rendering engine for UC1638 LCD panels
//!
//! This crate contains everything that does not depend on a particular
//! MCU or bus:
//!
//! - The page-organised framebuffer and pixel colors
//! - Line, rectangle, circle and filled-rectangle rasterization
//! - The 6x12 glyph blitter and built-in font
//! - Panel configuration
//! - The [`Uc1638`] engine that brings the controller up and flushes frames
//!   through a [`Transport`](uc1638_protocol::Transport)
//!
//! With the `graphics` feature the framebuffer is also an
//! `embedded-graphics` draw target.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod display;
pub mod font;
pub mod framebuffer;
pub mod patterns;
mod raster;
mod text;

#[cfg(feature = "graphics")]
mod graphics;

pub use color::Color;
pub use config::{ConfigError, PanelConfig};
pub use display::Uc1638;
pub use font::{Font6x12, Glyph, GlyphSource, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use framebuffer::{FrameBuffer, BUFFER_SIZE};

pub use uc1638_protocol::{HEIGHT, PAGES, WIDTH};
