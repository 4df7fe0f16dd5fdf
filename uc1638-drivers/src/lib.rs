//! Hardware transports for UC1638 panels
//!
//! This crate implements the [`Transport`](uc1638_protocol::Transport)
//! contract on top of `embedded-hal` 1.0, so the engine in `uc1638-core`
//! runs unchanged on any MCU with a HAL:
//!
//! - [`SpiTransport`]: 4-wire SPI with a command/data pin and an optional
//!   reset pin

#![no_std]
#![deny(unsafe_code)]

pub mod spi;

pub use spi::{NoPin, SpiTransport, SpiTransportError};
