//! 4-wire SPI transport
//!
//! Drives the controller through an `embedded-hal` [`SpiDevice`] plus a
//! command/data (A0) pin and an optional reset pin. Chip select is owned by
//! the `SpiDevice` and asserted per write.
//!
//! ```text
//!  MCU           UC1638
//!  SCK  ───────► SCK
//!  MOSI ───────► SDA
//!  CS   ───────► CS      (SpiDevice)
//!  DC   ───────► A0      low = command, high = data
//!  RST  ───────► RST     optional, active low
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, Error as _, OutputPin};
use embedded_hal::spi::{self, Error as _, SpiDevice};
use uc1638_protocol::{ResetTiming, Transport};

/// SPI transport errors
///
/// Each variant names the line that failed and carries the HAL's error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiTransportError {
    /// SPI write failed
    Spi(spi::ErrorKind),
    /// Command/data pin could not be driven
    DataCommand(digital::ErrorKind),
    /// Reset pin could not be driven
    Reset(digital::ErrorKind),
}

/// Placeholder for boards without a reset line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// [`Transport`] over an `embedded-hal` SPI device
pub struct SpiTransport<SPI, DC, RST, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: D,
}

impl<SPI, DC, D> SpiTransport<SPI, DC, NoPin, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    D: DelayNs,
{
    /// Create a transport for a panel whose reset line is not wired
    ///
    /// Reset pulses only wait out their timing; the init script's system
    /// reset command does the rest.
    pub fn without_reset(spi: SPI, dc: DC, delay: D) -> Self {
        Self::new(spi, dc, NoPin, delay)
    }
}

impl<SPI, DC, RST, D> SpiTransport<SPI, DC, RST, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a new SPI transport
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: D) -> Self {
        Self {
            spi,
            dc,
            rst,
            delay,
        }
    }

    /// Consume the transport and return the bus, pins and delay
    pub fn release(self) -> (SPI, DC, RST, D) {
        (self.spi, self.dc, self.rst, self.delay)
    }

    fn command_mode(&mut self) -> Result<(), SpiTransportError> {
        self.dc
            .set_low()
            .map_err(|e| SpiTransportError::DataCommand(e.kind()))
    }

    fn data_mode(&mut self) -> Result<(), SpiTransportError> {
        self.dc
            .set_high()
            .map_err(|e| SpiTransportError::DataCommand(e.kind()))
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SpiTransportError> {
        self.spi
            .write(bytes)
            .map_err(|e| SpiTransportError::Spi(e.kind()))
    }
}

impl<SPI, DC, RST, D> Transport for SpiTransport<SPI, DC, RST, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    type Error = SpiTransportError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.command_mode()?;
        self.write(&[command])
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.data_mode()?;
        self.write(&[data])
    }

    fn send_data_bulk(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.data_mode()?;
        self.write(data)
    }

    fn reset_pulse(&mut self, timing: ResetTiming) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "UC1638 reset: hold {} ms, settle {} ms",
            timing.hold_ms,
            timing.settle_ms
        );

        self.rst
            .set_low()
            .map_err(|e| SpiTransportError::Reset(e.kind()))?;
        self.delay.delay_ms(timing.hold_ms);
        self.rst
            .set_high()
            .map_err(|e| SpiTransportError::Reset(e.kind()))?;
        self.delay.delay_ms(timing.settle_ms);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
