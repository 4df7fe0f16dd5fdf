//! Transport contract
//!
//! The engine never touches a bus or a pin directly. Everything it sends
//! goes through a [`Transport`], implemented once per platform.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hardware reset pulse timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResetTiming {
    /// How long the reset line is held low (ms)
    pub hold_ms: u32,
    /// How long to wait after releasing reset before the first command (ms)
    pub settle_ms: u32,
}

impl ResetTiming {
    /// Hold reset for 20 ms, then wait 50 ms for the controller to settle
    pub const DEFAULT: Self = Self {
        hold_ms: 20,
        settle_ms: 50,
    };
}

impl Default for ResetTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Byte-level link to a UC1638 controller
///
/// All calls are blocking: they return once the bytes have been clocked
/// out. Implementations decide their own timeouts; the engine does not
/// retry a failed call.
pub trait Transport {
    /// Error type for bus or pin failures
    type Error;

    /// Send one byte with the command/data line low
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send one byte with the command/data line high
    fn send_data(&mut self, data: u8) -> Result<(), Self::Error>;

    /// Send a run of bytes with the command/data line high
    ///
    /// The whole slice goes out as one chip-select transaction.
    fn send_data_bulk(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Pulse the hardware reset line
    ///
    /// Drives reset low for `timing.hold_ms`, releases it and waits
    /// `timing.settle_ms`. Transports without a reset line only wait.
    fn reset_pulse(&mut self, timing: ResetTiming) -> Result<(), Self::Error>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        (**self).send_command(command)
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        (**self).send_data(data)
    }

    fn send_data_bulk(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).send_data_bulk(data)
    }

    fn reset_pulse(&mut self, timing: ResetTiming) -> Result<(), Self::Error> {
        (**self).reset_pulse(timing)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
