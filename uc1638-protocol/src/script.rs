//! Controller bring-up script
//!
//! The UC1638 needs an order-sensitive sequence of command and parameter
//! bytes after reset. The sequence is kept as data so it can be inspected
//! and tested without hardware, then replayed through a [`Transport`].

use crate::cmd;
use crate::transport::Transport;
use crate::{PAGES, WIDTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of steps in the bring-up script
pub const INIT_SCRIPT_CAPACITY: usize = 36;

/// Bring-up script, in transmission order
pub type InitScript = [Step; INIT_SCRIPT_CAPACITY];

/// One element of a controller script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Byte sent with the command/data line low
    Command(u8),
    /// Byte sent with the command/data line high
    Data(u8),
    /// Pause before the next step
    DelayMs(u32),
}

/// Tunable values inside the bring-up script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InitParams {
    /// First controller column wired to the panel
    pub column_offset: u8,
    /// Vbias potentiometer (contrast)
    pub vbias: u8,
    /// Scan control parameter
    pub scan_control: u8,
    /// Last COM line
    pub com_end: u8,
    /// Display enable parameter
    pub display_enable: u8,
    /// Wait after the system reset command (ms)
    pub system_reset_delay_ms: u32,
}

impl Default for InitParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl InitParams {
    /// Register values for the stock 128x128 panel
    pub const DEFAULT: Self = Self {
        column_offset: crate::COLUMN_OFFSET,
        vbias: 170,
        scan_control: 0x2F,
        com_end: 127,
        display_enable: 0xAD,
        system_reset_delay_ms: 5,
    };

    /// Last controller column covered by the window program
    ///
    /// Wraps if the offset leaves no room for the panel width; callers that
    /// accept user offsets validate them first.
    pub fn window_end_column(&self) -> u8 {
        self.column_offset.wrapping_add((WIDTH - 1) as u8)
    }
}

/// Build the bring-up script for the given parameters
pub fn init_script(params: &InitParams) -> InitScript {
    use Step::{Command, Data, DelayMs};

    [
        Command(cmd::SYSTEM_RESET),
        DelayMs(params.system_reset_delay_ms),
        // Display control
        Command(cmd::SET_ALL_PIXEL_ON),
        Command(cmd::SET_INVERSE_DISPLAY),
        // Power
        Command(cmd::MTP_CONTROL),
        Data(0x00),
        Command(cmd::POWER_CONTROL),
        Command(cmd::TEMPERATURE_COMPENSATION),
        Command(cmd::SET_BIAS_RATIO),
        Command(cmd::SET_VBIAS),
        Data(params.vbias),
        // Scan
        Command(cmd::SET_LINE_RATE),
        Command(cmd::SET_SCAN_CONTROL),
        Data(params.scan_control),
        // Address mapping
        Command(cmd::RAM_ADDRESS_CONTROL),
        Command(cmd::RAM_ADDRESS_MAP),
        Command(cmd::SET_COM_START),
        Command(cmd::SET_COM_END),
        Data(params.com_end),
        Command(cmd::LCD_MAPPING),
        Command(cmd::COM_SCAN_FUNCTION),
        // Scroll line 0, column pointer at the panel's first column
        Command(cmd::SET_SCROLL_LINE_LSB),
        Command(cmd::SET_SCROLL_LINE_MSB),
        Command(cmd::SET_COLUMN_ADDRESS),
        Data(params.column_offset),
        // Window program
        Command(cmd::WINDOW_START_COLUMN),
        Data(params.column_offset),
        Command(cmd::WINDOW_END_COLUMN),
        Data(params.window_end_column()),
        Command(cmd::WINDOW_START_PAGE),
        Data(0),
        Command(cmd::WINDOW_END_PAGE),
        Data((PAGES - 1) as u8),
        Command(cmd::WINDOW_PROGRAM_ENABLE),
        // Display on
        Command(cmd::DISPLAY_ENABLE),
        Data(params.display_enable),
    ]
}

/// Replay a script through a transport
///
/// Stops at the first failing step and returns its error.
pub fn execute<T: Transport>(transport: &mut T, steps: &[Step]) -> Result<(), T::Error> {
    for step in steps {
        match *step {
            Step::Command(c) => transport.send_command(c)?,
            Step::Data(d) => transport.send_data(d)?,
            Step::DelayMs(ms) => transport.delay_ms(ms),
        }
    }
    Ok(())
}
