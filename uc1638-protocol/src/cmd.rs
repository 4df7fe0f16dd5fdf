//! UC1638 command bytes
//!
//! Commands marked "+ data" take one parameter byte sent with the
//! command/data line high right after the command.

/// System reset
pub const SYSTEM_RESET: u8 = 0xE2;

/// All pixels on (bit 0 = 1) / normal (bit 0 = 0)
pub const SET_ALL_PIXEL_ON: u8 = 0xA4;
/// Inverse display (bit 0 = 1) / normal (bit 0 = 0)
pub const SET_INVERSE_DISPLAY: u8 = 0xA6;

/// MTP operation control (+ data)
pub const MTP_CONTROL: u8 = 0xB8;
/// Power control, internal charge pump enabled
pub const POWER_CONTROL: u8 = 0x2D;
/// Temperature compensation
pub const TEMPERATURE_COMPENSATION: u8 = 0x20;
/// LCD bias ratio
pub const SET_BIAS_RATIO: u8 = 0xEA;
/// Vbias potentiometer, i.e. contrast (+ data)
pub const SET_VBIAS: u8 = 0x81;

/// Line rate
pub const SET_LINE_RATE: u8 = 0xA3;
/// Scan control (+ data)
pub const SET_SCAN_CONTROL: u8 = 0xC8;

/// RAM address control
pub const RAM_ADDRESS_CONTROL: u8 = 0x89;
/// Second half of the RAM address mapping pair
pub const RAM_ADDRESS_MAP: u8 = 0x95;
/// First COM line
pub const SET_COM_START: u8 = 0x84;
/// Last COM line (+ data)
pub const SET_COM_END: u8 = 0xF1;
/// LCD mapping control
pub const LCD_MAPPING: u8 = 0xC4;
/// COM scan function
pub const COM_SCAN_FUNCTION: u8 = 0x86;

/// Scroll line, low nibble in bits 0-3
pub const SET_SCROLL_LINE_LSB: u8 = 0x40;
/// Scroll line, high nibble in bits 0-3
pub const SET_SCROLL_LINE_MSB: u8 = 0x50;

/// Column address (+ data)
pub const SET_COLUMN_ADDRESS: u8 = 0x04;
/// Page address, low nibble in bits 0-3
pub const SET_PAGE_ADDRESS_LSB: u8 = 0x60;
/// Page address, high nibble in bits 0-3
pub const SET_PAGE_ADDRESS_MSB: u8 = 0x70;
/// Enter display-data write mode
pub const WRITE_DATA: u8 = 0x01;

/// Window program start column (+ data)
pub const WINDOW_START_COLUMN: u8 = 0xF4;
/// Window program start page (+ data)
pub const WINDOW_START_PAGE: u8 = 0xF5;
/// Window program end column (+ data)
pub const WINDOW_END_COLUMN: u8 = 0xF6;
/// Window program end page (+ data)
pub const WINDOW_END_PAGE: u8 = 0xF7;
/// Enable window program
pub const WINDOW_PROGRAM_ENABLE: u8 = 0xF9;

/// Display enable (+ data)
pub const DISPLAY_ENABLE: u8 = 0xC9;
