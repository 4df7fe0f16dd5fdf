//! Per-page transfer header
//!
//! Header format (5 steps, then 128 bulk data bytes):
//! - SET_PAGE_ADDRESS_LSB | page[3:0] (command)
//! - SET_PAGE_ADDRESS_MSB | page[7:4] (command)
//! - SET_COLUMN_ADDRESS (command) + column offset (data)
//! - WRITE_DATA (command)
//!
//! The column pointer does not rewind on its own when a page is finished,
//! so it is reset on every page. Skipping it shifts that page sideways.

use crate::cmd;
use crate::script::Step;

/// Steps in a page header
pub const PAGE_HEADER_LEN: usize = 5;

/// Build the header that precedes one page of pixel data
pub fn page_header(page: u8, column_offset: u8) -> [Step; PAGE_HEADER_LEN] {
    [
        Step::Command(cmd::SET_PAGE_ADDRESS_LSB | (page & 0x0F)),
        Step::Command(cmd::SET_PAGE_ADDRESS_MSB | (page >> 4)),
        Step::Command(cmd::SET_COLUMN_ADDRESS),
        Step::Data(column_offset),
        Step::Command(cmd::WRITE_DATA),
    ]
}
