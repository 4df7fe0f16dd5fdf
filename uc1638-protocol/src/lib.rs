//! UC1638 Controller Protocol
//!
//! This crate defines everything that travels over the wire between the
//! rendering engine and a UC1638 LCD controller:
//!
//! - The controller command set ([`cmd`])
//! - The bring-up register script as data ([`script`])
//! - The per-page transfer header ([`page`])
//! - The [`Transport`] contract implemented per platform
//!
//! # Wire Overview
//!
//! The controller is driven over a 4-wire SPI-like bus. A separate
//! command/data line (A0) tells the controller whether a byte is a
//! command or a parameter/pixel byte:
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┬──────────┬────────────────┐
//! │ 0x60|PAL │ 0x70|PAH │ 0x04     │ OFFSET   │ 0x01     │ 128 x PIXELS   │
//! │ cmd      │ cmd      │ cmd      │ data     │ cmd      │ data (bulk)    │
//! └──────────┴──────────┴──────────┴──────────┴──────────┴────────────────┘
//! ```
//!
//! Every page of the framebuffer is sent with this header. The panel's first
//! visible column sits at a fixed offset inside the controller RAM, so the
//! column pointer is rewound to that offset before each page.

#![no_std]
#![deny(unsafe_code)]

pub mod cmd;
pub mod page;
pub mod script;
pub mod transport;

#[cfg(feature = "std")]
pub mod recording;

pub use page::{page_header, PAGE_HEADER_LEN};
pub use script::{execute, init_script, InitParams, InitScript, Step, INIT_SCRIPT_CAPACITY};
pub use transport::{ResetTiming, Transport};

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 128;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// First controller column wired to the panel
pub const COLUMN_OFFSET: u8 = 55;

/// Columns addressable inside the controller RAM
pub const CONTROLLER_COLUMNS: usize = 240;
