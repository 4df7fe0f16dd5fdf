//! Panel configuration
//!
//! Everything a board may need to tune to bring a particular panel up.
//! Defaults match the 128x128 glass the engine was built for.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use uc1638_protocol::{InitParams, ResetTiming, CONTROLLER_COLUMNS, WIDTH};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Visible window would extend past the controller's last column
    ColumnOffsetOutOfRange {
        /// Offending offset
        offset: u8,
    },
}

/// Panel bring-up configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Register values written by the init script
    pub init: InitParams,
    /// Hardware reset pulse timing
    pub reset: ResetTiming,
}

impl PanelConfig {
    /// Default configuration with a different column offset
    pub const fn with_column_offset(column_offset: u8) -> Self {
        Self {
            init: InitParams {
                column_offset,
                ..InitParams::DEFAULT
            },
            reset: ResetTiming::DEFAULT,
        }
    }

    /// Column offset sent with every page
    pub fn column_offset(&self) -> u8 {
        self.init.column_offset
    }

    /// Check the configuration against the controller's limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        let offset = self.init.column_offset;
        if usize::from(offset) + WIDTH > CONTROLLER_COLUMNS {
            return Err(ConfigError::ColumnOffsetOutOfRange { offset });
        }
        Ok(())
    }
}
