//! Driver configuration.
//!
//! The defaults reproduce the init sequence of the common HX1230 breakout boards: full
//! contrast, no inversion, no mirroring and start line 0.

use crate::error::ConfigError;
use crate::instructions::Instruction;

/// Serial clock used when nothing else is configured.
pub const DEFAULT_BAUDRATE: u32 = 4_000_000;

/// Fastest serial clock the HX1230 accepts.
pub const MAX_BAUDRATE: u32 = 10_000_000;

/// Which register the vertical flip writes to.
///
/// The reference init code flips vertically through the segment remap register, which mirrors
/// the columns instead of the rows. `Segment` keeps that behaviour so existing setups look
/// the same, `Common` writes the common remap register instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlipRegister {
    #[default]
    Segment,
    Common,
}

impl FlipRegister {
    pub(crate) fn instruction(self, flip: bool) -> Instruction {
        match self {
            FlipRegister::Segment => Instruction::SegmentRemap(flip),
            FlipRegister::Common => Instruction::CommonRemap(flip),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// serial clock in Hz the SPI peripheral is set up with
    pub baudrate: u32,
    /// contrast written during init, 0..32
    pub contrast: u8,
    /// invert the display during init
    pub inverted: bool,
    /// mirror the columns during init
    pub flip_horizontal: bool,
    /// mirror the rows during init
    pub flip_vertical: bool,
    /// start line written during init, 0..64
    pub start_line: u8,
    /// register used by the vertical flip
    pub vertical_flip: FlipRegister,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            baudrate: DEFAULT_BAUDRATE,
            contrast: 31,
            inverted: false,
            flip_horizontal: false,
            flip_vertical: false,
            start_line: 0,
            vertical_flip: FlipRegister::Segment,
        }
    }
}

impl Config {
    /// Same as [Config::default].
    pub fn new() -> Self {
        Self::default()
    }

    /// Serial clock in Hz, checked by [validate()](Config::validate).
    pub fn with_baudrate(mut self, baudrate: u32) -> Self {
        self.baudrate = baudrate;
        self
    }

    /// Contrast written during init, higher bits than 0x1F are dropped.
    pub fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Start in inverse video.
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Start with the columns mirrored.
    pub fn with_flip_horizontal(mut self, flip: bool) -> Self {
        self.flip_horizontal = flip;
        self
    }

    /// Start with the vertical flip set, see [FlipRegister].
    pub fn with_flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    /// Start line written during init, higher bits than 0x3F are dropped.
    pub fn with_start_line(mut self, start_line: u8) -> Self {
        self.start_line = start_line;
        self
    }

    /// Register the vertical flip writes to.
    pub fn with_vertical_flip_register(mut self, register: FlipRegister) -> Self {
        self.vertical_flip = register;
        self
    }

    /// Check the settings which can't be fixed by masking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baudrate == 0 || self.baudrate > MAX_BAUDRATE {
            return Err(ConfigError::UnsupportedBaudrate(self.baudrate));
        }
        Ok(())
    }
}
