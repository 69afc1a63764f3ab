//! # Module defining the instruction set of the HX1230
//!
//! All instructions are implemented as an enum, the arguments are plain integers or booleans.
//! The opcodes follow the HX1230 data sheet, which shares most of its command set with the
//! PCF8814 and other 96x68 controllers used in old Nokia phones.
//!
//! Numeric arguments are masked to the width of their register field before they are combined
//! with the opcode. Out of range values are silently truncated, the same way the controller
//! itself ignores the upper bits.
//!
//! ## Contrast
//! The contrast (electronic volume) is a 5 bit value. Higher values mean a higher LCD drive
//! voltage, so darker pixels. The default 31 is the maximum and works well on the common
//! red/blue breakout boards.
//!
//! ## Segment and common remap
//! SEG remap mirrors the display horizontally (column 0 becomes the rightmost column), COM
//! remap mirrors it vertically.
//!
//! ## Start line
//! Scrolls the picture vertically by changing the display RAM row that is shown on the first
//! line of the glass, a 6 bit value in 0..64.

/// Raw opcodes and register field masks.
pub mod opcode {
    pub const POWER_ON: u8 = 0x2F;
    pub const POWER_OFF: u8 = 0x28;
    pub const CONTRAST: u8 = 0x80;
    pub const SEG_NORMAL: u8 = 0xA0;
    pub const SEG_REMAP: u8 = 0xA1;
    pub const DISPLAY_NORMAL: u8 = 0xA4;
    pub const DISPLAY_TEST: u8 = 0xA5;
    pub const INVERT_OFF: u8 = 0xA6;
    pub const INVERT_ON: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const START_LINE: u8 = 0x40;
    pub const COM_NORMAL: u8 = 0xC0;
    pub const COM_REMAP: u8 = 0xC8;
    pub const SOFTWARE_RESET: u8 = 0xE2;
    pub const PAGE: u8 = 0xB0;
    pub const COLUMN_HIGH: u8 = 0x10;

    pub const CONTRAST_MASK: u8 = 0x1F;
    pub const START_LINE_MASK: u8 = 0x3F;
    pub const PAGE_MASK: u8 = 0x0F;
    pub const COLUMN_HIGH_MASK: u8 = 0x07;
    pub const COLUMN_LOW_MASK: u8 = 0x0F;
}

use opcode::*;

/// HX1230 instruction set, see data sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// switch the booster, regulator and follower on (true) or off (false)
    // translates to: 0x2F or 0x28
    Power(bool),

    /// set contrast
    // translates to: 0x80 OR with 5 bits contrast value (0-31)
    Contrast(u8),

    /// mirror the columns
    // translates to: 0xA0 or 0xA1
    SegmentRemap(bool),

    /// mirror the rows
    // translates to: 0xC0 or 0xC8
    CommonRemap(bool),

    /// light up every pixel regardless of the display RAM
    // translates to: 0xA4 or 0xA5
    TestPattern(bool),

    /// show the display RAM inverted
    // translates to: 0xA6 or 0xA7
    Invert(bool),

    /// enable or blank the display output
    // translates to: 0xAF or 0xAE
    DisplayOn(bool),

    /// set the display RAM row shown on the first line
    // translates to: 0x40 OR with 6 bits start line (0-63)
    StartLine(u8),

    /// reset all registers to their defaults
    // translates to: 0xE2
    SoftwareReset,

    /// set the page address of the display RAM cursor; 0 =< page =< 8
    // translates to: 0xB0 OR with 4 bits page
    Page(u8),

    /// set the upper 3 bits of the column address
    // translates to: 0x10 OR with bits 6..4 of the column
    ColumnHigh(u8),

    /// set the lower 4 bits of the column address
    // translates to: the bare bits 3..0 of the column
    ColumnLow(u8),
}

use Instruction::*;

impl Instruction {
    /// Returns the specific instruction as the 8 bit payload of a command frame
    pub fn byte(self) -> u8 {
        match self {
            Power(true) => POWER_ON,
            Power(false) => POWER_OFF,
            Contrast(value) => CONTRAST | (value & CONTRAST_MASK),
            SegmentRemap(true) => SEG_REMAP,
            SegmentRemap(false) => SEG_NORMAL,
            CommonRemap(true) => COM_REMAP,
            CommonRemap(false) => COM_NORMAL,
            TestPattern(true) => DISPLAY_TEST,
            TestPattern(false) => DISPLAY_NORMAL,
            Invert(true) => INVERT_ON,
            Invert(false) => INVERT_OFF,
            DisplayOn(true) => DISPLAY_ON,
            DisplayOn(false) => DISPLAY_OFF,
            StartLine(line) => START_LINE | (line & START_LINE_MASK),
            SoftwareReset => SOFTWARE_RESET,
            Page(page) => PAGE | (page & PAGE_MASK),
            ColumnHigh(column) => COLUMN_HIGH | ((column >> 4) & COLUMN_HIGH_MASK),
            ColumnLow(column) => column & COLUMN_LOW_MASK,
        }
    }
}

/// The register writes of the init sequence that follow power up, in the order they have to
/// be sent. `vertical_flip` is the instruction used for the vertical flip register.
pub fn init_sequence(
    contrast: u8,
    inverted: bool,
    flip_horizontal: bool,
    vertical_flip: Instruction,
    start_line: u8,
) -> [Instruction; 8] {
    [
        Power(true),
        Contrast(contrast),
        Invert(inverted),
        TestPattern(false),
        SegmentRemap(flip_horizontal),
        vertical_flip,
        DisplayOn(true),
        StartLine(start_line),
    ]
}

/// A prelude for convenience, it pulls the instruction enum and its variants into scope.
pub mod prelude {
    pub use super::{Instruction, Instruction::*};
}
