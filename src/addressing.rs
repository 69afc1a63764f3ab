//! Display RAM cursor addressing.
//!
//! The display RAM is organised in 9 pages of 8 rows, each page holding 96 column bytes. The
//! write cursor is set with three command frames: the page, the upper 3 column bits and the
//! lower 4 column bits. After every data byte the controller advances the column and wraps
//! into the next page on its own, so one cursor write at (0, 0) is enough for a full frame.

use crate::instructions::Instruction::{self, ColumnHigh, ColumnLow, Page};

/// Position of the display RAM write cursor. `page` counts 8 pixel rows, not single rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub page: u8,
    pub column: u8,
}

impl Cursor {
    /// The top left corner of the display RAM.
    pub const ORIGIN: Cursor = Cursor { page: 0, column: 0 };

    pub fn new(page: u8, column: u8) -> Cursor {
        Cursor { page, column }
    }

    /// The three register writes that move the controller's cursor here, in sending order.
    ///
    /// Values are masked to their register fields, not validated.
    pub fn instructions(self) -> [Instruction; 3] {
        [Page(self.page), ColumnHigh(self.column), ColumnLow(self.column)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PAGES, WIDTH};

    #[test]
    fn origin() {
        let bytes = Cursor::ORIGIN.instructions().map(Instruction::byte);
        assert_eq!(bytes, [0xB0, 0x10, 0x00]);
    }

    #[test]
    fn every_in_range_cursor() {
        for page in 0..PAGES {
            for column in 0..WIDTH {
                let bytes = Cursor::new(page, column).instructions().map(Instruction::byte);
                assert_eq!(
                    bytes,
                    [0xB0 | page, 0x10 | ((column >> 4) & 7), column & 0x0F]
                );
            }
        }
    }

    #[test]
    fn last_column_of_last_page() {
        let bytes = Cursor::new(8, 95).instructions().map(Instruction::byte);
        assert_eq!(bytes, [0xB8, 0x15, 0x0F]);
    }
}
