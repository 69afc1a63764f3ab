//! Transport between the driver and the HX1230.
//!
//! The driver only needs one operation: send a run of already packed bytes while chip-select
//! is asserted. Every command and every 9 byte data chunk is its own transfer, chip-select is
//! never held across two of them.
use hal::{blocking, digital::v2::OutputPin};

use crate::error::Error;

pub trait DisplayInterface {
    type SpiError;
    type PinError;

    /// Send `bytes` as one transfer bracketed by chip-select.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Error<Self::SpiError, Self::PinError>>;
}

/// Asserted chip-select line, deasserted again when released or dropped.
///
/// Chip-select is active low.
pub struct ChipSelect<'a, CS>
where
    CS: OutputPin,
{
    cs: &'a mut CS,
    asserted: bool,
}

impl<'a, CS> ChipSelect<'a, CS>
where
    CS: OutputPin,
{
    pub fn select(cs: &'a mut CS) -> Result<ChipSelect<'a, CS>, CS::Error> {
        cs.set_low()?;
        Ok(ChipSelect { cs, asserted: true })
    }

    /// Deassert chip-select and report the pin error, if any.
    pub fn release(mut self) -> Result<(), CS::Error> {
        self.asserted = false;
        self.cs.set_high()
    }
}

impl<CS> Drop for ChipSelect<'_, CS>
where
    CS: OutputPin,
{
    fn drop(&mut self) {
        if self.asserted {
            // nobody is left to report this error to
            let _ = self.cs.set_high();
        }
    }
}

/// HX1230 connected to an 8 bit SPI peripheral and a chip-select GPIO.
///
/// The 3-wire HX1230 has no D/C pin, the D/C bit is part of every frame.
#[derive(Debug)]
pub struct SpiInterface<SPI, CS>
where
    SPI: blocking::spi::Write<u8>,
    CS: OutputPin,
{
    spi: SPI,
    cs: CS,
}

impl<SPI, CS, SpiErr, PinErr> SpiInterface<SPI, CS>
where
    SPI: blocking::spi::Write<u8, Error = SpiErr>,
    CS: OutputPin<Error = PinErr>,
{
    pub fn new(spi: SPI, mut cs: CS) -> Result<SpiInterface<SPI, CS>, PinErr> {
        cs.set_high()?;
        Ok(SpiInterface { spi, cs })
    }

    /// Give back the SPI peripheral and the chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS, SpiErr, PinErr> DisplayInterface for SpiInterface<SPI, CS>
where
    SPI: blocking::spi::Write<u8, Error = SpiErr>,
    CS: OutputPin<Error = PinErr>,
{
    type SpiError = SpiErr;
    type PinError = PinErr;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Error<SpiErr, PinErr>> {
        let selected = Error::pin(ChipSelect::select(&mut self.cs))?;
        let written = self.spi.write(bytes);
        // deselect before reporting a failed write
        Error::pin(selected.release())?;
        Error::spi(written)
    }
}
