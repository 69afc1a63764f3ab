//! # Small module to provide a "fake" reset pin
//!
//! The HX1230 has a software reset, so the reset line is optional on most breakout boards.
//! The driver still needs a pin type for it, [HX1230::new_without_reset](crate::HX1230::new_without_reset)
//! fills that slot with a DummyOutputPin which behaves like a working pin but does nothing.

use core::marker::PhantomData;

use embedded_hal::digital::v2::OutputPin;

/// provides a dummy OutputPin.
///
/// The error type is a parameter so the pin can stand in next to real pins of any HAL.
#[derive(Debug, Clone, Copy)]
pub struct DummyOutputPin<E> {
    _error: PhantomData<E>,
}

impl<E> DummyOutputPin<E> {
    pub fn new() -> Self {
        DummyOutputPin {
            _error: PhantomData,
        }
    }
}

impl<E> Default for DummyOutputPin<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> OutputPin for DummyOutputPin<E> {
    type Error = E;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
