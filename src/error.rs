//! Errors of the HX1230 driver.

use core::fmt;

/// Rejected driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// the serial clock in Hz is zero or faster than the controller accepts
    UnsupportedBaudrate(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBaudrate(hz) => write!(f, "unsupported serial clock of {} Hz", hz),
        }
    }
}

/// Everything that can go wrong while talking to the display.
///
/// A failed SPI write is not retried. The controller's RAM cursor is in an unknown state
/// afterwards, a full [present()](crate::HX1230::present) or a reset brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE, PinE> {
    /// the SPI write failed
    Spi(SpiE),
    /// setting the chip-select or reset pin failed
    Pin(PinE),
    /// the driver configuration was rejected
    Config(ConfigError),
}

impl<SpiE, PinE> Error<SpiE, PinE> {
    pub(crate) fn spi<T>(result: Result<T, SpiE>) -> Result<T, Self> {
        result.map_err(Error::Spi)
    }

    pub(crate) fn pin<T>(result: Result<T, PinE>) -> Result<T, Self> {
        result.map_err(Error::Pin)
    }
}

impl<SpiE, PinE> From<ConfigError> for Error<SpiE, PinE> {
    fn from(error: ConfigError) -> Self {
        Error::Config(error)
    }
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(error) => write!(f, "SPI write failed: {:?}", error),
            Self::Pin(error) => write!(f, "pin error: {:?}", error),
            Self::Config(error) => write!(f, "configuration error: {}", error),
        }
    }
}
