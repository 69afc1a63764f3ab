//! Graphics support for the HX1230
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "graphics".
//!
//! It implements the embedded_graphics DrawTarget for the [FrameBuffer] and for the driver
//! itself, so all circle/line/text/rectangle/bitmap functions are available on the screen.
//! Drawing never touches the SPI bus, it only changes the framebuffer.
//!
//! The typical workflow for (animated) graphics is:
//!  - clear the framebuffer with `clear(BinaryColor::Off)`
//!  - draw "stuff" into the framebuffer
//!  - HX1230.present() the framebuffer to the display RAM, it now gets visible
//!
//!  The embedded_graphics library is well documented. Please look there for all the juicyness of
//!  graphics functions it provides.
//!  <https://docs.rs/embedded-graphics/latest/embedded_graphics/>
use core::convert::{Infallible, TryInto};

use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*};
use hal::digital::v2::OutputPin;

use crate::{display::HX1230, framebuffer::FrameBuffer, interface::DisplayInterface, HEIGHT, WIDTH};

const MAX_X: u32 = WIDTH as u32 - 1;
const MAX_Y: u32 = HEIGHT as u32 - 1;

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Ok((x @ 0..=MAX_X, y @ 0..=MAX_Y)) = coord.try_into() {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH.into(), HEIGHT.into())
    }
}

// Drawing on the driver draws into its framebuffer.
impl<DI, RST> DrawTarget for HX1230<DI, RST>
where
    DI: DisplayInterface,
    RST: OutputPin<Error = DI::PinError>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.frame_mut().draw_iter(pixels)
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        DrawTarget::clear(self.frame_mut(), color)
    }
}

impl<DI, RST> OriginDimensions for HX1230<DI, RST>
where
    DI: DisplayInterface,
    RST: OutputPin<Error = DI::PinError>,
{
    fn size(&self) -> Size {
        self.frame().size()
    }
}
