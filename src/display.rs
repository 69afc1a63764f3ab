//! # Main driver for the HX1230
//!
//! In here are the data structures and functions that keep track of the display status and
//! send register writes and framebuffer data to the device.
//!
//! Typically you want to look into the following functions:
//!  - HX1230::new() to create a new driver instance
//!  - HX1230::init() to reset the controller, configure it and blank the screen
//!  - HX1230::frame_mut() to draw into the framebuffer, and HX1230::present() to show it
//!  - HX1230::set_contrast() to change the contrast of the display
//! The other setters are more "advanced": inverse video, mirroring, scrolling through the start
//! line, the all-pixels-on test pattern and powering the LCD down to save energy.
//!
//! Register writes and present() work in every state. While powered off the controller keeps
//! its RAM and registers, it just doesn't show anything until powered on again.
use hal::blocking::delay::DelayMs;
use hal::digital::v2::OutputPin;

use crate::{
    addressing::Cursor,
    config::Config,
    dummypins::DummyOutputPin,
    error::Error,
    frame::{encode_chunk, encode_command},
    framebuffer::FrameBuffer,
    instructions::{init_sequence, opcode, prelude::*},
    interface::DisplayInterface,
};

/// Length of the low and the high phase of the hardware reset pulse.
pub const RESET_PULSE_MS: u8 = 50;

type DisplayResult<DI> = Result<
    (),
    Error<<DI as DisplayInterface>::SpiError, <DI as DisplayInterface>::PinError>,
>;

/// Lifecycle of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// created, init() not run yet, or the registers were reset by software
    Uninitialized,
    /// configured and powered
    Ready,
    /// configured, booster and regulators off
    PoweredOff,
}

/// Register state as last written to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    pub power: bool,
    pub contrast: u8,
    pub inverted: bool,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub test_pattern: bool,
    pub start_line: u8,
    pub display_on: bool,
}

impl DisplayState {
    /// Nothing written yet, as after power up or a software reset.
    pub const RESET: DisplayState = DisplayState {
        power: false,
        contrast: 0,
        inverted: false,
        flip_horizontal: false,
        flip_vertical: false,
        test_pattern: false,
        start_line: 0,
        display_on: false,
    };

    /// The state the init sequence leaves the controller in.
    pub fn initialized(config: &Config) -> DisplayState {
        DisplayState {
            power: true,
            contrast: config.contrast & opcode::CONTRAST_MASK,
            inverted: config.inverted,
            flip_horizontal: config.flip_horizontal,
            flip_vertical: config.flip_vertical,
            test_pattern: false,
            start_line: config.start_line & opcode::START_LINE_MASK,
            display_on: true,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::RESET
    }
}

/// main struct for state keeping of the HX1230 driver
///
/// Holds the transport, the optional reset pin and the framebuffer that drawing code renders
/// into.
#[derive(Debug)]
pub struct HX1230<DI, RST>
where
    DI: DisplayInterface,
    RST: OutputPin<Error = DI::PinError>,
{
    interface: DI,
    rst: Option<RST>,
    config: Config,
    state: DisplayState,
    status: Status,
    frame: FrameBuffer,
}

impl<DI, RST> HX1230<DI, RST>
where
    DI: DisplayInterface,
    RST: OutputPin<Error = DI::PinError>,
{
    /// Create a new instance of the HX1230 driver
    ///
    /// Arguments:
    ///
    /// - interface: the transport, usually an [SpiInterface](crate::SpiInterface)
    /// - rst: Reset, a GPIO OutputPin connected to RST on the display
    /// - config: baud rate and the register values written by init()
    ///
    /// Nothing is sent to the display before [init()](HX1230::init).
    pub fn new(
        interface: DI,
        rst: RST,
        config: Config,
    ) -> Result<Self, Error<DI::SpiError, DI::PinError>> {
        Self::with_reset_pin(interface, Some(rst), config)
    }

    fn with_reset_pin(
        interface: DI,
        rst: Option<RST>,
        config: Config,
    ) -> Result<Self, Error<DI::SpiError, DI::PinError>> {
        config.validate()?;
        Ok(HX1230 {
            interface,
            rst,
            config,
            state: DisplayState::RESET,
            status: Status::Uninitialized,
            frame: FrameBuffer::new(),
        })
    }

    /// Reset and configure the controller, then blank the display RAM.
    ///
    /// Sends power on, contrast, invert, test pattern off, both flips, display on and the start
    /// line, in that order, followed by a cleared frame. Power has to be up before any of the
    /// display registers are written.
    pub fn init<D: DelayMs<u8>>(&mut self, delay: &mut D) -> DisplayResult<DI> {
        #[cfg(feature = "defmt")]
        defmt::debug!("hx1230: init {}", self.config);

        self.hardware_reset(delay)?;

        let sequence = init_sequence(
            self.config.contrast,
            self.config.inverted,
            self.config.flip_horizontal,
            self.config
                .vertical_flip
                .instruction(self.config.flip_vertical),
            self.config.start_line,
        );
        for instruction in sequence.iter() {
            self.write_command(*instruction)?;
        }
        self.state = DisplayState::initialized(&self.config);
        self.status = Status::Ready;

        self.clear()
    }

    /// Pulse the reset line, 50 ms low and 50 ms high. Does nothing without a reset pin.
    ///
    /// Only the pulse is sent, call init() afterwards to configure the controller.
    pub fn hardware_reset<D: DelayMs<u8>>(&mut self, delay: &mut D) -> DisplayResult<DI> {
        if let Some(rst) = self.rst.as_mut() {
            #[cfg(feature = "defmt")]
            defmt::debug!("hx1230: reset pulse");

            Error::pin(rst.set_low())?;
            delay.delay_ms(RESET_PULSE_MS);
            Error::pin(rst.set_high())?;
            delay.delay_ms(RESET_PULSE_MS);

            self.state = DisplayState::RESET;
            self.status = Status::Uninitialized;
        }
        Ok(())
    }

    /// Reset all registers by command. The display RAM is kept, init() has to run again.
    pub fn software_reset(&mut self) -> DisplayResult<DI> {
        self.write_command(SoftwareReset)?;
        self.state = DisplayState::RESET;
        self.status = Status::Uninitialized;
        Ok(())
    }

    /// Zero the framebuffer and present it.
    pub fn clear(&mut self) -> DisplayResult<DI> {
        self.frame.clear();
        self.present()
    }

    /// Write the framebuffer to the display RAM.
    ///
    /// Moves the RAM cursor to the origin and sends the buffer in 108 chunks of 8 bytes, each
    /// packed into 9 bytes and sent as its own chip-select bracketed transfer. If a chunk fails
    /// the cursor position is unknown, presenting again starts over from the origin.
    pub fn present(&mut self) -> DisplayResult<DI> {
        #[cfg(feature = "defmt")]
        defmt::trace!("hx1230: present");

        self.set_cursor(Cursor::ORIGIN)?;
        for chunk in self.frame.chunks() {
            self.interface.send(&encode_chunk(&chunk))?;
        }
        Ok(())
    }

    /// Move the display RAM write cursor. Page and column are masked, not validated.
    pub fn set_cursor(&mut self, cursor: Cursor) -> DisplayResult<DI> {
        for instruction in cursor.instructions().iter() {
            self.write_command(*instruction)?;
        }
        Ok(())
    }

    /// Send a single command to the HX1230 chip.
    pub fn write_command(&mut self, instruction: Instruction) -> DisplayResult<DI> {
        self.interface.send(&encode_command(instruction.byte()))
    }

    /// Switch booster and regulators on. The display RAM and registers are kept while off.
    pub fn power_on(&mut self) -> DisplayResult<DI> {
        self.set_power(true)
    }

    /// Switch booster and regulators off, the display shows nothing until powered on again.
    pub fn power_off(&mut self) -> DisplayResult<DI> {
        self.set_power(false)
    }

    fn set_power(&mut self, on: bool) -> DisplayResult<DI> {
        #[cfg(feature = "defmt")]
        defmt::debug!("hx1230: power {}", on);

        self.write_command(Power(on))?;
        self.state.power = on;
        // only init() leaves Uninitialized
        self.status = match (on, self.status) {
            (_, Status::Uninitialized) => Status::Uninitialized,
            (false, _) => Status::PoweredOff,
            (true, Status::PoweredOff) => Status::Ready,
            (true, status) => status,
        };
        Ok(())
    }

    /// Set the contrast in range 0..32, higher bits are dropped.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<DI> {
        self.write_command(Contrast(contrast))?;
        self.state.contrast = contrast & opcode::CONTRAST_MASK;
        Ok(())
    }

    /// Show the display RAM inverted (pixel "off" is a black dot).
    pub fn set_invert(&mut self, inverted: bool) -> DisplayResult<DI> {
        self.write_command(Invert(inverted))?;
        self.state.inverted = inverted;
        Ok(())
    }

    /// Light up every pixel regardless of the display RAM.
    pub fn set_test_pattern(&mut self, enabled: bool) -> DisplayResult<DI> {
        self.write_command(TestPattern(enabled))?;
        self.state.test_pattern = enabled;
        Ok(())
    }

    /// Mirror the display left to right.
    pub fn set_flip_horizontal(&mut self, flip: bool) -> DisplayResult<DI> {
        self.write_command(SegmentRemap(flip))?;
        self.state.flip_horizontal = flip;
        Ok(())
    }

    /// Mirror the display top to bottom.
    ///
    /// With the default [FlipRegister::Segment](crate::FlipRegister::Segment) this writes the
    /// segment remap register like the reference init code does, which mirrors columns and
    /// not rows. Configure [FlipRegister::Common](crate::FlipRegister::Common) to write the
    /// common remap register instead.
    pub fn set_flip_vertical(&mut self, flip: bool) -> DisplayResult<DI> {
        self.write_command(self.config.vertical_flip.instruction(flip))?;
        self.state.flip_vertical = flip;
        Ok(())
    }

    /// Enable or blank the display output, the RAM content is kept.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<DI> {
        self.write_command(DisplayOn(on))?;
        self.state.display_on = on;
        Ok(())
    }

    /// Set the RAM row shown on the top line in range 0..64, higher bits are dropped.
    pub fn set_start_line(&mut self, line: u8) -> DisplayResult<DI> {
        self.write_command(StartLine(line))?;
        self.state.start_line = line & opcode::START_LINE_MASK;
        Ok(())
    }

    /// Register values as last written by the driver.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Lifecycle state, see [Status].
    pub fn status(&self) -> Status {
        self.status
    }

    /// The configuration the driver was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The framebuffer as it will be sent by the next present().
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// The framebuffer to draw into. Changes show up on the next present().
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Give back the interface and the reset pin.
    pub fn release(self) -> (DI, Option<RST>) {
        (self.interface, self.rst)
    }
}

impl<DI> HX1230<DI, DummyOutputPin<DI::PinError>>
where
    DI: DisplayInterface,
{
    /// Create a driver for a display without a connected reset line.
    ///
    /// hardware_reset() does nothing in that case, init() relies on the power up state.
    pub fn new_without_reset(
        interface: DI,
        config: Config,
    ) -> Result<Self, Error<DI::SpiError, DI::PinError>> {
        Self::with_reset_pin(interface, None, config)
    }
}
