//! Displays graphical stuff on an HX1230 96x68 screen
//! This example is for the Raspberry Pico with the rp2040 chip
//!
//! Pin layout and connection for this example
//!
//! display | Pico pin |  Pico function       | purpose
//!  1 RST     pin 26     GP20 (gpio20)         reset: active low to reset display, optional
//!  2 CE      pin 22     GP17 (gpio17)         Chip Enable: active low allows data
//!  3 N/C                                      the 3-wire HX1230 has no D/C pin
//!  4 DIN     pin 25     GP19 (gpio19)         Serial data line
//!  5 CLK     pin 24     GP18 (gpio18)         Serial clock
//!  6 VCC     pin 36     3V3(OUT)              Power to the display
//!  7 BL      pin 21     GP16 (gpio16)         backlight, high is on
//!  8 GND     pin 38     GND                   Ground
//!
//! The SPI peripheral runs in plain 8 bit mode, the driver packs the 9 bit frames.
//! Run with a probe attached to see the defmt log.

#![deny(unsafe_code)]
#![deny(warnings)]
#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt_rtt as _;
use embedded_hal::digital::v2::OutputPin;
use embedded_time::rate::*;
use panic_halt as _;
use rp_pico as bsp;
use bsp::hal::{pac, prelude::*, sio::Sio, watchdog::Watchdog};

use embedded_graphics::{
    mono_font::{ascii::FONT_6X9, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use hx1230::{Config, SpiInterface, HEIGHT, HX1230, WIDTH};

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = bsp::hal::clocks::init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let config = Config::default();

    // The spi driver picks up this pins automatically if they are in the correct mode
    let _spi_sclk = pins.gpio18.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let _spi_mosi = pins.gpio19.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let spi = bsp::hal::Spi::<_, _, 8>::new(pac.SPI0).init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        config.baudrate.Hz(),
        &embedded_hal::spi::MODE_0,
    );

    let cs = pins.gpio17.into_push_pull_output();
    let rst = pins.gpio20.into_push_pull_output();
    let mut backlight = pins.gpio16.into_push_pull_output();
    backlight.set_high().unwrap();

    let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().integer());

    let interface = SpiInterface::new(spi, cs).unwrap();
    let mut display = HX1230::new(interface, rst, config).unwrap();
    display.init(&mut delay).unwrap();
    defmt::info!("display ready");

    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let style = MonoTextStyle::new(&FONT_6X9, BinaryColor::On);
    let (w, h) = (WIDTH as i32, HEIGHT as i32);

    loop {
        // pixels in the corners and the middle
        display.frame_mut().clear();
        display.frame_mut().set_pixel(0, 0, true);
        display.frame_mut().set_pixel(WIDTH as u32 / 2, HEIGHT as u32 / 2, true);
        display.frame_mut().set_pixel(WIDTH as u32 - 1, HEIGHT as u32 - 1, true);
        display.present().unwrap();
        delay.delay_ms(2000);

        defmt::info!("lines");
        display.frame_mut().clear();
        let corners = [
            Point::new(0, 0),
            Point::new(0, h - 1),
            Point::new(w - 1, 0),
            Point::new(w - 1, h - 1),
        ];
        for from in corners.iter() {
            for to in corners.iter() {
                Line::new(*from, *to).into_styled(stroke).draw(&mut display).unwrap();
            }
        }
        display.present().unwrap();
        delay.delay_ms(2000);

        defmt::info!("rectangles");
        display.frame_mut().clear();
        for i in 0..=10 {
            let size = Size::new((w * i / 10) as u32, (h * i / 10) as u32);
            Rectangle::new(Point::zero(), size)
                .into_styled(stroke)
                .draw(&mut display)
                .unwrap();
        }
        display.present().unwrap();
        delay.delay_ms(2000);

        defmt::info!("text");
        display.frame_mut().clear();
        Text::with_baseline("hello world", Point::zero(), style, Baseline::Top)
            .draw(&mut display)
            .unwrap();
        display.present().unwrap();
        delay.delay_ms(2000);

        // flip through the register settings
        display.set_invert(true).unwrap();
        delay.delay_ms(1000);
        display.set_invert(false).unwrap();
        display.set_flip_horizontal(true).unwrap();
        delay.delay_ms(1000);
        display.set_flip_horizontal(false).unwrap();
        for contrast in (0..=31).rev().chain(0..=31) {
            display.set_contrast(contrast).unwrap();
            delay.delay_ms(30);
        }
    }
}
