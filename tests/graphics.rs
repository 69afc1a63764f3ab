//! Drawing with embedded-graphics into the framebuffer, then presenting it.
#![cfg(feature = "graphics")]

mod common;

use common::{ram_bytes, ready_rig};
use embedded_graphics::{
    mono_font::{ascii::FONT_6X9, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use hx1230::{FrameBuffer, HEIGHT, WIDTH};

#[test]
fn corner_pixels() {
    let mut frame = FrameBuffer::new();
    Pixel(Point::new(0, 0), BinaryColor::On).draw(&mut frame).unwrap();
    Pixel(Point::new(95, 67), BinaryColor::On).draw(&mut frame).unwrap();
    Pixel(Point::new(48, 34), BinaryColor::On).draw(&mut frame).unwrap();

    assert!(frame.pixel(0, 0));
    assert!(frame.pixel(95, 67));
    assert!(frame.pixel(48, 34));
    // row 67 is bit 3 of the last, half populated page
    assert_eq!(frame.as_bytes()[8 * 96 + 95], 0b0000_1000);
}

#[test]
fn line_across_pages() {
    let mut frame = FrameBuffer::new();
    Line::new(Point::new(3, 0), Point::new(3, 67))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut frame)
        .unwrap();

    for page in 0..8 {
        assert_eq!(frame.as_bytes()[page * 96 + 3], 0xFF);
    }
    assert_eq!(frame.as_bytes()[8 * 96 + 3], 0x0F);
}

#[test]
fn rectangle_outline() {
    let mut frame = FrameBuffer::new();
    Rectangle::new(Point::zero(), Size::new(WIDTH.into(), HEIGHT.into()))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut frame)
        .unwrap();

    assert!(frame.pixel(0, 33));
    assert!(frame.pixel(95, 33));
    assert!(frame.pixel(50, 0));
    assert!(frame.pixel(50, 67));
    assert!(!frame.pixel(50, 33));
}

#[test]
fn text_on_the_driver_is_presented() {
    let mut rig = ready_rig();
    let style = MonoTextStyle::new(&FONT_6X9, BinaryColor::On);
    Text::with_baseline("hello world", Point::zero(), style, Baseline::Top)
        .draw(&mut rig.display)
        .unwrap();
    assert_eq!(rig.display.size(), Size::new(96, 68));
    assert!(rig.display.frame().as_bytes()[..96].iter().any(|&b| b != 0));
    // drawing alone never touches the bus
    assert!(rig.recorder.events().is_empty());

    rig.display.present().unwrap();
    let sent = ram_bytes(&rig.recorder.writes());
    assert_eq!(&sent[..], &rig.display.frame().as_bytes()[..]);
}
