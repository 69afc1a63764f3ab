//! Recording stand-ins for the SPI bus, the pins and the delay.
#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;

use hx1230::frame::{decode_chunk, decode_command};
use hx1230::{Config, Error, SpiInterface, HX1230};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ChipSelect(bool),
    Reset(bool),
    Write(Vec<u8>),
    Delay(u8),
}

#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn take(&self) -> Vec<Event> {
        self.0.borrow_mut().drain(..).collect()
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write(bytes) => Some(bytes),
                _ => None,
            })
            .collect()
    }
}

/// Fails every write while `fail` is set, to check the error path.
pub struct RecordingSpi {
    recorder: Recorder,
    pub fail: Rc<RefCell<bool>>,
}

impl SpiWrite<u8> for RecordingSpi {
    type Error = &'static str;

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.recorder.push(Event::Write(words.to_vec()));
        if *self.fail.borrow() {
            Err("bus fault")
        } else {
            Ok(())
        }
    }
}

pub enum Role {
    ChipSelect,
    Reset,
}

pub struct RecordingPin {
    recorder: Recorder,
    role: Role,
}

impl RecordingPin {
    fn record(&self, high: bool) {
        self.recorder.push(match self.role {
            Role::ChipSelect => Event::ChipSelect(high),
            Role::Reset => Event::Reset(high),
        });
    }
}

impl OutputPin for RecordingPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.record(true);
        Ok(())
    }
}

pub struct RecordingDelay(pub Recorder);

impl DelayMs<u8> for RecordingDelay {
    fn delay_ms(&mut self, ms: u8) {
        self.0.push(Event::Delay(ms));
    }
}

pub type TestDisplay = HX1230<SpiInterface<RecordingSpi, RecordingPin>, RecordingPin>;

pub struct Rig {
    pub display: TestDisplay,
    pub recorder: Recorder,
    pub delay: RecordingDelay,
    pub fail: Rc<RefCell<bool>>,
}

pub fn rig(config: Config) -> Rig {
    match try_rig(config) {
        Ok(rig) => rig,
        Err(error) => panic!("rejected config: {}", error),
    }
}

pub fn try_rig(config: Config) -> Result<Rig, Error<&'static str, Infallible>> {
    let recorder = Recorder::default();
    let fail = Rc::new(RefCell::new(false));
    let spi = RecordingSpi {
        recorder: recorder.clone(),
        fail: fail.clone(),
    };
    let cs = RecordingPin {
        recorder: recorder.clone(),
        role: Role::ChipSelect,
    };
    let rst = RecordingPin {
        recorder: recorder.clone(),
        role: Role::Reset,
    };
    let interface = SpiInterface::new(spi, cs).unwrap();
    let display = HX1230::new(interface, rst, config)?;
    recorder.take();
    Ok(Rig {
        display,
        delay: RecordingDelay(recorder.clone()),
        recorder,
        fail,
    })
}

/// A rig that already went through init(), with an empty log.
pub fn ready_rig() -> Rig {
    let mut rig = rig(Config::default());
    rig.display.init(&mut rig.delay).unwrap();
    rig.recorder.take();
    rig
}

/// Opcodes of all 2 byte command writes, in order.
pub fn commands(writes: &[Vec<u8>]) -> Vec<u8> {
    writes
        .iter()
        .filter(|bytes| bytes.len() == 2)
        .map(|bytes| decode_command([bytes[0], bytes[1]]).expect("data frame in a command write"))
        .collect()
}

/// Decoded payload of all 9 byte chunk writes, concatenated.
pub fn ram_bytes(writes: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for bytes in writes.iter().filter(|bytes| bytes.len() == 9) {
        let mut encoded = [0u8; 9];
        encoded.copy_from_slice(bytes);
        out.extend_from_slice(&decode_chunk(&encoded).expect("command frame in a chunk write"));
    }
    out
}

/// Every write must be surrounded by its own chip-select low/high pair.
pub fn assert_bracketed(events: &[Event]) {
    let mut selected = false;
    let mut wrote = false;
    for event in events {
        match event {
            Event::ChipSelect(false) => {
                assert!(!selected, "chip-select asserted twice");
                selected = true;
                wrote = false;
            }
            Event::ChipSelect(true) => {
                assert!(selected, "chip-select released without being asserted");
                assert!(wrote, "empty chip-select bracket");
                selected = false;
            }
            Event::Write(_) => {
                assert!(selected, "write outside of chip-select");
                assert!(!wrote, "two writes in one chip-select bracket");
                wrote = true;
            }
            _ => {}
        }
    }
    assert!(!selected, "chip-select left asserted");
}
