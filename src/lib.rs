//! # Driver for the HX1230 96x68 monochrome LCD controller
//!
//! The HX1230 speaks a 3-wire serial protocol where every transfer is a 9-bit frame: one
//! data/command bit followed by 8 payload bits. Most SPI peripherals only move whole bytes, so
//! this crate re-packs the 9-bit frames into an 8-bit aligned byte stream (see the [frame]
//! module) and sends that over a plain `embedded_hal` SPI writer.
//!
//! The typical workflow is:
//!  - wrap your SPI peripheral and chip-select pin in an [SpiInterface]
//!  - create the driver with [HX1230::new] and call [HX1230::init]
//!  - draw into the in-memory [FrameBuffer] (directly, or with embedded_graphics when the
//!    "graphics" feature is enabled)
//!  - call [HX1230::present] to push the framebuffer to the display RAM
#![no_std]

extern crate embedded_hal as hal;

pub mod addressing;
pub mod config;
pub mod display;
pub mod dummypins;
pub mod error;
pub mod frame;
pub mod framebuffer;
pub mod instructions;
pub mod interface;

#[cfg(feature = "graphics")]
pub mod graphics;

pub use crate::config::{Config, FlipRegister};
pub use crate::display::{DisplayState, Status, HX1230};
pub use crate::error::{ConfigError, Error};
pub use crate::framebuffer::FrameBuffer;
pub use crate::interface::{DisplayInterface, SpiInterface};

/// Width of the display in pixels.
pub const WIDTH: u8 = 96;

/// Height of the display in pixels.
pub const HEIGHT: u8 = 68;

/// Number of 8-row pages in the display RAM. The last page is only half populated.
pub const PAGES: u8 = 9;

/// Size of the framebuffer in bytes, one byte per column per page.
pub const BUFFER_SIZE: usize = PAGES as usize * WIDTH as usize;

/// Number of source bytes packed together into one transport write.
pub const CHUNK_SIZE: usize = 8;

/// Number of transport bytes produced by one packed chunk.
pub const ENCODED_CHUNK_SIZE: usize = CHUNK_SIZE + 1;

/// Number of chunk writes needed to transfer the whole framebuffer.
pub const CHUNKS_PER_FRAME: usize = BUFFER_SIZE / CHUNK_SIZE;

// the chunk packing has no partial-chunk path
const _: () = assert!(BUFFER_SIZE % CHUNK_SIZE == 0);
