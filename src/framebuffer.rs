//! In-memory copy of the display RAM.
//!
//! The layout is the one of the HX1230 RAM: byte `page * WIDTH + x` holds the 8 pixels of
//! column `x` in rows `page * 8 .. page * 8 + 8`, bit 0 being the topmost row. Drawing code
//! only works on this buffer, the driver reads it when presenting and zeroes it when clearing.

use crate::{BUFFER_SIZE, CHUNK_SIZE, HEIGHT, WIDTH};

#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        FrameBuffer {
            buffer: [0; BUFFER_SIZE],
        }
    }

    /// Set or clear the pixel at x, y. Pixels outside the display are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if let Some((index, mask)) = Self::locate(x, y) {
            if on {
                self.buffer[index] |= mask;
            } else {
                self.buffer[index] &= !mask;
            }
        }
    }

    /// State of the pixel at x, y; `false` outside the display.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        Self::locate(x, y)
            .map(|(index, mask)| self.buffer[index] & mask != 0)
            .unwrap_or(false)
    }

    /// Set every pixel to `on`.
    pub fn fill(&mut self, on: bool) {
        self.buffer = [if on { 0xFF } else { 0x00 }; BUFFER_SIZE];
    }

    pub fn clear(&mut self) {
        self.fill(false);
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.buffer
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        &mut self.buffer
    }

    /// The buffer in the 8 byte chunks it is transferred in.
    pub fn chunks(&self) -> impl ExactSizeIterator<Item = [u8; CHUNK_SIZE]> + '_ {
        self.buffer.chunks_exact(CHUNK_SIZE).map(|bytes| {
            let mut chunk = [0u8; CHUNK_SIZE];
            chunk.copy_from_slice(bytes);
            chunk
        })
    }

    fn locate(x: u32, y: u32) -> Option<(usize, u8)> {
        if x < u32::from(WIDTH) && y < u32::from(HEIGHT) {
            let index = (y / 8) as usize * WIDTH as usize + x as usize;
            Some((index, 1 << (y % 8)))
        } else {
            None
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.buffer.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("FrameBuffer").field("pixels_on", &lit).finish()
    }
}
