//! # 9-bit frame packing
//!
//! The HX1230 expects 9-bit frames on its serial line: a leading D/C bit (0 = command,
//! 1 = data) followed by the 8 payload bits, most significant bit first. Since the SPI
//! peripheral only shifts whole bytes, the frames are concatenated into one bit stream and
//! cut into bytes again.
//!
//! A single command becomes 2 bytes, the 7 trailing padding bits are clocked in as zeros and
//! ignored by the controller because chip-select is released right after them:
//!
//! ```text
//!  byte 0           byte 1
//!  C b7 b6 b5 b4 b3 b2 b1 | b0 0 0 0 0 0 0 0
//! ```
//!
//! Eight data frames make 72 bits, which is exactly 9 bytes. Every data byte in a chunk is
//! shifted one more bit to the right than the previous one, the bits which fall off the end
//! continue at the top of the next byte, and after 8 frames the stream is byte aligned again.
//!
//! All functions in here are pure and work on fixed-size arrays.

use crate::{CHUNK_SIZE, ENCODED_CHUNK_SIZE};

/// The D/C bit in front of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FrameKind {
    /// payload ends up in the command registers
    Command = 0,
    /// payload ends up in the display RAM
    Data = 1,
}

impl FrameKind {
    fn from_bit(bit: u8) -> FrameKind {
        if bit & 1 == 1 {
            FrameKind::Data
        } else {
            FrameKind::Command
        }
    }
}

/// Pack a single frame into 2 transport bytes.
#[inline]
pub fn encode_frame(kind: FrameKind, payload: u8) -> [u8; 2] {
    [((kind as u8) << 7) | (payload >> 1), (payload & 1) << 7]
}

/// Pack a single command frame (D/C bit low) into 2 transport bytes.
#[inline]
pub fn encode_command(opcode: u8) -> [u8; 2] {
    encode_frame(FrameKind::Command, opcode)
}

/// Pack 8 display RAM bytes into 9 transport bytes, each byte preceded by a data bit.
pub fn encode_chunk(chunk: &[u8; CHUNK_SIZE]) -> [u8; ENCODED_CHUNK_SIZE] {
    let mut out = [0u8; ENCODED_CHUNK_SIZE];
    for (j, &byte) in chunk.iter().enumerate() {
        if j == CHUNK_SIZE - 1 {
            // the last data bit is the lowest bit of byte 7, the payload fills byte 8 as is
            out[j] |= 0x01;
            out[j + 1] = byte;
        } else {
            out[j] |= (0x80 >> j) | (byte >> (j + 1));
            out[j + 1] |= byte << (7 - j);
        }
    }
    out
}

/// Unpack 2 transport bytes back into the frame they carry.
pub fn decode_frame(bytes: [u8; 2]) -> (FrameKind, u8) {
    let kind = FrameKind::from_bit(bytes[0] >> 7);
    let payload = (bytes[0] << 1) | (bytes[1] >> 7);
    (kind, payload)
}

/// Unpack 2 transport bytes into an opcode, `None` if they carry a data frame.
pub fn decode_command(bytes: [u8; 2]) -> Option<u8> {
    match decode_frame(bytes) {
        (FrameKind::Command, opcode) => Some(opcode),
        (FrameKind::Data, _) => None,
    }
}

/// Unpack 9 transport bytes into the 8 frames they carry.
pub fn decode_frames(bytes: &[u8; ENCODED_CHUNK_SIZE]) -> [(FrameKind, u8); CHUNK_SIZE] {
    // 72 bits, frame j starts at bit 9 * j counted from the most significant end
    let stream = bytes
        .iter()
        .fold(0u128, |acc, &byte| (acc << 8) | u128::from(byte));
    let mut frames = [(FrameKind::Command, 0u8); CHUNK_SIZE];
    for (j, frame) in frames.iter_mut().enumerate() {
        let shift = 9 * (CHUNK_SIZE - 1 - j);
        let bits = (stream >> shift) & 0x1FF;
        *frame = (FrameKind::from_bit((bits >> 8) as u8), bits as u8);
    }
    frames
}

/// Unpack 9 transport bytes into the display RAM bytes, `None` if any frame is a command.
pub fn decode_chunk(bytes: &[u8; ENCODED_CHUNK_SIZE]) -> Option<[u8; CHUNK_SIZE]> {
    let mut chunk = [0u8; CHUNK_SIZE];
    for (out, (kind, payload)) in chunk.iter_mut().zip(decode_frames(bytes).iter()) {
        if *kind != FrameKind::Data {
            return None;
        }
        *out = *payload;
    }
    Some(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_bit_layout() {
        assert_eq!(encode_command(0xAF), [0x57, 0x80]);
        assert_eq!(encode_command(0x2F), [0x17, 0x80]);
        assert_eq!(encode_command(0xE2), [0x71, 0x00]);
        assert_eq!(encode_frame(FrameKind::Data, 0xFF), [0xFF, 0x80]);
        assert_eq!(encode_frame(FrameKind::Data, 0x00), [0x80, 0x00]);
    }

    #[test]
    fn every_opcode_survives() {
        for opcode in 0..=255u8 {
            for kind in [FrameKind::Command, FrameKind::Data] {
                let bytes = encode_frame(kind, opcode);
                assert_eq!(bytes[1] & 0x7F, 0, "padding must be zero");
                assert_eq!(decode_frame(bytes), (kind, opcode));
            }
            assert_eq!(decode_command(encode_command(opcode)), Some(opcode));
        }
    }

    #[test]
    fn blank_chunk_only_carries_data_bits() {
        assert_eq!(
            encode_chunk(&[0; CHUNK_SIZE]),
            [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00]
        );
    }

    #[test]
    fn full_chunk_is_all_ones() {
        assert_eq!(encode_chunk(&[0xFF; CHUNK_SIZE]), [0xFF; ENCODED_CHUNK_SIZE]);
    }

    #[test]
    fn chunk_matches_concatenated_frames() {
        let chunk = [0x01, 0x80, 0x55, 0xAA, 0x0F, 0xF0, 0x3C, 0xC3];
        // build the 72 bit stream the slow way
        let mut stream = 0u128;
        for &byte in chunk.iter() {
            stream = (stream << 9) | 0x100 | u128::from(byte);
        }
        let mut expected = [0u8; ENCODED_CHUNK_SIZE];
        for (k, out) in expected.iter_mut().enumerate() {
            *out = (stream >> (8 * (ENCODED_CHUNK_SIZE - 1 - k))) as u8;
        }
        assert_eq!(encode_chunk(&chunk), expected);
        assert_eq!(decode_chunk(&expected), Some(chunk));
    }

    #[test]
    fn last_byte_is_verbatim() {
        let chunk = [0, 0, 0, 0, 0, 0, 0, 0xA5];
        let encoded = encode_chunk(&chunk);
        assert_eq!(encoded[8], 0xA5);
        assert_eq!(encoded[7], 0x01);
    }

    #[test]
    fn command_frames_are_not_a_chunk() {
        let mut encoded = encode_chunk(&[0x12; CHUNK_SIZE]);
        encoded[0] &= 0x7F;
        assert_eq!(decode_chunk(&encoded), None);
        assert_eq!(decode_frames(&encoded)[0], (FrameKind::Command, 0x12));
    }
}
