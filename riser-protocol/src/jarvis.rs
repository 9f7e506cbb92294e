//! Jarvis desk controller decoder
//!
//! The Jarvis (Fully) desk uses a Jiecang control box. Frames on the
//! handset line, as reverse-engineered by the community:
//!
//! - SYNC (2 bytes): 0xF2 0xF2
//! - COMMAND (1 byte): report type; 0x01 is the height report
//! - LENGTH (1 byte): payload length (0-8)
//! - PAYLOAD (0-8 bytes)
//! - CHECKSUM (1 byte): sum of COMMAND, LENGTH, and PAYLOAD, modulo 256
//! - END (1 byte): 0x7E terminator
//!
//! Height reports carry the height as a big-endian u16 in millimeters in the
//! first two payload bytes. Valid frames with other command bytes are
//! absorbed without signaling completion.

use heapless::Vec;

use crate::decoder::{DecodeError, HeightDecoder};

/// Frame synchronization byte, sent twice
pub const FRAME_SYNC: u8 = 0xF2;

/// Frame terminator byte
pub const FRAME_END: u8 = 0x7E;

/// Height report command byte
pub const CMD_HEIGHT: u8 = 0x01;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// Waiting for the first SYNC byte
    WaitSync1,
    /// Waiting for the second SYNC byte
    WaitSync2,
    /// Waiting for COMMAND
    Command,
    /// Waiting for LENGTH
    Length,
    /// Reading payload bytes
    Payload,
    /// Waiting for CHECKSUM
    Checksum,
    /// Waiting for the END terminator
    End,
}

/// State machine for parsing Jiecang frames from a Jarvis desk
#[derive(Debug, Clone)]
pub struct JarvisDecoder {
    state: State,
    command: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
    expected_length: u8,
    checksum: u8,
}

impl Default for JarvisDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JarvisDecoder {
    /// Create a new decoder in its scanning state
    pub fn new() -> Self {
        Self {
            state: State::WaitSync1,
            command: 0,
            payload: Vec::new(),
            expected_length: 0,
            checksum: 0,
        }
    }
}

impl HeightDecoder for JarvisDecoder {
    fn feed(&mut self, byte: u8) -> Result<bool, DecodeError> {
        match self.state {
            State::WaitSync1 => {
                if byte == FRAME_SYNC {
                    self.state = State::WaitSync2;
                }
                Ok(false)
            }
            State::WaitSync2 => {
                if byte == FRAME_SYNC {
                    self.checksum = 0;
                    self.state = State::Command;
                } else {
                    self.state = State::WaitSync1;
                }
                Ok(false)
            }
            State::Command => {
                // Extra sync repetitions (e.g. after a partial frame ending
                // in 0xF2) are skipped so the real command byte lines up.
                if byte == FRAME_SYNC {
                    return Ok(false);
                }
                self.command = byte;
                self.checksum = byte;
                self.state = State::Length;
                Ok(false)
            }
            State::Length => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    // Oversized frame, abandon and rescan
                    self.reset();
                    return Ok(false);
                }
                self.expected_length = byte;
                self.checksum = self.checksum.wrapping_add(byte);
                self.payload.clear();
                self.state = if byte == 0 {
                    State::Checksum
                } else {
                    State::Payload
                };
                Ok(false)
            }
            State::Payload => {
                // Cannot overflow: expected_length is bounded above
                let _ = self.payload.push(byte);
                self.checksum = self.checksum.wrapping_add(byte);
                if self.payload.len() == self.expected_length as usize {
                    self.state = State::Checksum;
                }
                Ok(false)
            }
            State::Checksum => {
                let expected = self.checksum;
                if byte == expected {
                    self.state = State::End;
                    Ok(false)
                } else {
                    self.state = State::WaitSync1;
                    Err(DecodeError::ChecksumMismatch {
                        expected,
                        received: byte,
                    })
                }
            }
            State::End => {
                self.state = State::WaitSync1;
                // Only checksum-valid, correctly terminated height reports
                // complete; other report types are absorbed.
                Ok(byte == FRAME_END && self.command == CMD_HEIGHT && self.payload.len() >= 2)
            }
        }
    }

    fn decode(&self) -> Result<f32, DecodeError> {
        if self.payload.len() < 2 {
            return Err(DecodeError::UnknownDigit);
        }
        let raw = u16::from_be_bytes([self.payload[0], self.payload[1]]);
        Ok(raw as f32 / 10.0)
    }

    fn reset(&mut self) {
        self.state = State::WaitSync1;
        self.command = 0;
        self.payload.clear();
        self.expected_length = 0;
        self.checksum = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a valid frame for the given command and payload
    fn frame(command: u8, payload: &[u8]) -> Vec<u8, 16> {
        let mut checksum = command.wrapping_add(payload.len() as u8);
        for &b in payload {
            checksum = checksum.wrapping_add(b);
        }
        let mut bytes = Vec::new();
        bytes
            .extend_from_slice(&[FRAME_SYNC, FRAME_SYNC, command, payload.len() as u8])
            .unwrap();
        bytes.extend_from_slice(payload).unwrap();
        bytes.extend_from_slice(&[checksum, FRAME_END]).unwrap();
        bytes
    }

    fn feed_all(decoder: &mut JarvisDecoder, bytes: &[u8]) -> bool {
        let mut complete = false;
        for &b in bytes {
            complete = decoder.feed(b).unwrap_or(false);
        }
        complete
    }

    #[test]
    fn test_height_report() {
        // 1285 mm = 128.5 cm
        let mut decoder = JarvisDecoder::new();
        assert!(feed_all(&mut decoder, &frame(CMD_HEIGHT, &[0x05, 0x05, 0x07])));
        assert_eq!(decoder.decode(), Ok(128.5));
    }

    #[test]
    fn test_completes_only_on_terminator() {
        let mut decoder = JarvisDecoder::new();
        let bytes = frame(CMD_HEIGHT, &[0x02, 0xEE, 0x07]);
        let last = bytes.len() - 1;
        for &b in &bytes[..last] {
            assert_eq!(decoder.feed(b), Ok(false));
        }
        assert_eq!(decoder.feed(bytes[last]), Ok(true));
        assert_eq!(decoder.decode(), Ok(75.0)); // 0x02EE = 750 mm
    }

    #[test]
    fn test_non_height_report_absorbed() {
        let mut decoder = JarvisDecoder::new();
        assert!(!feed_all(&mut decoder, &frame(0x04, &[0x01])));
    }

    #[test]
    fn test_checksum_mismatch_rescans() {
        let mut decoder = JarvisDecoder::new();
        let mut bytes = frame(CMD_HEIGHT, &[0x05, 0x05, 0x07]);
        let checksum_idx = bytes.len() - 2;
        bytes[checksum_idx] ^= 0xFF;

        assert!(!feed_all(&mut decoder, &bytes));

        // A following valid frame parses normally
        assert!(feed_all(&mut decoder, &frame(CMD_HEIGHT, &[0x02, 0xEE, 0x07])));
        assert_eq!(decoder.decode(), Ok(75.0));
    }

    #[test]
    fn test_oversized_length_abandoned() {
        let mut decoder = JarvisDecoder::new();
        assert_eq!(decoder.feed(FRAME_SYNC), Ok(false));
        assert_eq!(decoder.feed(FRAME_SYNC), Ok(false));
        assert_eq!(decoder.feed(CMD_HEIGHT), Ok(false));
        assert_eq!(decoder.feed(0x20), Ok(false)); // length 32 > max

        // Machine is rescanning
        assert!(feed_all(&mut decoder, &frame(CMD_HEIGHT, &[0x05, 0x05, 0x07])));
    }

    #[test]
    fn test_resync_after_garbage() {
        let mut decoder = JarvisDecoder::new();
        let mut bytes: Vec<u8, 24> = Vec::new();
        bytes.extend_from_slice(&[0x00, 0xF2, 0x13, 0xF2]).unwrap();
        bytes
            .extend_from_slice(&frame(CMD_HEIGHT, &[0x04, 0x00, 0x07]))
            .unwrap();
        assert!(feed_all(&mut decoder, &bytes));
        assert_eq!(decoder.decode(), Ok(102.4)); // 0x0400 = 1024 mm
    }
}
