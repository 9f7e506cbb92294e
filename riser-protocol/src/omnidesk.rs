//! Omnidesk controller decoder
//!
//! The Omnidesk Ascent uses an Aoke control box that, like the Alza board,
//! streams the raw seven-segment state of its display:
//!
//! - START (1 byte): 0xA5 synchronization byte
//! - DIGIT1..DIGIT3 (3 bytes): seven-segment codes for the height display
//! - STATUS (1 byte): keypad/motion status, not part of the height
//! - CHECKSUM (1 byte): XOR of the 4 payload bytes
//!
//! Unlike Alza, the decimal point rides on the tenths digit itself (DIGIT3).

use crate::decoder::{DecodeError, HeightDecoder};
use crate::digit::{decode_digit, has_decimal_point};

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xA5;

/// Payload length: three digit bytes plus the status byte
const PAYLOAD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// Waiting for START byte
    WaitStart,
    /// Reading payload byte N (0-3)
    Payload(u8),
    /// Waiting for CHECKSUM
    Checksum,
}

/// State machine for parsing Omnidesk height frames
#[derive(Debug, Clone)]
pub struct OmnideskDecoder {
    state: State,
    buf: [u8; PAYLOAD_LEN],
    checksum: u8,
}

impl Default for OmnideskDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl OmnideskDecoder {
    /// Create a new decoder in its scanning state
    pub fn new() -> Self {
        Self {
            state: State::WaitStart,
            buf: [0; PAYLOAD_LEN],
            checksum: 0,
        }
    }
}

impl HeightDecoder for OmnideskDecoder {
    fn feed(&mut self, byte: u8) -> Result<bool, DecodeError> {
        match self.state {
            State::WaitStart => {
                if byte == FRAME_START {
                    self.checksum = 0;
                    self.state = State::Payload(0);
                }
                Ok(false)
            }
            State::Payload(i) => {
                self.buf[i as usize] = byte;
                self.checksum ^= byte;
                self.state = if i as usize + 1 == PAYLOAD_LEN {
                    State::Checksum
                } else {
                    State::Payload(i + 1)
                };
                Ok(false)
            }
            State::Checksum => {
                let expected = self.checksum;
                self.state = State::WaitStart;
                if byte == expected {
                    Ok(true)
                } else {
                    Err(DecodeError::ChecksumMismatch {
                        expected,
                        received: byte,
                    })
                }
            }
        }
    }

    fn decode(&self) -> Result<f32, DecodeError> {
        let d0 = decode_digit(self.buf[0]).ok_or(DecodeError::UnknownDigit)?;
        let d1 = decode_digit(self.buf[1]).ok_or(DecodeError::UnknownDigit)?;
        let d2 = decode_digit(self.buf[2]).ok_or(DecodeError::UnknownDigit)?;

        // Decimal flag lives on the tenths digit byte
        let height = if has_decimal_point(self.buf[2]) {
            (d0 as f32 * 10.0 + d1 as f32) + d2 as f32 / 10.0
        } else {
            d0 as f32 * 100.0 + d1 as f32 * 10.0 + d2 as f32
        };
        Ok(height)
    }

    fn reset(&mut self) {
        self.state = State::WaitStart;
        self.checksum = 0;
    }
}
