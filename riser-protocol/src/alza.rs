//! Alza desk controller decoder (reference variant)
//!
//! Frame format:
//! - START (1 byte): 0x5A synchronization byte
//! - DIGIT1..DIGIT3 (3 bytes): seven-segment codes for the height display
//! - MODE (1 byte): display-mode byte, not part of the height
//! - CHECKSUM (1 byte): sum of the 4 payload bytes, modulo 256
//!
//! The decimal point rides on the high bit of DIGIT2. That asymmetry (the
//! flag belongs to the middle digit, not the tenths digit) matches the
//! physical display wiring and is reproduced exactly.

use crate::decoder::{DecodeError, HeightDecoder};
use crate::digit::{decode_digit, has_decimal_point};

/// Frame synchronization byte
pub const FRAME_START: u8 = 0x5A;

/// Payload length: three digit bytes plus the mode byte
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

/// State machine for parsing Alza height frames
#[derive(Debug, Clone)]
pub struct AlzaDecoder {
    state: State,
    buf: [u8; PAYLOAD_LEN],
    checksum: u8,
}

impl Default for AlzaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlzaDecoder {
    /// Create a new decoder in its scanning state
    pub fn new() -> Self {
        Self {
            state: State::WaitStart,
            buf: [0; PAYLOAD_LEN],
            checksum: 0,
        }
    }
}

impl HeightDecoder for AlzaDecoder {
    fn feed(&mut self, byte: u8) -> Result<bool, DecodeError> {
        match self.state {
            State::WaitStart => {
                if byte == FRAME_START {
                    self.checksum = 0;
                    self.state = State::Payload(0);
                }
                // Silently ignore non-START bytes while scanning
                Ok(false)
            }
            State::Payload(i) => {
                self.buf[i as usize] = byte;
                self.checksum = self.checksum.wrapping_add(byte);
                self.state = if i as usize + 1 == PAYLOAD_LEN {
                    State::Checksum
                } else {
                    State::Payload(i + 1)
                };
                Ok(false)
            }
            State::Checksum => {
                // Either way the next byte starts a fresh scan; the checksum
                // byte itself is never reinterpreted as a start marker.
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

        // Decimal flag lives on the middle digit byte
        let height = if has_decimal_point(self.buf[1]) {
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
