//! Uplift desk controller decoder
//!
//! The Uplift gesture controller reports height in a short fixed frame,
//! Desky-style:
//!
//! - SYNC (2 bytes): 0x98 0x98
//! - HEIGHT (2 bytes): big-endian u16 in millimeters
//! - CHECKSUM (1 byte): sum of the two height bytes, modulo 256
//!
//! No terminator; the checksum byte closes the frame.

use crate::decoder::{DecodeError, HeightDecoder};

/// Frame synchronization byte, sent twice
pub const FRAME_SYNC: u8 = 0x98;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// Waiting for the first SYNC byte
    WaitSync1,
    /// Waiting for the second SYNC byte
    WaitSync2,
    /// Waiting for the height high byte
    HeightHigh,
    /// Waiting for the height low byte
    HeightLow,
    /// Waiting for CHECKSUM
    Checksum,
}

/// State machine for parsing Uplift height frames
#[derive(Debug, Clone)]
pub struct UpliftDecoder {
    state: State,
    height: [u8; 2],
    checksum: u8,
}

impl Default for UpliftDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpliftDecoder {
    /// Create a new decoder in its scanning state
    pub fn new() -> Self {
        Self {
            state: State::WaitSync1,
            height: [0; 2],
            checksum: 0,
        }
    }
}

impl HeightDecoder for UpliftDecoder {
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
                    self.state = State::HeightHigh;
                } else {
                    self.state = State::WaitSync1;
                }
                Ok(false)
            }
            State::HeightHigh => {
                self.height[0] = byte;
                self.checksum = byte;
                self.state = State::HeightLow;
                Ok(false)
            }
            State::HeightLow => {
                self.height[1] = byte;
                self.checksum = self.checksum.wrapping_add(byte);
                self.state = State::Checksum;
                Ok(false)
            }
            State::Checksum => {
                let expected = self.checksum;
                self.state = State::WaitSync1;
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
        let raw = u16::from_be_bytes(self.height);
        Ok(raw as f32 / 10.0)
    }

    fn reset(&mut self) {
        self.state = State::WaitSync1;
        self.checksum = 0;
    }
}
