//! Shared decoder contract
//!
//! Every vendor decoder is a byte-at-a-time state machine behind the same
//! interface: feed bytes until a checksum-valid frame completes, then convert
//! the buffered frame to a height on demand.

/// Errors that can occur while decoding a height frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Trailing checksum did not match the accumulated payload sum
    ChecksumMismatch {
        /// Checksum computed over the received payload
        expected: u8,
        /// Checksum byte actually received
        received: u8,
    },
    /// A segment byte did not map to any digit 0-9
    UnknownDigit,
}

/// Byte-stream decoder for one vendor's height frames
///
/// Implementations loop indefinitely: every accepted or rejected frame
/// returns the machine to its scanning state. Bytes seen while scanning for a
/// start marker are absorbed silently; that implicit resynchronization is the
/// primary robustness mechanism against a line that has lost sync and must
/// not surface as an error.
pub trait HeightDecoder {
    /// Consume one byte from the stream
    ///
    /// Returns `Ok(true)` exactly when this byte completed a checksum-valid
    /// frame, `Ok(false)` when more bytes are needed, or
    /// `Err(DecodeError::ChecksumMismatch)` when a trailing checksum failed.
    /// After a mismatch the frame is discarded and the machine is already
    /// back in its scanning state; the next byte is interpreted as a fresh
    /// start-marker candidate.
    fn feed(&mut self, byte: u8) -> Result<bool, DecodeError>;

    /// Convert the last completed frame to a height in centimeters
    ///
    /// Only meaningful after [`feed`](Self::feed) returned `Ok(true)`.
    fn decode(&self) -> Result<f32, DecodeError>;

    /// Return to the scanning state with a cleared checksum accumulator
    ///
    /// Any frame in progress is abandoned. Does not affect previously
    /// decoded heights held by callers.
    fn reset(&mut self);
}
