//! Desk controller wire protocols
//!
//! This crate decodes the serial byte streams produced by the height-display
//! controller boards of several standing desk vendors. All vendors share the
//! same physical UART link but differ in framing, checksum formula, and digit
//! encoding:
//!
//! - **Alza**: `0x5A` start marker, three seven-segment digit bytes plus a
//!   display-mode byte, additive checksum
//! - **Jarvis** (Jiecang controller): `F2 F2` sync, command/length/payload,
//!   additive checksum, `7E` terminator, binary height in mm
//! - **Uplift** (Desky-style controller): `98 98` sync, binary height in mm,
//!   additive checksum
//! - **Omnidesk** (Aoke controller): `0xA5` start marker, three seven-segment
//!   digit bytes plus a status byte, XOR checksum
//!
//! Each decoder is a byte-at-a-time state machine with the same external
//! contract (see [`HeightDecoder`]): feed a byte, learn whether a
//! checksum-valid frame just completed, then convert the buffered frame to a
//! height in centimeters on demand.

#![no_std]
#![deny(unsafe_code)]

pub mod alza;
pub mod decoder;
pub mod digit;
pub mod jarvis;
pub mod omnidesk;
pub mod uplift;
pub mod variant;

pub use alza::AlzaDecoder;
pub use decoder::{DecodeError, HeightDecoder};
pub use digit::{decode_digit, has_decimal_point, SEGMENT_CODES};
pub use jarvis::JarvisDecoder;
pub use omnidesk::OmnideskDecoder;
pub use uplift::UpliftDecoder;
pub use variant::{Decoder, DecoderVariant};
