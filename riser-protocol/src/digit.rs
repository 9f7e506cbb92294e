//! Seven-segment digit codec
//!
//! The Alza and Omnidesk controllers transmit the raw segment patterns of
//! their seven-segment displays rather than binary numbers. This module maps
//! a segment byte back to the decimal digit it renders.
//!
//! Bit 7 of a segment byte drives the decimal point on some displays and is
//! masked off before the lookup.

/// Canonical seven-segment codes for digits 0-9
///
/// Bit layout: `0b0gfedcba`, segment `a` in bit 0.
pub const SEGMENT_CODES: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

/// Decimal point flag bit
pub const DECIMAL_POINT: u8 = 0x80;

/// Decode a raw segment byte to a decimal digit
///
/// The decimal-point bit is ignored. Returns `None` for any pattern outside
/// the ten canonical codes; an unrecognized pattern is never coerced to a
/// digit.
pub fn decode_digit(raw: u8) -> Option<u8> {
    match raw & !DECIMAL_POINT {
        0x3F => Some(0),
        0x06 => Some(1),
        0x5B => Some(2),
        0x4F => Some(3),
        0x66 => Some(4),
        0x6D => Some(5),
        0x7D => Some(6),
        0x07 => Some(7),
        0x7F => Some(8),
        0x6F => Some(9),
        _ => None,
    }
}

/// Check whether the decimal point is lit on a segment byte
pub fn has_decimal_point(raw: u8) -> bool {
    raw & DECIMAL_POINT != 0
}
