//! Decoder variant enumeration and dispatch
//!
//! The set of supported vendors is closed, so variant dispatch is a plain
//! enum over the concrete decoders rather than trait objects. Switching
//! variants reconstructs the decoder value, abandoning any frame in
//! progress.

use crate::alza::AlzaDecoder;
use crate::decoder::{DecodeError, HeightDecoder};
use crate::jarvis::JarvisDecoder;
use crate::omnidesk::OmnideskDecoder;
use crate::uplift::UpliftDecoder;

/// Vendor protocol spoken by the desk controller
///
/// `Unknown` is a genuine tag meaning "not yet decided": configuration uses
/// it to request auto-detection, and it never corresponds to a live decoder.
/// The variants are listed in probe order; `Alza` is both the last candidate
/// probed and the documented fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecoderVariant {
    /// Variant not yet decided; requests auto-detection
    #[default]
    Unknown,
    Jarvis,
    Uplift,
    Omnidesk,
    Alza,
}

impl DecoderVariant {
    /// Fallback variant when configuration or detection leaves the choice open
    pub const DEFAULT: DecoderVariant = DecoderVariant::Alza;

    /// Successor in probe order, or `None` after the last candidate
    pub fn next(self) -> Option<DecoderVariant> {
        match self {
            DecoderVariant::Unknown => Some(DecoderVariant::Jarvis),
            DecoderVariant::Jarvis => Some(DecoderVariant::Uplift),
            DecoderVariant::Uplift => Some(DecoderVariant::Omnidesk),
            DecoderVariant::Omnidesk => Some(DecoderVariant::Alza),
            DecoderVariant::Alza => None,
        }
    }
}

/// The active decoder for one desk variant
///
/// Closed dispatch over the known vendor decoders; constructing a value for
/// `DecoderVariant::Unknown` substitutes the default variant.
#[derive(Debug, Clone)]
pub enum Decoder {
    Jarvis(JarvisDecoder),
    Uplift(UpliftDecoder),
    Omnidesk(OmnideskDecoder),
    Alza(AlzaDecoder),
}

impl Decoder {
    /// Build a fresh decoder for the given variant
    pub fn for_variant(variant: DecoderVariant) -> Decoder {
        match variant {
            DecoderVariant::Jarvis => Decoder::Jarvis(JarvisDecoder::new()),
            DecoderVariant::Uplift => Decoder::Uplift(UpliftDecoder::new()),
            DecoderVariant::Omnidesk => Decoder::Omnidesk(OmnideskDecoder::new()),
            DecoderVariant::Alza | DecoderVariant::Unknown => {
                Decoder::Alza(AlzaDecoder::new())
            }
        }
    }

    /// Variant tag of this decoder
    pub fn variant(&self) -> DecoderVariant {
        match self {
            Decoder::Jarvis(_) => DecoderVariant::Jarvis,
            Decoder::Uplift(_) => DecoderVariant::Uplift,
            Decoder::Omnidesk(_) => DecoderVariant::Omnidesk,
            Decoder::Alza(_) => DecoderVariant::Alza,
        }
    }
}

impl HeightDecoder for Decoder {
    fn feed(&mut self, byte: u8) -> Result<bool, DecodeError> {
        match self {
            Decoder::Jarvis(d) => d.feed(byte),
            Decoder::Uplift(d) => d.feed(byte),
            Decoder::Omnidesk(d) => d.feed(byte),
            Decoder::Alza(d) => d.feed(byte),
        }
    }

    fn decode(&self) -> Result<f32, DecodeError> {
        match self {
            Decoder::Jarvis(d) => d.decode(),
            Decoder::Uplift(d) => d.decode(),
            Decoder::Omnidesk(d) => d.decode(),
            Decoder::Alza(d) => d.decode(),
        }
    }

    fn reset(&mut self) {
        match self {
            Decoder::Jarvis(d) => d.reset(),
            Decoder::Uplift(d) => d.reset(),
            Decoder::Omnidesk(d) => d.reset(),
            Decoder::Alza(d) => d.reset(),
        }
    }
}
