//! Stream robustness tests
//!
//! The decoders must never signal a completed frame for arbitrary line
//! noise, and must recover and parse a valid frame after any amount of
//! preceding garbage.

use proptest::prelude::*;

use riser_protocol::digit::{DECIMAL_POINT, SEGMENT_CODES};
use riser_protocol::{Decoder, DecoderVariant, HeightDecoder};

/// A checksum-valid Alza frame reading 128.5
fn alza_frame() -> Vec<u8> {
    let b1 = SEGMENT_CODES[1];
    let b2 = SEGMENT_CODES[2] | DECIMAL_POINT;
    let b3 = SEGMENT_CODES[8];
    let mode = 0x01;
    let checksum = b1.wrapping_add(b2).wrapping_add(b3).wrapping_add(mode);
    vec![0x5A, b1, b2, b3, mode, checksum]
}

fn feed_all(decoder: &mut Decoder, bytes: &[u8]) -> bool {
    let mut complete = false;
    for &b in bytes {
        if decoder.feed(b).unwrap_or(false) {
            complete = true;
        }
    }
    complete
}

proptest! {
    /// Garbage that avoids the start/sync markers never completes a frame
    #[test]
    fn garbage_never_completes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        for variant in [
            DecoderVariant::Jarvis,
            DecoderVariant::Uplift,
            DecoderVariant::Omnidesk,
            DecoderVariant::Alza,
        ] {
            let mut decoder = Decoder::for_variant(variant);
            let filtered: Vec<u8> = bytes
                .iter()
                .copied()
                .filter(|&b| !matches!(b, 0x5A | 0xA5 | 0xF2 | 0x98))
                .collect();
            prop_assert!(!feed_all(&mut decoder, &filtered));
        }
    }

    /// A valid frame parses regardless of what preceded it, as long as the
    /// noise contains no start marker
    #[test]
    fn valid_frame_after_noise(noise in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut decoder = Decoder::for_variant(DecoderVariant::Alza);
        let filtered: Vec<u8> = noise.iter().copied().filter(|&b| b != 0x5A).collect();
        feed_all(&mut decoder, &filtered);
        prop_assert!(feed_all(&mut decoder, &alza_frame()));
        prop_assert_eq!(decoder.decode(), Ok(12.8));
    }

    /// Corrupting any single byte after the start marker prevents completion:
    /// a lone payload flip shifts the additive checksum, and a checksum flip
    /// mismatches the untouched payload
    #[test]
    fn single_byte_corruption_rejected(idx in 1usize..6, flip in 1u8..=255) {
        let mut bytes = alza_frame();
        bytes[idx] ^= flip;

        let mut decoder = Decoder::for_variant(DecoderVariant::Alza);
        prop_assert!(!feed_all(&mut decoder, &bytes));
    }
}

#[test]
fn back_to_back_frames() {
    let mut decoder = Decoder::for_variant(DecoderVariant::Alza);
    let frame = alza_frame();
    let mut completions = 0;
    for _ in 0..3 {
        for &b in &frame {
            if decoder.feed(b).unwrap_or(false) {
                completions += 1;
            }
        }
    }
    assert_eq!(completions, 3);
    assert_eq!(decoder.decode(), Ok(12.8));
}
