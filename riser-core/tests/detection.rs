//! Detection robustness against line noise
//!
//! Noise that never forms a checksum-valid frame must not confirm any
//! candidate: detection still walks the full probe order and falls back to
//! the default variant.

use std::cell::Cell;
use std::collections::VecDeque;

use proptest::prelude::*;

use riser_core::{ByteSource, HeightSensor, MonotonicClock, SensorConfig};
use riser_protocol::DecoderVariant;

struct TestClock {
    now: Cell<u64>,
}

impl MonotonicClock for &TestClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

struct NoiseSource {
    bytes: VecDeque<u8>,
}

impl ByteSource for NoiseSource {
    fn available(&self) -> usize {
        self.bytes.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }
}

proptest! {
    #[test]
    fn noise_never_confirms_a_variant(noise in proptest::collection::vec(any::<u8>(), 0..512)) {
        // Strip the start/sync markers so no decoder can leave its scanning
        // state; everything else is fair game.
        let filtered: VecDeque<u8> = noise
            .into_iter()
            .filter(|&b| !matches!(b, 0x5A | 0xA5 | 0xF2 | 0x98))
            .collect();

        let clock = TestClock { now: Cell::new(0) };
        let mut sensor = HeightSensor::new(SensorConfig::default(), &clock);
        let mut source = NoiseSource { bytes: filtered };

        let mut seen = vec![sensor.variant()];
        while sensor.is_detecting() {
            clock.now.set(clock.now.get() + 1001);
            sensor.poll(&mut source);
            seen.push(sensor.variant());
        }

        prop_assert!(sensor.detection_failed());
        prop_assert_eq!(sensor.last_read(), None);
        prop_assert_eq!(sensor.variant(), DecoderVariant::Alza);
        // Every candidate was probed exactly once, in order
        prop_assert_eq!(
            seen,
            vec![
                DecoderVariant::Jarvis,
                DecoderVariant::Uplift,
                DecoderVariant::Omnidesk,
                DecoderVariant::Alza,
                DecoderVariant::Alza,
            ]
        );
    }
}
