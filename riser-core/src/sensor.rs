//! Height sensor with decoder variant selection and auto-detection
//!
//! The sensor owns exactly one live decoder, always consistent with its
//! variant tag. When the configured variant is `Unknown` it probes the
//! candidates in enumeration order, giving each a fixed window to produce a
//! checksum-valid frame. Probing keys on checksum survival rather than any
//! vendor signature: the shared UART line and seven-segment digit format
//! make structural detection unreliable, so a valid frame inside the window
//! is the only variant-agnostic confirmation available.

use riser_protocol::{Decoder, DecoderVariant, HeightDecoder};

use crate::config::SensorConfig;
use crate::traits::{ByteSource, HeightSink, MonotonicClock};

/// Auto-detection progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Detection {
    /// Not probing (fixed variant, or a candidate was confirmed)
    Inactive,
    /// Probing the current variant since the recorded instant
    Active { started_at_ms: u64 },
    /// All candidates exhausted; running on the fallback variant
    Failed,
}

/// Standing desk height sensor
///
/// Single-threaded and cooperative: the embedding scheduler calls
/// [`poll`](Self::poll) from its read loop and [`update`](Self::update) on
/// its publish tick, both on the same thread.
#[derive(Debug)]
pub struct HeightSensor<C: MonotonicClock> {
    clock: C,
    detection_window_ms: u32,
    decoder: Decoder,
    detection: Detection,
    /// Last decoded height in cm; `None` until a frame decodes cleanly
    last_read: Option<f32>,
    last_published: Option<f32>,
    checksum_errors: u32,
    digit_errors: u32,
}

impl<C: MonotonicClock> HeightSensor<C> {
    /// Create a sensor for the configured variant
    ///
    /// A configuration with `DecoderVariant::Unknown` starts auto-detection
    /// immediately; the first candidate's probe window opens now.
    pub fn new(config: SensorConfig, clock: C) -> Self {
        let mut sensor = Self {
            clock,
            detection_window_ms: config.detection_window_ms,
            decoder: Decoder::for_variant(config.variant),
            detection: Detection::Inactive,
            last_read: None,
            last_published: None,
            checksum_errors: 0,
            digit_errors: 0,
        };
        if config.variant == DecoderVariant::Unknown {
            sensor.start_detection();
        }
        sensor
    }

    /// Replace the active decoder with a fresh one for `variant`
    ///
    /// `Unknown` is corrected to the default variant. Any frame in progress
    /// is silently abandoned. Returns the effective variant so callers can
    /// log the correction.
    pub fn set_variant(&mut self, variant: DecoderVariant) -> DecoderVariant {
        self.decoder = Decoder::for_variant(variant);
        self.decoder.variant()
    }

    /// Begin probing candidates for the desk's variant
    ///
    /// Clears the cached reading and selects the first candidate; each
    /// candidate then gets the configured window to produce a checksum-valid
    /// frame before detection moves on.
    pub fn start_detection(&mut self) {
        self.advance_from(DecoderVariant::Unknown);
    }

    /// Move detection past `current`, or fall back when exhausted
    fn advance_from(&mut self, current: DecoderVariant) {
        match current.next() {
            Some(candidate) => {
                self.decoder = Decoder::for_variant(candidate);
                self.last_read = None;
                self.detection = Detection::Active {
                    started_at_ms: self.clock.now_ms(),
                };
            }
            None => {
                // No candidate produced a valid frame; run on the default
                // variant anyway so the sensor stays usable.
                self.decoder = Decoder::for_variant(DecoderVariant::DEFAULT);
                self.detection = Detection::Failed;
            }
        }
    }

    /// Per-cycle tick: drain the byte source, then drive detection
    ///
    /// Consumes only bytes already buffered; never blocks. Each completed
    /// frame refreshes the cached reading. A frame whose digits do not
    /// decode resets the cache to the invalid sentinel, matching the
    /// controller's blank-display behavior.
    pub fn poll(&mut self, source: &mut impl ByteSource) {
        while source.available() > 0 {
            let Some(byte) = source.read_byte() else {
                break;
            };
            match self.decoder.feed(byte) {
                Ok(true) => match self.decoder.decode() {
                    Ok(height) => self.last_read = Some(height),
                    Err(_) => {
                        self.last_read = None;
                        self.digit_errors = self.digit_errors.wrapping_add(1);
                    }
                },
                Ok(false) => {}
                Err(_) => {
                    self.checksum_errors = self.checksum_errors.wrapping_add(1);
                }
            }
        }

        if let Detection::Active { started_at_ms } = self.detection {
            if self.last_read.is_some() {
                // A checksum-valid frame decoded: variant confirmed
                self.detection = Detection::Inactive;
            } else if self.clock.now_ms().saturating_sub(started_at_ms)
                > self.detection_window_ms as u64
            {
                self.advance_from(self.decoder.variant());
            }
        }
    }

    /// Publish tick: forward the cached reading to the consumer
    ///
    /// Republishes only when the value changed since the last publication
    /// and is strictly positive; the sentinel and unchanged readings are
    /// suppressed.
    pub fn update(&mut self, sink: &mut impl HeightSink) {
        if let Some(height) = self.last_read {
            if height > 0.0 && self.last_published != Some(height) {
                sink.publish(height);
                self.last_published = Some(height);
            }
        }
    }

    /// Variant of the live decoder
    pub fn variant(&self) -> DecoderVariant {
        self.decoder.variant()
    }

    /// Last decoded height in centimeters, if any
    pub fn last_read(&self) -> Option<f32> {
        self.last_read
    }

    /// Whether a detection probe is currently running
    pub fn is_detecting(&self) -> bool {
        matches!(self.detection, Detection::Active { .. })
    }

    /// Whether detection exhausted all candidates without a confirmation
    pub fn detection_failed(&self) -> bool {
        self.detection == Detection::Failed
    }

    /// Frames discarded due to checksum mismatch
    pub fn checksum_errors(&self) -> u32 {
        self.checksum_errors
    }

    /// Valid frames whose digits did not decode
    pub fn digit_errors(&self) -> u32 {
        self.digit_errors
    }
}
