//! Hardware abstraction traits
//!
//! These traits define the interface between the sensor logic and the
//! hardware-specific implementations supplied by the embedding firmware.

/// Non-blocking source of received UART bytes
///
/// A poll drains only the bytes already buffered; implementations must never
/// wait for more data.
pub trait ByteSource {
    /// Number of bytes currently buffered
    fn available(&self) -> usize;

    /// Take the next buffered byte, if any
    fn read_byte(&mut self) -> Option<u8>;
}

/// Monotonic millisecond clock
///
/// Used only for elapsed-time comparisons; the epoch is arbitrary.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary fixed point
    fn now_ms(&self) -> u64;
}

/// Downstream consumer of decoded height readings
///
/// Purely an output (telemetry, display). The sensor publishes only changed,
/// strictly positive readings.
pub trait HeightSink {
    /// Deliver a new height reading in centimeters
    fn publish(&mut self, height_cm: f32);
}
