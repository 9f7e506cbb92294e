//! Board-agnostic height sensor logic
//!
//! This crate contains the application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (byte source, monotonic clock, height sink)
//! - Sensor configuration types
//! - The variant selector with its auto-detection protocol
//!
//! The sensor is single-threaded and cooperative: the embedding firmware
//! calls [`HeightSensor::poll`](sensor::HeightSensor::poll) from its read
//! loop and [`HeightSensor::update`](sensor::HeightSensor::update) on its
//! publish tick. Nothing blocks and nothing is locked.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod sensor;
pub mod traits;

pub use config::SensorConfig;
pub use sensor::HeightSensor;
pub use traits::{ByteSource, HeightSink, MonotonicClock};
