//! Sensor configuration types

use riser_protocol::DecoderVariant;

/// Probe window per candidate during auto-detection
pub const DETECTION_WINDOW_MS: u32 = 1000;

/// Height sensor configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Configured decoder variant; `Unknown` requests auto-detection
    pub variant: DecoderVariant,
    /// Time budget per candidate before detection moves on
    pub detection_window_ms: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            variant: DecoderVariant::Unknown,
            detection_window_ms: DETECTION_WINDOW_MS,
        }
    }
}

impl SensorConfig {
    /// Configuration with a fixed, known variant (no detection)
    pub fn fixed(variant: DecoderVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }
}
