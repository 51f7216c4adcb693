// In: src/config.rs

//! The single source of truth for all compression configuration.
//!
//! A `CompressorConfig` is created once at the application boundary, either
//! programmatically, from FFI keyword options, or from a JSON document, and
//! is then handed to the engine, which validates it before consuming any
//! input.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::SwingDoorError;

/// The unified configuration for one compression run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CompressorConfig {
    /// The tolerance bounding how far a discarded sample may sit from the
    /// line interpolated through the retained anchors. Zero disables
    /// compression entirely: every sample passes through unchanged.
    #[serde(default = "default_deviation")]
    pub deviation: f64,

    /// Upper bound on the number of input samples consumed between emitted
    /// anchors. When the bound is reached without a breach, the current raw
    /// sample is emitted and the corridor re-seeds from it. `None` leaves
    /// anchor gaps unbounded.
    #[serde(default)]
    pub max_interval: Option<NonZeroUsize>,
}

impl CompressorConfig {
    /// Creates a config with the given tolerance and unbounded anchor gaps.
    pub fn with_deviation(deviation: f64) -> Self {
        Self {
            deviation,
            max_interval: None,
        }
    }

    /// Parses a config from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, SwingDoorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config to its JSON representation.
    pub fn to_json_string(&self) -> Result<String, SwingDoorError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rejects tolerances that cannot define a corridor. The engine calls
    /// this before any sample is consumed, so a bad config fails the whole
    /// run up front rather than partway through a stream.
    pub fn validate(&self) -> Result<(), SwingDoorError> {
        if !self.deviation.is_finite() || self.deviation < 0.0 {
            return Err(SwingDoorError::InvalidDeviation(self.deviation));
        }
        Ok(())
    }
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            deviation: default_deviation(),
            max_interval: None,
        }
    }
}

// --- Serde default helpers ---

/// The historical default tolerance of the engine.
fn default_deviation() -> f64 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_an_empty_json_document() {
        let from_empty = CompressorConfig::from_json_str("{}").expect("empty object parses");
        assert_eq!(from_empty, CompressorConfig::default());
        assert_eq!(from_empty.deviation, 0.1);
        assert!(from_empty.max_interval.is_none());
    }

    #[test]
    fn test_json_roundtrip_preserves_all_fields() {
        let config = CompressorConfig {
            deviation: 2.5,
            max_interval: NonZeroUsize::new(32),
        };
        let json = config.to_json_string().expect("config serializes");
        let back = CompressorConfig::from_json_str(&json).expect("round-trip parses");
        assert_eq!(back, config);
    }

    #[test]
    fn test_zero_max_interval_is_unrepresentable() {
        let result = CompressorConfig::from_json_str(r#"{"max_interval": 0}"#);
        assert!(matches!(result, Err(SwingDoorError::ConfigParse(_))));
    }

    #[test]
    fn test_validate_rejects_unusable_deviations() {
        for bad in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = CompressorConfig::with_deviation(bad);
            assert!(matches!(
                config.validate(),
                Err(SwingDoorError::InvalidDeviation(_))
            ));
        }
    }

    #[test]
    fn test_validate_accepts_zero_deviation() {
        assert!(CompressorConfig::with_deviation(0.0).validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_a_config_error() {
        let result = CompressorConfig::from_json_str("deviation: 0.5");
        assert!(matches!(result, Err(SwingDoorError::ConfigParse(_))));
    }
}
