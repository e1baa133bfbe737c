//! Motion configuration.
//!
//! Every timing constant of the front end lives here. The values deserialize
//! from JSON with per-field defaults, so a partial override is enough.

use crate::easing::Easing;
use crate::tween::Timing;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MotionConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    OffsetOutOfRange { name: &'static str, value: f64 },

    #[error("end offset ({end}) must lie above the start offset ({start})")]
    OffsetsInverted { start: f64, end: f64 },

    #[error("{0} must be a positive duration")]
    NonPositiveDuration(&'static str),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Duration of the house entrance, used by the hero title lines.
    pub duration_ms: f64,
    pub easing: Easing,
    /// Start line as a fraction of viewport height from the top.
    pub start_offset: f64,
    /// End line as a fraction of viewport height from the top.
    pub end_offset: f64,
    /// Delay between a direction flip and the re-measurement pass.
    pub relayout_delay_ms: u64,
    /// Loading counter interpolation per progress update.
    pub counter_ms: f64,
    /// Loading screen exit transition.
    pub loader_exit_ms: f64,
    /// Loading screen hides itself after this long whatever the progress says.
    pub loader_max_wait_ms: f64,
    pub indicator_fade_ms: f64,
    /// Delay between items of a card grid.
    pub stagger_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let timing = Timing::default();
        Self {
            duration_ms: timing.duration_ms,
            easing: timing.easing,
            start_offset: 0.85,
            end_offset: 0.20,
            relayout_delay_ms: 100,
            counter_ms: 300.0,
            loader_exit_ms: 700.0,
            loader_max_wait_ms: 8000.0,
            indicator_fade_ms: 300.0,
            stagger_ms: 100.0,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), MotionConfigError> {
        for (name, value) in [
            ("start_offset", self.start_offset),
            ("end_offset", self.end_offset),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MotionConfigError::OffsetOutOfRange { name, value });
            }
        }
        if self.end_offset >= self.start_offset {
            return Err(MotionConfigError::OffsetsInverted {
                start: self.start_offset,
                end: self.end_offset,
            });
        }

        for (name, value) in [
            ("duration_ms", self.duration_ms),
            ("counter_ms", self.counter_ms),
            ("loader_exit_ms", self.loader_exit_ms),
            ("loader_max_wait_ms", self.loader_max_wait_ms),
            ("indicator_fade_ms", self.indicator_fade_ms),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(MotionConfigError::NonPositiveDuration(name));
            }
        }
        if self.relayout_delay_ms == 0 {
            return Err(MotionConfigError::NonPositiveDuration("relayout_delay_ms"));
        }
        if self.stagger_ms < 0.0 {
            return Err(MotionConfigError::NonPositiveDuration("stagger_ms"));
        }
        Ok(())
    }

    /// House entrance timing (`duration_ms` with `easing`).
    pub fn timing(&self) -> Timing {
        Timing::new(self.duration_ms, self.easing)
    }

    pub fn relayout_delay(&self) -> Duration {
        Duration::from_millis(self.relayout_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MotionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.relayout_delay(), Duration::from_millis(100));
        assert_eq!(config.timing(), Timing::new(1200.0, Easing::ExpoOut));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: MotionConfig =
            serde_json::from_str(r#"{ "start_offset": 0.8, "easing": "power4.out" }"#).unwrap();
        assert_eq!(config.start_offset, 0.8);
        assert_eq!(config.easing, Easing::Power4Out);
        assert_eq!(config.loader_max_wait_ms, 8000.0);
    }

    #[test]
    fn test_offsets_must_be_fractions() {
        let config = MotionConfig {
            start_offset: 1.5,
            ..MotionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MotionConfigError::OffsetOutOfRange {
                name: "start_offset",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_end_line_above_start_line() {
        let config = MotionConfig {
            end_offset: 0.9,
            ..MotionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MotionConfigError::OffsetsInverted { .. })
        ));
    }

    #[test]
    fn test_durations_must_be_positive() {
        let config = MotionConfig {
            loader_exit_ms: 0.0,
            ..MotionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MotionConfigError::NonPositiveDuration("loader_exit_ms"))
        );

        let config = MotionConfig {
            duration_ms: f64::NAN,
            ..MotionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
