//! Easing curves.
//!
//! Names follow the `family.variant` convention used in the stylesheet and
//! the motion config (`expo.out`, `power1.inOut`, `back.out(1.7)`). Every
//! curve maps `0 -> 0` and `1 -> 1`; input outside `[0, 1]` is clamped.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    Linear,
    Power1InOut,
    Power2Out,
    /// Smoothing curve of scroll-scrubbed progress.
    Power3Out,
    /// Strong deceleration, the default for entrances.
    Power4Out,
    Power4In,
    #[default]
    ExpoOut,
    ExpoInOut,
    /// Overshoots past the target before settling. The value is the overshoot strength.
    BackOut(f64),
    SineInOut,
}

pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.7;

impl Easing {
    /// Eased progress for linear progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power4Out => 1.0 - (1.0 - t).powi(5),
            Self::Power4In => t.powi(5),
            Self::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
            Self::ExpoInOut => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Curves whose output never exceeds 1 and never decreases.
    pub fn is_monotonic(self) -> bool {
        !matches!(self, Self::BackOut(s) if s > 0.0)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("none"),
            Self::Power1InOut => f.write_str("power1.inOut"),
            Self::Power2Out => f.write_str("power2.out"),
            Self::Power3Out => f.write_str("power3.out"),
            Self::Power4Out => f.write_str("power4.out"),
            Self::Power4In => f.write_str("power4.in"),
            Self::ExpoOut => f.write_str("expo.out"),
            Self::ExpoInOut => f.write_str("expo.inOut"),
            Self::BackOut(s) => write!(f, "back.out({s})"),
            Self::SineInOut => f.write_str("sine.inOut"),
        }
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let easing = match name {
            "none" | "linear" => Self::Linear,
            "power1.inOut" => Self::Power1InOut,
            "power2.out" => Self::Power2Out,
            "power3.out" => Self::Power3Out,
            "power4.out" => Self::Power4Out,
            "power4.in" => Self::Power4In,
            "expo.out" => Self::ExpoOut,
            "expo.inOut" => Self::ExpoInOut,
            "sine.inOut" => Self::SineInOut,
            "back.out" => Self::BackOut(DEFAULT_BACK_OVERSHOOT),
            other => {
                let overshoot = other
                    .strip_prefix("back.out(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .and_then(|value| value.trim().parse::<f64>().ok())
                    .ok_or_else(|| format!("unknown easing: {other}"))?;
                Self::BackOut(overshoot)
            }
        };
        Ok(easing)
    }
}

impl TryFrom<String> for Easing {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}
