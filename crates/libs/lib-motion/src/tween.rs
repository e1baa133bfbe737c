//! Time-based interpolation.
//!
//! Time is a plain `f64` in milliseconds on a monotonic clock
//! (`performance.now()` in the browser, a counter in tests).

use crate::easing::Easing;
use crate::props::AnimatedProps;
use serde::{Deserialize, Serialize};

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for AnimatedProps {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self.interpolate(to, t)
    }
}

/// Duration, start delay and easing of one animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            delay_ms: 0.0,
            easing: Easing::ExpoOut,
        }
    }
}

impl Timing {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
        }
    }

    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Delay for item `index` of a staggered group.
    pub fn staggered(self, index: usize, stagger_ms: f64) -> Self {
        let base = self.delay_ms;
        self.delayed(base + index as f64 * stagger_ms)
    }
}

/// An interpolation from one value to another started at a fixed instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// Start at `now_ms` plus the timing's delay.
    pub fn new(from: T, to: T, timing: Timing, now_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms: now_ms + timing.delay_ms.max(0.0),
            duration_ms: timing.duration_ms.max(0.0),
            easing: timing.easing,
        }
    }

    pub fn from_value(&self) -> T {
        self.from
    }

    pub fn to_value(&self) -> T {
        self.to
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if now_ms <= self.start_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).min(1.0)
    }

    pub fn sample(&self, now_ms: f64) -> T {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }
}

/// Where the next timeline entry starts, relative to the end of the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the previous entry ends.
    After,
    /// `n` ms before the previous entry ends (`"-=n"`).
    Overlap(f64),
    /// `n` ms after the previous entry ends (`"+=n"`).
    Gap(f64),
    /// Absolute offset from the timeline start.
    At(f64),
}

/// Sequencing helper: computes start offsets of overlapping entries.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    end_ms: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Position) -> f64 {
        let start = match position {
            Position::After => self.end_ms,
            Position::Overlap(ms) => self.end_ms - ms,
            Position::Gap(ms) => self.end_ms + ms,
            Position::At(ms) => ms,
        };
        start.max(0.0)
    }

    /// Append one entry and return its start offset.
    pub fn add(&mut self, duration_ms: f64, position: Position) -> f64 {
        let start = self.resolve(position);
        self.end_ms = self.end_ms.max(start + duration_ms);
        start
    }

    /// Append `count` entries started `stagger_ms` apart; returns every start offset.
    pub fn add_staggered(
        &mut self,
        count: usize,
        duration_ms: f64,
        stagger_ms: f64,
        position: Position,
    ) -> Vec<f64> {
        let first = self.resolve(position);
        let starts: Vec<f64> = (0..count).map(|i| first + i as f64 * stagger_ms).collect();
        if let Some(last) = starts.last() {
            self.end_ms = self.end_ms.max(last + duration_ms);
        }
        starts
    }

    /// Total length so far.
    pub fn duration(&self) -> f64 {
        self.end_ms
    }
}

/// A number counting up from zero, snapped to the precision of its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    tween: Tween<f64>,
    decimals: usize,
}

impl CountUp {
    /// `target` is the textual value to reach (`"1200"`, `"99.8"`); its number of
    /// decimals decides the snapping step. Returns `None` for non-numeric text.
    pub fn new(target: &str, timing: Timing, now_ms: f64) -> Option<Self> {
        let value: f64 = target.trim().parse().ok()?;
        let decimals = target
            .trim()
            .split_once('.')
            .map(|(_, fraction)| fraction.len())
            .unwrap_or(0);
        Some(Self {
            tween: Tween::new(0.0, value, timing, now_ms),
            decimals,
        })
    }

    pub fn value(&self, now_ms: f64) -> f64 {
        let step = 10f64.powi(self.decimals as i32);
        (self.tween.sample(now_ms) * step).round() / step
    }

    pub fn text(&self, now_ms: f64) -> String {
        format!("{:.*}", self.decimals, self.value(now_ms))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.tween.is_finished(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_respects_delay_and_duration() {
        let tween = Tween::new(0.0, 100.0, Timing::new(1000.0, Easing::Linear).delayed(500.0), 0.0);

        assert_eq!(tween.sample(0.0), 0.0);
        assert_eq!(tween.sample(500.0), 0.0);
        assert_eq!(tween.sample(1000.0), 50.0);
        assert_eq!(tween.sample(1500.0), 100.0);
        assert!(tween.is_finished(1500.0));
        assert!(!tween.is_finished(1499.0));
        assert_eq!(tween.end_ms(), 1500.0);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = Tween::new(1.0, 2.0, Timing::new(0.0, Easing::ExpoOut), 10.0);
        assert_eq!(tween.sample(10.5), 2.0);
    }

    #[test]
    fn test_tween_interpolates_props() {
        let from = AnimatedProps::HIDDEN.y(50.0);
        let tween = Tween::new(from, AnimatedProps::IDENTITY, Timing::new(100.0, Easing::Linear), 0.0);
        let mid = tween.sample(50.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 25.0);
    }

    #[test]
    fn test_staggered_timing() {
        let timing = Timing::new(800.0, Easing::Power4Out).delayed(100.0);
        assert_eq!(timing.staggered(3, 150.0).delay_ms, 550.0);
    }

    #[test]
    fn test_timeline_overlaps() {
        // Arrange: background, four staggered words, subtitle, stats
        let mut timeline = Timeline::new();

        // Act
        let background = timeline.add(2000.0, Position::After);
        let words = timeline.add_staggered(4, 1200.0, 100.0, Position::Overlap(1500.0));
        let subtitle = timeline.add(1000.0, Position::Overlap(800.0));

        // Assert
        assert_eq!(background, 0.0);
        assert_eq!(words, vec![500.0, 600.0, 700.0, 800.0]);
        assert_eq!(subtitle, 1200.0);
        assert_eq!(timeline.duration(), 2200.0);
    }

    #[test]
    fn test_timeline_never_starts_before_zero() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.add(100.0, Position::Overlap(500.0)), 0.0);
        assert_eq!(timeline.add(100.0, Position::At(1000.0)), 1000.0);
        assert_eq!(timeline.add(100.0, Position::Gap(50.0)), 1150.0);
        assert!(timeline.add_staggered(0, 100.0, 10.0, Position::After).is_empty());
    }

    #[test]
    fn test_count_up_snaps_to_target_precision() {
        let timing = Timing::new(2000.0, Easing::Linear);
        let integer = CountUp::new("1200", timing, 0.0).unwrap();
        let decimal = CountUp::new("99.8", timing, 0.0).unwrap();

        assert_eq!(integer.text(0.0), "0");
        assert_eq!(integer.text(1000.0), "600");
        assert_eq!(integer.text(2000.0), "1200");
        assert_eq!(decimal.text(0.0), "0.0");
        assert_eq!(decimal.text(2000.0), "99.8");
        assert!(decimal.is_finished(2000.0));
        assert!(CountUp::new("n/a", timing, 0.0).is_none());
    }
}
