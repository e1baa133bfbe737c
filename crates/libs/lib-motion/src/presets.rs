//! Entrance presets.
//!
//! | Preset | From | Duration |
//! |--------|------|----------|
//! | [`Preset::fade_in_up`] | `y: 50`, transparent | 1000 ms |
//! | [`Preset::fade_in_from_start`] | 50 px toward the start edge | 800 ms |
//! | [`Preset::fade_in_from_end`] | 50 px toward the end edge | 800 ms |
//! | [`Preset::scale_in`] | `scale: 0` | 600 ms |
//! | [`Preset::rise_in`] | `y: 100`, `scale: 0.95` | 1200 ms |
//! | [`Preset::flip_in`] | `scale: 0`, half turn against the reading direction | 800 ms |
//! | [`Preset::tilt_in`] | `y: 50`, 30 degree tilt | 800 ms |
//!
//! Horizontal offsets and rotations go through the directional resolver, so the
//! same preset mirrors under RTL.

use crate::easing::{Easing, DEFAULT_BACK_OVERSHOOT};
use crate::engine::{Registration, TargetId};
use crate::props::AnimatedProps;
use crate::tween::Timing;
use lib_i18n::{mirror_rotation, translate_toward_end, Direction};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub from: AnimatedProps,
    pub to: AnimatedProps,
    pub timing: Timing,
}

impl Preset {
    pub fn new(from: AnimatedProps, timing: Timing) -> Self {
        Self {
            from,
            to: AnimatedProps::IDENTITY,
            timing,
        }
    }

    pub fn fade_in_up() -> Self {
        Self::new(
            AnimatedProps::HIDDEN.y(50.0),
            Timing::new(1000.0, Easing::Power4Out),
        )
    }

    /// Slides in from the start edge (left under LTR).
    pub fn fade_in_from_start(direction: Direction) -> Self {
        Self::new(
            AnimatedProps::HIDDEN.x(translate_toward_end(direction, -50.0)),
            Timing::new(800.0, Easing::ExpoOut),
        )
    }

    /// Slides in from the end edge (right under LTR).
    pub fn fade_in_from_end(direction: Direction) -> Self {
        Self::new(
            AnimatedProps::HIDDEN.x(translate_toward_end(direction, 50.0)),
            Timing::new(800.0, Easing::ExpoOut),
        )
    }

    pub fn scale_in() -> Self {
        Self::new(
            AnimatedProps::HIDDEN.scale(0.0),
            Timing::new(600.0, Easing::Power4Out),
        )
    }

    pub fn rise_in() -> Self {
        Self::new(
            AnimatedProps::HIDDEN.y(100.0).scale(0.95),
            Timing::new(1200.0, Easing::ExpoOut),
        )
    }

    pub fn flip_in(direction: Direction) -> Self {
        Self::new(
            AnimatedProps::HIDDEN
                .scale(0.0)
                .rotate_y(mirror_rotation(direction, -180.0)),
            Timing::new(800.0, Easing::BackOut(DEFAULT_BACK_OVERSHOOT)),
        )
    }

    pub fn tilt_in(direction: Direction) -> Self {
        Self::new(
            AnimatedProps::HIDDEN
                .y(50.0)
                .rotate_y(mirror_rotation(direction, -30.0)),
            Timing::new(800.0, Easing::Power4Out),
        )
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Item `index` of a grid entering `stagger_ms` after its predecessor.
    pub fn staggered(mut self, index: usize, stagger_ms: f64) -> Self {
        self.timing = self.timing.staggered(index, stagger_ms);
        self
    }

    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.timing = self.timing.delayed(delay_ms);
        self
    }

    pub fn registration(self, target: TargetId) -> Registration {
        Registration::new(target, self.from, self.to).timing(self.timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_presets_mirror_under_rtl() {
        let ltr = Preset::fade_in_from_start(Direction::Ltr);
        let rtl = Preset::fade_in_from_start(Direction::Rtl);
        assert_eq!(ltr.from.x, -50.0);
        assert_eq!(rtl.from.x, 50.0);
        assert_eq!(Preset::fade_in_from_end(Direction::Rtl).from.x, -50.0);
    }

    #[test]
    fn test_flip_in_turns_against_reading_direction() {
        assert_eq!(Preset::flip_in(Direction::Ltr).from.rotate_y, -180.0);
        assert_eq!(Preset::flip_in(Direction::Rtl).from.rotate_y, 180.0);
    }

    #[test]
    fn test_vertical_presets_ignore_direction() {
        let preset = Preset::rise_in();
        assert_eq!(preset.from.x, 0.0);
        assert_eq!(preset.from.y, 100.0);
        assert_eq!(preset.to, AnimatedProps::IDENTITY);
    }

    #[test]
    fn test_staggered_preset_accumulates_delay() {
        let preset = Preset::tilt_in(Direction::Ltr).delayed(300.0).staggered(2, 100.0);
        assert_eq!(preset.timing.delay_ms, 500.0);
    }
}
