//! Scroll-triggered entrance wrapper.
//!
//! `<Reveal>` renders its children inside a `div`, registers that `div` with
//! the animation engine once it is mounted and drops the registration when
//! the view is cleaned up. Entrances with a horizontal component are
//! re-registered with mirrored offsets when the direction flips before they
//! have played.

use crate::state::{use_i18n, use_motion};
use leptos::html;
use leptos::prelude::*;
use lib_i18n::Direction;
use lib_motion::{Preset, Registration, TargetId, TriggerMode, TriggerSpec};
use web_sys::HtmlElement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    FadeInUp,
    FromStart,
    FromEnd,
    ScaleIn,
    RiseIn,
    FlipIn,
    TiltIn,
}

impl Entrance {
    pub fn preset(self, direction: Direction) -> Preset {
        match self {
            Entrance::FadeInUp => Preset::fade_in_up(),
            Entrance::FromStart => Preset::fade_in_from_start(direction),
            Entrance::FromEnd => Preset::fade_in_from_end(direction),
            Entrance::ScaleIn => Preset::scale_in(),
            Entrance::RiseIn => Preset::rise_in(),
            Entrance::FlipIn => Preset::flip_in(direction),
            Entrance::TiltIn => Preset::tilt_in(direction),
        }
    }

    /// Whether the from-state depends on the reading direction.
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            Entrance::FromStart | Entrance::FromEnd | Entrance::FlipIn | Entrance::TiltIn
        )
    }
}

/// Everything needed to rebuild a registration for either direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSetup {
    pub entrance: Entrance,
    /// Replaces the entrance preset, e.g. for the hero timeline.
    pub custom: Option<Preset>,
    pub target: TargetId,
    pub trigger: TriggerSpec,
    pub delay_ms: f64,
    /// Position in a staggered grid and the gap between items.
    pub stagger: Option<(usize, f64)>,
}

impl RevealSetup {
    pub fn registration(&self, direction: Direction) -> Registration {
        let preset = self
            .custom
            .unwrap_or_else(|| self.entrance.preset(direction));
        let mut preset = preset.delayed(self.delay_ms);
        if let Some((index, stagger_ms)) = self.stagger {
            preset = preset.staggered(index, stagger_ms);
        }
        preset.registration(self.target).trigger(self.trigger)
    }
}

#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional, into)] preset: Option<Preset>,
    /// Extra start delay in milliseconds.
    #[prop(optional)]
    delay_ms: f64,
    /// Index inside a card grid; adds `index * stagger_ms` to the delay.
    #[prop(optional, into)]
    index: Option<usize>,
    /// Reverse when scrolled back above the start line.
    #[prop(optional)]
    toggle: bool,
    /// Start line override as a fraction of viewport height.
    #[prop(optional, into)]
    start_at: Option<f64>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let motion = use_motion();
    let i18n = use_i18n();
    let owner = motion.owner();

    let mode = if toggle {
        TriggerMode::Toggle
    } else {
        TriggerMode::Once
    };
    let mut trigger = motion.trigger().mode(mode);
    if let Some(offset) = start_at {
        trigger = trigger.start_at(offset);
    }
    let setup = RevealSetup {
        entrance,
        custom: preset,
        target: motion.target(),
        trigger,
        delay_ms,
        stagger: index.map(|index| (index, motion.config().stagger_ms)),
    };

    // Rendered hidden from the start; the engine takes over once registered.
    let initial_style = setup.registration(i18n.direction_untracked()).from.to_style();

    let node_ref = NodeRef::<html::Div>::new();
    node_ref.on_load(move |element| {
        let element: HtmlElement = element.into();
        let connected = element.is_connected();
        let register = move || {
            motion.register(owner, element, setup.registration(i18n.direction_untracked()));
        };
        if connected {
            register();
        } else {
            request_animation_frame(register);
        }
    });

    if preset.is_none() && entrance.is_directional() {
        Effect::new(move |previous: Option<Direction>| {
            let direction = i18n.direction();
            if previous.is_some_and(|previous| previous != direction) {
                motion.remirror(owner, setup.registration(direction));
            }
            direction
        });
    }

    on_cleanup(move || motion.release(owner));

    view! {
        <div node_ref=node_ref class=class style=initial_style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(entrance: Entrance) -> RevealSetup {
        RevealSetup {
            entrance,
            custom: None,
            target: TargetId(7),
            trigger: TriggerSpec::default(),
            delay_ms: 0.0,
            stagger: None,
        }
    }

    #[test]
    fn test_from_start_mirrors_with_direction() {
        // Arrange
        let reveal = setup(Entrance::FromStart);

        // Act
        let ltr = reveal.registration(Direction::Ltr);
        let rtl = reveal.registration(Direction::Rtl);

        // Assert
        assert_eq!(ltr.from.x, -50.0);
        assert_eq!(rtl.from.x, 50.0);
        assert_eq!(ltr.target, TargetId(7));
    }

    #[test]
    fn test_stagger_adds_to_delay() {
        let reveal = RevealSetup {
            delay_ms: 200.0,
            stagger: Some((3, 100.0)),
            ..setup(Entrance::ScaleIn)
        };

        let registration = reveal.registration(Direction::Ltr);

        assert_eq!(registration.timing.delay_ms, 500.0);
    }

    #[test]
    fn test_trigger_mode_is_kept() {
        let reveal = RevealSetup {
            trigger: TriggerSpec::default().mode(TriggerMode::Toggle),
            ..setup(Entrance::FadeInUp)
        };

        assert_eq!(
            reveal.registration(Direction::Rtl).trigger.mode,
            TriggerMode::Toggle
        );
    }

    #[test]
    fn test_custom_preset_overrides_entrance() {
        let custom = Preset::new(
            lib_motion::AnimatedProps::HIDDEN.scale(1.2),
            lib_motion::Timing::new(2000.0, lib_motion::Easing::ExpoOut),
        );
        let reveal = RevealSetup {
            custom: Some(custom),
            delay_ms: 300.0,
            ..setup(Entrance::FromStart)
        };

        let registration = reveal.registration(Direction::Rtl);

        assert_eq!(registration.from.scale, 1.2);
        assert_eq!(registration.from.x, 0.0);
        assert_eq!(registration.timing.duration_ms, 2000.0);
        assert_eq!(registration.timing.delay_ms, 300.0);
    }

    #[test]
    fn test_vertical_entrances_ignore_direction() {
        for entrance in [Entrance::FadeInUp, Entrance::ScaleIn, Entrance::RiseIn] {
            assert!(!entrance.is_directional());
            assert_eq!(
                setup(entrance).registration(Direction::Ltr),
                setup(entrance).registration(Direction::Rtl)
            );
        }
    }
}
