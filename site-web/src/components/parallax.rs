//! Scroll-scrubbed background layer.
//!
//! The layer drifts vertically while its section passes through the
//! viewport, trailing the scroll position by `lag_ms`. Direction neutral.

use crate::state::use_motion;
use leptos::html;
use leptos::prelude::*;
use lib_motion::{AnimatedProps, Easing, Registration, TargetId, Timing, TriggerSpec};
use web_sys::HtmlElement;

/// Scrub registration moving `target` by `shift_percent` of its height.
pub fn parallax_registration(target: TargetId, shift_percent: f64, lag_ms: f64) -> Registration {
    Registration::new(
        target,
        AnimatedProps::IDENTITY,
        AnimatedProps::IDENTITY.y_percent(shift_percent),
    )
    .trigger(TriggerSpec::scrub_through())
    .timing(Timing::new(lag_ms, Easing::Power3Out))
}

#[component]
pub fn Parallax(
    /// Travel over the whole pass, in percent of the layer's height.
    shift_percent: f64,
    #[prop(default = 2000.0)] lag_ms: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let motion = use_motion();
    let owner = motion.owner();
    let registration = parallax_registration(motion.target(), shift_percent, lag_ms);

    let node_ref = NodeRef::<html::Div>::new();
    node_ref.on_load(move |element| {
        let element: HtmlElement = element.into();
        if element.is_connected() {
            motion.register(owner, element, registration);
        } else {
            request_animation_frame(move || motion.register(owner, element, registration));
        }
    });
    on_cleanup(move || motion.release(owner));

    view! {
        <div node_ref=node_ref class=class aria-hidden="true">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_motion::{TriggerMode, Viewport};

    #[test]
    fn test_layer_scrubs_over_the_whole_pass() {
        // Arrange
        let registration = parallax_registration(TargetId(3), -30.0, 2000.0);

        // Act
        let trigger = registration.trigger;

        // Assert
        assert_eq!(trigger.mode, TriggerMode::Scrub);
        assert_eq!((trigger.start_offset, trigger.end_offset), (1.0, 0.0));
        assert_eq!(registration.from, AnimatedProps::IDENTITY);
        assert_eq!(registration.to.y_percent, -30.0);
        assert_eq!(registration.timing.duration_ms, 2000.0);
    }

    #[test]
    fn test_section_halfway_through_viewport_is_halfway_shifted() {
        let trigger = parallax_registration(TargetId(3), -30.0, 2000.0).trigger;
        let section = lib_motion::Bounds::new(2000.0, 0.0, 1280.0, 1000.0);

        // Travel runs from scroll 1200 (top meets bottom) to 3000 (bottom meets top)
        let progress = trigger.scrub_progress(section, Viewport::new(1280.0, 800.0, 2100.0));

        assert_eq!(progress, 0.5);
    }
}
