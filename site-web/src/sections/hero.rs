//! Hero section.
//!
//! Plays one entrance timeline on load: the backdrop settles, the two title
//! lines rise in while it is still moving, then the subtitle and the stat
//! cards follow with overlapping starts. Stat numbers count up from zero.
//! The backdrop drifts up to 10 px toward the pointer.

use crate::components::{LanguageFont, Reveal};
use crate::services::frame_loop::{now_ms, FrameLoop};
use crate::state::{use_i18n, use_motion};
use crate::utils::format::localize_digits;
use leptos::ev;
use leptos::prelude::*;
use lib_i18n::FontVariant;
use lib_motion::{
    AnimatedProps, CountUp, Easing, MotionConfig, Position, Preset, Timeline, Timing, Tween,
};

/// `(value, suffix, label key)` of each stat card.
const STATS: [(&str, &str, &str); 4] = [
    ("40", "+", "hero.stats.years"),
    ("150", "K+", "hero.stats.barrels"),
    ("1200", "+", "hero.stats.employees"),
    ("99.8", "%", "hero.stats.safety"),
];

const COUNT_UP_MS: f64 = 2000.0;
const COUNT_UP_DELAY_MS: f64 = 1500.0;
const STAT_STAGGER_MS: f64 = 100.0;
/// Full pointer travel across the window moves the backdrop this far.
const POINTER_TRAVEL_PX: f64 = 20.0;
const POINTER_FOLLOW_MS: f64 = 1000.0;

/// Start offsets of every hero element, in milliseconds from mount.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroSchedule {
    pub backdrop: f64,
    pub title_lines: Vec<f64>,
    pub subtitle: f64,
    pub stats: Vec<f64>,
    pub total: f64,
}

pub fn backdrop_preset() -> Preset {
    Preset::new(
        AnimatedProps::HIDDEN.scale(1.2),
        Timing::new(2000.0, Easing::ExpoOut),
    )
}

/// Title lines use the house entrance timing.
pub fn title_preset(config: &MotionConfig) -> Preset {
    Preset::new(AnimatedProps::HIDDEN.y(120.0).rotate_x(-90.0), config.timing())
}

pub fn subtitle_preset() -> Preset {
    Preset::new(
        AnimatedProps::HIDDEN.y(60.0).blur(10.0),
        Timing::new(1000.0, Easing::ExpoOut),
    )
}

pub fn stat_preset() -> Preset {
    Preset::new(
        AnimatedProps::HIDDEN.y(80.0).scale(0.8),
        Timing::new(800.0, Easing::ExpoOut),
    )
}

pub fn hero_schedule(config: &MotionConfig) -> HeroSchedule {
    let mut timeline = Timeline::new();
    let backdrop = timeline.add(backdrop_preset().timing.duration_ms, Position::After);
    let title_lines = timeline.add_staggered(
        2,
        title_preset(config).timing.duration_ms,
        100.0,
        Position::Overlap(1500.0),
    );
    let subtitle = timeline.add(
        subtitle_preset().timing.duration_ms,
        Position::Overlap(800.0),
    );
    let stats = timeline.add_staggered(
        STATS.len(),
        stat_preset().timing.duration_ms,
        STAT_STAGGER_MS,
        Position::Overlap(500.0),
    );
    HeroSchedule {
        backdrop,
        title_lines,
        subtitle,
        stats,
        total: timeline.duration(),
    }
}

/// Backdrop offset for a pointer at `(x, y)` in a `width` x `height` window.
fn pointer_shift(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (x / width - 0.5) * POINTER_TRAVEL_PX,
        (y / height - 0.5) * POINTER_TRAVEL_PX,
    )
}

/// Backdrop offset easing toward the latest pointer position.
#[derive(Clone, Copy, Debug)]
struct PointerParallax {
    tween: Tween<AnimatedProps>,
}

impl PointerParallax {
    fn new() -> Self {
        Self {
            tween: Tween::new(
                AnimatedProps::IDENTITY,
                AnimatedProps::IDENTITY,
                Timing::new(0.0, Easing::Linear),
                0.0,
            ),
        }
    }

    /// Retarget from wherever the backdrop is at `now_ms`.
    fn aim(&mut self, (x, y): (f64, f64), now_ms: f64) {
        self.tween = Tween::new(
            self.tween.sample(now_ms),
            AnimatedProps::IDENTITY.x(x).y(y),
            Timing::new(POINTER_FOLLOW_MS, Easing::Power2Out),
            now_ms,
        );
    }

    fn style(&self, now_ms: f64) -> String {
        format!("transform: {};", self.tween.sample(now_ms).transform_css())
    }

    fn is_settled(&self, now_ms: f64) -> bool {
        self.tween.is_finished(now_ms)
    }
}

fn count_up_timing(index: usize) -> Timing {
    Timing::new(COUNT_UP_MS, Easing::ExpoOut)
        .delayed(COUNT_UP_DELAY_MS)
        .staggered(index, STAT_STAGGER_MS)
}

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    let config = use_motion().config();
    let schedule = hero_schedule(&config);

    let started = now_ms();
    let counters: Vec<Option<CountUp>> = STATS
        .iter()
        .enumerate()
        .map(|(index, (value, _, _))| CountUp::new(value, count_up_timing(index), started))
        .collect();
    let numbers = RwSignal::new(vec!["0".to_string(); STATS.len()]);

    let frames = StoredValue::new_local(FrameLoop::new(move |now| {
        numbers.set(
            counters
                .iter()
                .zip(STATS.iter())
                .map(|(counter, (value, _, _))| match counter {
                    Some(counter) => counter.text(now),
                    None => value.to_string(),
                })
                .collect(),
        );
        counters
            .iter()
            .flatten()
            .any(|counter| !counter.is_finished(now))
    }));
    frames.with_value(FrameLoop::start);
    on_cleanup(move || frames.with_value(FrameLoop::stop));

    let parallax = StoredValue::new(PointerParallax::new());
    let backdrop_style = RwSignal::new(PointerParallax::new().style(0.0));
    let drift = StoredValue::new_local(FrameLoop::new(move |now| {
        let (style, settled) =
            parallax.with_value(|parallax| (parallax.style(now), parallax.is_settled(now)));
        backdrop_style.set(style);
        !settled
    }));
    let pointer = window_event_listener(ev::mousemove, move |event| {
        let window = window();
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or_default();
        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or_default();
        let shift = pointer_shift(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            width,
            height,
        );
        parallax.update_value(|parallax| parallax.aim(shift, now_ms()));
        drift.with_value(FrameLoop::start);
    });
    on_cleanup(move || {
        pointer.remove();
        drift.with_value(FrameLoop::stop);
    });

    let title_line = move |key: &'static str, class: &'static str, delay_ms: f64| {
        view! {
            <Reveal preset=title_preset(&config) delay_ms=delay_ms start_at=1.0 class=class>
                {move || i18n.t(key)}
            </Reveal>
        }
    };

    let stat_cards = STATS
        .iter()
        .enumerate()
        .map(|(index, (_, suffix, label_key))| {
            let delay_ms = schedule.stats[index];
            let label_key = *label_key;
            let number = move || {
                numbers.with(|numbers| {
                    localize_digits(i18n.language(), numbers.get(index).map_or("", String::as_str))
                })
            };
            view! {
                <Reveal preset=stat_preset() delay_ms=delay_ms start_at=1.0 class="stat-item">
                    <div class="stat-card">
                        <div class="stat-value">
                            <span class="stat-number">{number}</span>
                            <span class="stat-suffix">{*suffix}</span>
                        </div>
                        <div class="stat-label">{move || i18n.t(label_key)}</div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="hero">
            <Reveal preset=backdrop_preset() delay_ms=schedule.backdrop start_at=1.0 class="hero-backdrop">
                <div class="hero-parallax" style=move || backdrop_style.get()>
                    <div class="hero-gradient"></div>
                    <div class="hero-grid"></div>
                    <div class="hero-glow hero-glow-start"></div>
                    <div class="hero-glow hero-glow-end"></div>
                </div>
            </Reveal>

            <div class="hero-content">
                <h1 class="hero-title">
                    {title_line("hero.title.line1", "title-line gradient-text", schedule.title_lines[0])}
                    {title_line("hero.title.line2", "title-line gradient-text-gold", schedule.title_lines[1])}
                </h1>

                <Reveal preset=subtitle_preset() delay_ms=schedule.subtitle start_at=1.0 class="hero-subtitle">
                    <LanguageFont variant=FontVariant::Secondary>
                        <p>{move || i18n.t("hero.subtitle")}</p>
                    </LanguageFont>
                </Reveal>

                <div class="hero-stats">{stat_cards}</div>
            </div>

            <div class="scroll-indicator">
                <span>{move || i18n.t("hero.scroll")}</span>
                <div class="scroll-mouse"><div class="scroll-dot"></div></div>
            </div>
        </section>
    }
}
