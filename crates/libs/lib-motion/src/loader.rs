//! # Loading Screen
//!
//! `Loading(percent) -> Exiting -> Hidden`.
//!
//! The displayed percentage never moves backwards: every progress signal
//! raises a monotonic target and the display interpolates toward it over
//! `counter_ms` instead of snapping. Once the display reaches 100 the exit
//! transition plays (progress bar fades and grows, then the container fades
//! and shrinks, the two phases overlapping). If the signal stalls, the screen
//! exits anyway after `loader_max_wait_ms`; a widget failure exits at once.

use crate::config::MotionConfig;
use crate::easing::Easing;
use crate::props::AnimatedProps;
use crate::tween::{Timing, Tween};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const EXIT_PHASE_MS: f64 = 500.0;

/// Progress reported by the decorative background while it builds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadProgress {
    pub active: bool,
    /// `0..=100`.
    pub percent: f64,
    pub current_item: Option<String>,
}

impl LoadProgress {
    pub fn loading(percent: f64, item: impl Into<String>) -> Self {
        Self {
            active: true,
            percent,
            current_item: Some(item.into()),
        }
    }

    pub fn done() -> Self {
        Self {
            active: false,
            percent: 100.0,
            current_item: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Loading,
    Exiting,
    /// Terminal; the screen is removed from the page.
    Hidden,
}

/// Styles of the two exit layers at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitFrame {
    pub bar: AnimatedProps,
    pub container: AnimatedProps,
}

#[derive(Clone, Debug)]
pub struct LoadingScreen {
    phase: LoaderPhase,
    started_ms: f64,
    target: f64,
    displayed: f64,
    counter: Tween<f64>,
    exit_started_ms: Option<f64>,
    current_item: Option<String>,
    counter_ms: f64,
    exit_ms: f64,
    max_wait_ms: f64,
}

impl LoadingScreen {
    pub fn new(config: &MotionConfig, now_ms: f64) -> Self {
        Self {
            phase: LoaderPhase::Loading,
            started_ms: now_ms,
            target: 0.0,
            displayed: 0.0,
            counter: Tween::new(0.0, 0.0, Timing::new(0.0, Easing::Linear), now_ms),
            exit_started_ms: None,
            current_item: None,
            counter_ms: config.counter_ms,
            exit_ms: config.loader_exit_ms,
            max_wait_ms: config.loader_max_wait_ms,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != LoaderPhase::Hidden
    }

    /// Displayed percentage, `0..=100`.
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Counter text, e.g. `40%`.
    pub fn label(&self) -> String {
        format!("{}%", self.displayed.round() as u32)
    }

    pub fn current_item(&self) -> Option<&str> {
        self.current_item.as_deref()
    }

    /// Feed a progress signal. Ignored once the screen has started exiting.
    pub fn on_progress(&mut self, progress: &LoadProgress, now_ms: f64) {
        if self.phase != LoaderPhase::Loading || !progress.percent.is_finite() {
            return;
        }
        self.current_item.clone_from(&progress.current_item);

        let percent = if progress.active {
            progress.percent.clamp(0.0, 100.0)
        } else {
            100.0
        };
        if percent <= self.target {
            return;
        }
        self.sample(now_ms);
        self.target = percent;
        self.counter = Tween::new(
            self.displayed,
            self.target,
            Timing::new(self.counter_ms, Easing::Power4Out),
            now_ms,
        );
    }

    /// Widget failure: skip straight to the exit transition.
    pub fn abort(&mut self, now_ms: f64) {
        if self.phase == LoaderPhase::Loading {
            warn!("background failed to load, hiding loading screen");
            self.begin_exit(now_ms);
        }
    }

    /// Advance the counter and the phase machine.
    pub fn tick(&mut self, now_ms: f64) -> LoaderPhase {
        match self.phase {
            LoaderPhase::Loading => {
                self.sample(now_ms);
                if self.displayed >= 100.0 {
                    self.begin_exit(now_ms);
                } else if now_ms - self.started_ms >= self.max_wait_ms {
                    warn!(
                        percent = self.displayed,
                        waited_ms = now_ms - self.started_ms,
                        "loading did not finish in time, hiding loading screen"
                    );
                    self.begin_exit(now_ms);
                }
            }
            LoaderPhase::Exiting => {
                let started = self.exit_started_ms.unwrap_or(now_ms);
                if now_ms - started >= self.exit_ms {
                    self.phase = LoaderPhase::Hidden;
                    debug!("loading screen hidden");
                }
            }
            LoaderPhase::Hidden => {}
        }
        self.phase
    }

    /// Styles for the progress bar and container during the exit transition.
    pub fn exit_frame(&self, now_ms: f64) -> ExitFrame {
        let Some(started) = self.exit_started_ms else {
            return ExitFrame {
                bar: AnimatedProps::IDENTITY,
                container: AnimatedProps::IDENTITY,
            };
        };
        let phase_ms = EXIT_PHASE_MS.min(self.exit_ms);
        let timing = Timing::new(phase_ms, Easing::Power4In);
        let bar = Tween::new(
            AnimatedProps::IDENTITY,
            AnimatedProps::HIDDEN.scale(1.2),
            timing,
            started,
        );
        let container = Tween::new(
            AnimatedProps::IDENTITY,
            AnimatedProps::HIDDEN.scale(0.95),
            timing.delayed(self.exit_ms - phase_ms),
            started,
        );
        ExitFrame {
            bar: bar.sample(now_ms),
            container: container.sample(now_ms),
        }
    }

    fn sample(&mut self, now_ms: f64) {
        self.displayed = self.displayed.max(self.counter.sample(now_ms)).min(100.0);
    }

    fn begin_exit(&mut self, now_ms: f64) {
        debug!(percent = self.displayed, "loading screen exiting");
        self.phase = LoaderPhase::Exiting;
        self.exit_started_ms = Some(now_ms);
    }
}
