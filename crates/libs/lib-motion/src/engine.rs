//! # Scroll-Trigger Animation Engine
//!
//! Every animated element is one [`ScrollTriggerRecord`] with an explicit
//! state machine:
//!
//! ```text
//!            Enter                       forward tween done (Once)
//! Pending ──────────────▶ Armed ─────────────────────────────▶ Completed
//!                          ▲  │
//!                   Enter  │  │ LeaveBack (Toggle)
//!                          │  ▼
//!                        Reversed
//! ```
//!
//! Trigger lines are fractions of the viewport height measured from its top:
//! the element *enters* when its top edge is at or above the start line and
//! *leaves back* when it drops below it again. Crossing the end line with the
//! bottom edge is reported as [`TriggerEventKind::Leave`] / [`TriggerEventKind::EnterBack`]
//! and changes no state.
//!
//! A [`TriggerMode::Scrub`] record has no time-based entrance. Its progress
//! follows the scroll position between the moment the top edge reaches the
//! start line and the moment the bottom edge reaches the end line, and the
//! written value catches up with that progress over the registration's
//! timing. It stays `Pending` until the progress first leaves zero and is
//! `Armed` from then on.
//!
//! Bounds are document-relative and cached per record. They are invalidated
//! on every viewport resize (detected by [`ScrollEngine::update`] itself) and
//! by [`ScrollEngine::invalidate`], which the localization context calls after
//! a direction flip; invalidated records are re-measured before their next
//! intersection test.
//!
//! A target that no longer resolves (measurement or style write fails) is
//! dropped without error.

use crate::config::MotionConfig;
use crate::props::AnimatedProps;
use crate::tween::{Timing, Tween};
use tracing::{debug, trace};

/// Element handle issued by the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

/// The view section that owns a group of registrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(pub u64);

/// Document-relative box of an element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            width,
            height,
            scroll_y,
        }
    }

    /// Document y of a trigger line at `offset` (fraction of the height).
    pub fn line(&self, offset: f64) -> f64 {
        self.scroll_y + self.height * offset
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerMode {
    /// Plays once; never re-fires after completing.
    #[default]
    Once,
    /// Plays forward on enter and backward on leave-back.
    Toggle,
    /// Progress tied to the scroll position between the start and end lines.
    Scrub,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpec {
    pub start_offset: f64,
    pub end_offset: f64,
    pub mode: TriggerMode,
}

impl Default for TriggerSpec {
    fn default() -> Self {
        Self {
            start_offset: 0.85,
            end_offset: 0.20,
            mode: TriggerMode::Once,
        }
    }
}

impl TriggerSpec {
    pub fn from_config(config: &MotionConfig) -> Self {
        Self {
            start_offset: config.start_offset,
            end_offset: config.end_offset,
            mode: TriggerMode::Once,
        }
    }

    pub fn mode(mut self, mode: TriggerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn start_at(mut self, offset: f64) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn end_at(mut self, offset: f64) -> Self {
        self.end_offset = offset;
        self
    }

    /// Scrub over the whole pass of the element through the viewport: from its
    /// top edge meeting the viewport bottom to its bottom edge meeting the top.
    pub fn scrub_through() -> Self {
        Self {
            start_offset: 1.0,
            end_offset: 0.0,
            mode: TriggerMode::Scrub,
        }
    }

    /// Scroll progress in `[0, 1]` of an element with `bounds`.
    pub fn scrub_progress(&self, bounds: Bounds, viewport: Viewport) -> f64 {
        let start = bounds.top - viewport.height * self.start_offset;
        let end = bounds.bottom() - viewport.height * self.end_offset;
        if end <= start {
            return if viewport.scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((viewport.scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }
}

/// One entrance animation bound to one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Registration {
    pub target: TargetId,
    /// Element whose bounds decide when to fire. Defaults to `target`.
    pub anchor: Option<TargetId>,
    pub from: AnimatedProps,
    pub to: AnimatedProps,
    pub trigger: TriggerSpec,
    pub timing: Timing,
}

impl Registration {
    pub fn new(target: TargetId, from: AnimatedProps, to: AnimatedProps) -> Self {
        Self {
            target,
            anchor: None,
            from,
            to,
            trigger: TriggerSpec::default(),
            timing: Timing::default(),
        }
    }

    pub fn anchor(mut self, anchor: TargetId) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn trigger(mut self, trigger: TriggerSpec) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn mode(mut self, mode: TriggerMode) -> Self {
        self.trigger.mode = mode;
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn anchor_id(&self) -> TargetId {
        self.anchor.unwrap_or(self.target)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    /// Not yet intersecting.
    Pending,
    /// Entered; forward animation in flight or finished (toggle mode).
    Armed,
    /// One-shot animation finished. Terminal.
    Completed,
    /// Left back through the start line in toggle mode.
    Reversed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEventKind {
    /// Top edge moved above the start line.
    Enter,
    /// Bottom edge moved above the end line.
    Leave,
    /// Bottom edge moved back below the end line.
    EnterBack,
    /// Top edge moved back below the start line.
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerEvent {
    pub target: TargetId,
    pub kind: TriggerEventKind,
}

/// Rendering surface the engine measures and writes through.
pub trait Surface {
    /// Document-relative bounds, `None` when the element is gone.
    fn measure(&self, target: TargetId) -> Option<Bounds>;

    /// Write `props` to the element. Returns false when the element is gone.
    fn apply(&mut self, target: TargetId, props: &AnimatedProps) -> bool;
}

#[derive(Clone, Debug)]
pub struct ScrollTriggerRecord {
    owner: OwnerId,
    registration: Registration,
    last_measured_bounds: Option<Bounds>,
    state: TriggerState,
    tween: Option<Tween<AnimatedProps>>,
    current: AnimatedProps,
    entered: bool,
    left: bool,
    scrub: Option<Scrub>,
}

/// Playhead of a scrubbed record.
#[derive(Clone, Copy, Debug)]
struct Scrub {
    target: f64,
    progress: f64,
    tween: Option<Tween<f64>>,
}

impl ScrollTriggerRecord {
    fn new(owner: OwnerId, registration: Registration) -> Self {
        Self {
            owner,
            current: registration.from,
            registration,
            last_measured_bounds: None,
            state: TriggerState::Pending,
            tween: None,
            entered: false,
            left: false,
            scrub: (registration.trigger.mode == TriggerMode::Scrub).then_some(Scrub {
                target: 0.0,
                progress: 0.0,
                tween: None,
            }),
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn last_measured_bounds(&self) -> Option<Bounds> {
        self.last_measured_bounds
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Last values written to the element.
    pub fn current(&self) -> AnimatedProps {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some() || self.scrub.is_some_and(|scrub| scrub.tween.is_some())
    }

    /// Scroll progress the element currently shows, for scrubbed records.
    pub fn scrub_progress(&self) -> Option<f64> {
        self.scrub.map(|scrub| scrub.progress)
    }

    /// Retarget the playhead of a scrubbed record.
    fn seek(&mut self, progress: f64, now_ms: f64) {
        let Some(scrub) = self.scrub.as_mut() else {
            return;
        };
        if (scrub.target - progress).abs() < f64::EPSILON {
            return;
        }
        let timing = Timing {
            delay_ms: 0.0,
            ..self.registration.timing
        };
        scrub.target = progress;
        scrub.tween = Some(Tween::new(scrub.progress, progress, timing, now_ms));
        if progress > 0.0 && self.state == TriggerState::Pending {
            debug!(element = self.registration.target.0, "scroll scrub started");
            self.state = TriggerState::Armed;
        }
    }

    /// Advance the playhead; returns the values to write.
    fn advance_scrub(&mut self, now_ms: f64) -> Option<AnimatedProps> {
        let scrub = self.scrub.as_mut()?;
        let tween = scrub.tween?;
        scrub.progress = tween.sample(now_ms);
        if tween.is_finished(now_ms) {
            scrub.tween = None;
        }
        Some(
            self.registration
                .from
                .interpolate(&self.registration.to, scrub.progress),
        )
    }

    fn play_forward(&mut self, now_ms: f64) {
        self.state = TriggerState::Armed;
        self.tween = Some(Tween::new(
            self.current,
            self.registration.to,
            self.registration.timing,
            now_ms,
        ));
    }

    fn play_reverse(&mut self, now_ms: f64) {
        let timing = Timing {
            delay_ms: 0.0,
            ..self.registration.timing
        };
        self.state = TriggerState::Reversed;
        self.tween = Some(Tween::new(
            self.current,
            self.registration.from,
            timing,
            now_ms,
        ));
    }

    fn on_event(&mut self, kind: TriggerEventKind, now_ms: f64) {
        let target = self.registration.target;
        match (kind, self.state, self.registration.trigger.mode) {
            (kind, _, TriggerMode::Scrub) => {
                trace!(element = target.0, ?kind, "scrubbed record follows scroll position");
            }
            (TriggerEventKind::Enter, TriggerState::Pending | TriggerState::Reversed, _) => {
                debug!(element = target.0, from = ?self.state, "scroll trigger armed");
                self.play_forward(now_ms);
            }
            (TriggerEventKind::LeaveBack, TriggerState::Armed, TriggerMode::Toggle) => {
                debug!(element = target.0, "scroll trigger reversed");
                self.play_reverse(now_ms);
            }
            (kind, state, _) => {
                trace!(element = target.0, ?kind, ?state, "scroll trigger event ignored");
            }
        }
    }
}

/// Owns every [`ScrollTriggerRecord`] of the page.
#[derive(Debug, Default)]
pub struct ScrollEngine {
    records: Vec<ScrollTriggerRecord>,
    viewport_size: Option<(f64, f64)>,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entrance and write its initial state.
    ///
    /// A registration for a target that is already registered replaces the
    /// old record. Returns false when the target is already detached.
    pub fn register(
        &mut self,
        owner: OwnerId,
        registration: Registration,
        surface: &mut impl Surface,
    ) -> bool {
        let target = registration.target;
        self.records.retain(|record| record.registration.target != target);

        if !surface.apply(target, &registration.from) {
            debug!(element = target.0, "registration skipped, target detached");
            return false;
        }
        self.records.push(ScrollTriggerRecord::new(owner, registration));
        true
    }

    pub fn unregister(&mut self, target: TargetId) -> bool {
        let before = self.records.len();
        self.records
            .retain(|record| record.registration.target != target);
        self.records.len() != before
    }

    /// Remove every record of `owner`, cancelling in-flight tweens. Returns the number removed.
    pub fn unregister_owner(&mut self, owner: OwnerId) -> usize {
        let before = self.records.len();
        let cancelled = self
            .records
            .iter()
            .filter(|record| record.owner == owner && record.is_animating())
            .count();
        self.records.retain(|record| record.owner != owner);
        let removed = before - self.records.len();
        if removed > 0 {
            debug!(owner = owner.0, removed, cancelled, "owner unregistered");
        }
        removed
    }

    /// Mark every cached bound as stale.
    pub fn invalidate(&mut self) {
        for record in self.records.iter_mut() {
            record.last_measured_bounds = None;
        }
    }

    /// Re-measure every record now, dropping detached ones.
    pub fn refresh(&mut self, surface: &impl Surface) {
        self.invalidate();
        self.measure_stale(surface);
    }

    fn measure_stale(&mut self, surface: &impl Surface) {
        self.records.retain_mut(|record| {
            if record.last_measured_bounds.is_some() {
                return true;
            }
            match surface.measure(record.registration.anchor_id()) {
                Some(bounds) => {
                    record.last_measured_bounds = Some(bounds);
                    true
                }
                None => {
                    debug!(element = record.registration.target.0, "dropping detached target");
                    false
                }
            }
        });
    }

    /// Run intersection tests against `viewport` and start the resulting tweens.
    pub fn update(
        &mut self,
        viewport: Viewport,
        surface: &impl Surface,
        now_ms: f64,
    ) -> Vec<TriggerEvent> {
        if self.viewport_size != Some(viewport.size()) {
            if self.viewport_size.is_some() {
                debug!(width = viewport.width, height = viewport.height, "viewport resized");
                self.invalidate();
            }
            self.viewport_size = Some(viewport.size());
        }
        self.measure_stale(surface);

        let mut events = Vec::new();
        for record in self.records.iter_mut() {
            let Some(bounds) = record.last_measured_bounds else {
                continue;
            };
            let trigger = record.registration.trigger;
            let target = record.registration.target;

            if trigger.mode == TriggerMode::Scrub {
                record.seek(trigger.scrub_progress(bounds, viewport), now_ms);
            }

            let entered = bounds.top <= viewport.line(trigger.start_offset);
            if entered != record.entered {
                record.entered = entered;
                let kind = if entered {
                    TriggerEventKind::Enter
                } else {
                    TriggerEventKind::LeaveBack
                };
                record.on_event(kind, now_ms);
                events.push(TriggerEvent { target, kind });
            }

            let left = bounds.bottom() <= viewport.line(trigger.end_offset);
            if left != record.left {
                record.left = left;
                let kind = if left {
                    TriggerEventKind::Leave
                } else {
                    TriggerEventKind::EnterBack
                };
                record.on_event(kind, now_ms);
                events.push(TriggerEvent { target, kind });
            }
        }
        events
    }

    /// Advance in-flight tweens and write them out. Returns true while anything is still animating.
    pub fn tick(&mut self, surface: &mut impl Surface, now_ms: f64) -> bool {
        self.records.retain_mut(|record| {
            if record.scrub.is_some() {
                let Some(props) = record.advance_scrub(now_ms) else {
                    return true;
                };
                record.current = props;
                if !surface.apply(record.registration.target, &record.current) {
                    debug!(element = record.registration.target.0, "dropping detached target mid-scrub");
                    return false;
                }
                return true;
            }
            let Some(tween) = record.tween else {
                return true;
            };
            record.current = tween.sample(now_ms);
            if !surface.apply(record.registration.target, &record.current) {
                debug!(element = record.registration.target.0, "dropping detached target mid-animation");
                return false;
            }
            if tween.is_finished(now_ms) {
                record.tween = None;
                if record.state == TriggerState::Armed
                    && record.registration.trigger.mode == TriggerMode::Once
                {
                    record.state = TriggerState::Completed;
                    debug!(element = record.registration.target.0, "scroll trigger completed");
                }
            }
            true
        });
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.records.iter().any(ScrollTriggerRecord::is_animating)
    }

    pub fn record(&self, target: TargetId) -> Option<&ScrollTriggerRecord> {
        self.records
            .iter()
            .find(|record| record.registration.target == target)
    }

    pub fn records(&self) -> impl Iterator<Item = &ScrollTriggerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// In-memory surface: a bounds map plus a log of style writes.
    #[derive(Default)]
    struct TestSurface {
        bounds: HashMap<TargetId, Bounds>,
        writes: Vec<(TargetId, AnimatedProps)>,
        measurements: Cell<usize>,
    }

    impl TestSurface {
        fn with(target: TargetId, bounds: Bounds) -> Self {
            let mut surface = Self::default();
            surface.bounds.insert(target, bounds);
            surface
        }

        fn last_write(&self, target: TargetId) -> Option<AnimatedProps> {
            self.writes
                .iter()
                .rev()
                .find(|(id, _)| *id == target)
                .map(|(_, props)| *props)
        }
    }

    impl Surface for TestSurface {
        fn measure(&self, target: TargetId) -> Option<Bounds> {
            self.measurements.set(self.measurements.get() + 1);
            self.bounds.get(&target).copied()
        }

        fn apply(&mut self, target: TargetId, props: &AnimatedProps) -> bool {
            if !self.bounds.contains_key(&target) {
                return false;
            }
            self.writes.push((target, *props));
            true
        }
    }

    const OWNER: OwnerId = OwnerId(1);
    const CARD: TargetId = TargetId(10);

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport::new(1280.0, 800.0, scroll_y)
    }

    fn registration(mode: TriggerMode) -> Registration {
        Registration::new(CARD, AnimatedProps::HIDDEN.y(100.0), AnimatedProps::IDENTITY)
            .mode(mode)
            .timing(Timing::new(1000.0, Easing::Linear))
    }

    /// Card at document y 1000; start line is scroll_y + 680.
    fn setup(mode: TriggerMode) -> (ScrollEngine, TestSurface) {
        let mut surface = TestSurface::with(CARD, Bounds::new(1000.0, 0.0, 300.0, 200.0));
        let mut engine = ScrollEngine::new();
        assert!(engine.register(OWNER, registration(mode), &mut surface));
        (engine, surface)
    }

    #[test]
    fn test_register_writes_initial_state() {
        let (engine, surface) = setup(TriggerMode::Once);

        assert_eq!(surface.last_write(CARD), Some(AnimatedProps::HIDDEN.y(100.0)));
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Pending);
        assert!(engine.record(CARD).unwrap().last_measured_bounds().is_none());
    }

    #[test]
    fn test_enter_arms_and_animates_to_end_state() {
        // Arrange
        let (mut engine, mut surface) = setup(TriggerMode::Once);
        assert!(engine.update(viewport(0.0), &surface, 0.0).is_empty());

        // Act
        let events = engine.update(viewport(400.0), &surface, 100.0);

        // Assert
        assert_eq!(
            events,
            vec![TriggerEvent {
                target: CARD,
                kind: TriggerEventKind::Enter
            }]
        );
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Armed);
        assert!(engine.tick(&mut surface, 600.0));
        assert_eq!(surface.last_write(CARD).unwrap().y, 50.0);
        assert!(!engine.tick(&mut surface, 1100.0));
        assert_eq!(surface.last_write(CARD), Some(AnimatedProps::IDENTITY));
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Completed);
    }

    #[test]
    fn test_once_mode_never_rearms_after_completion() {
        // Arrange
        let (mut engine, mut surface) = setup(TriggerMode::Once);
        let mut now = 0.0;
        let mut states = Vec::new();

        // Act: three enter / exit cycles, letting each animation finish
        for _ in 0..3 {
            engine.update(viewport(400.0), &surface, now);
            states.push(engine.record(CARD).unwrap().state());
            now += 2000.0;
            engine.tick(&mut surface, now);
            states.push(engine.record(CARD).unwrap().state());

            engine.update(viewport(0.0), &surface, now);
            now += 2000.0;
            engine.tick(&mut surface, now);
            states.push(engine.record(CARD).unwrap().state());
        }

        // Assert
        assert_eq!(states[0], TriggerState::Armed);
        assert!(states[1..].iter().all(|state| *state == TriggerState::Completed));
        assert!(!engine.is_animating());
        assert_eq!(surface.last_write(CARD), Some(AnimatedProps::IDENTITY));
    }

    #[test]
    fn test_toggle_mode_reverses_on_leave_back() {
        let (mut engine, mut surface) = setup(TriggerMode::Toggle);

        engine.update(viewport(400.0), &surface, 0.0);
        engine.tick(&mut surface, 1000.0);
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Armed);

        let events = engine.update(viewport(0.0), &surface, 1000.0);
        assert_eq!(events[0].kind, TriggerEventKind::LeaveBack);
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Reversed);
        engine.tick(&mut surface, 2000.0);
        assert_eq!(surface.last_write(CARD), Some(AnimatedProps::HIDDEN.y(100.0)));

        engine.update(viewport(400.0), &surface, 2000.0);
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Armed);
    }

    #[test]
    fn test_reverse_starts_from_current_values() {
        let (mut engine, mut surface) = setup(TriggerMode::Toggle);

        engine.update(viewport(400.0), &surface, 0.0);
        engine.tick(&mut surface, 500.0);
        engine.update(viewport(0.0), &surface, 500.0);
        engine.tick(&mut surface, 500.0);

        // Half-way in, the reverse begins where the forward tween stopped
        assert_eq!(surface.last_write(CARD).unwrap().y, 50.0);
    }

    #[test]
    fn test_end_line_is_reported_without_state_change() {
        let (mut engine, surface) = setup(TriggerMode::Toggle);

        engine.update(viewport(400.0), &surface, 0.0);
        // bottom 1200 <= 1100 + 160
        let events = engine.update(viewport(1100.0), &surface, 10.0);

        assert_eq!(events, vec![TriggerEvent { target: CARD, kind: TriggerEventKind::Leave }]);
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Armed);
        let events = engine.update(viewport(400.0), &surface, 20.0);
        assert_eq!(events[0].kind, TriggerEventKind::EnterBack);
    }

    #[test]
    fn test_resize_remeasures_before_intersection_test() {
        // Arrange: card measured at y 1000, out of reach of the 680 start line
        let (mut engine, mut surface) = setup(TriggerMode::Once);
        engine.update(viewport(0.0), &surface, 0.0);
        assert_eq!(
            engine.record(CARD).unwrap().last_measured_bounds().unwrap().top,
            1000.0
        );

        // Act: a wider viewport reflows the card up to y 600
        surface.bounds.insert(CARD, Bounds::new(600.0, 0.0, 300.0, 200.0));
        let events = engine.update(Viewport::new(1600.0, 800.0, 0.0), &surface, 10.0);

        // Assert: fired against the new bounds, not the stale ones
        assert_eq!(events[0].kind, TriggerEventKind::Enter);
        assert_eq!(
            engine.record(CARD).unwrap().last_measured_bounds().unwrap().top,
            600.0
        );
    }

    #[test]
    fn test_bounds_cached_between_scrolls() {
        let (mut engine, surface) = setup(TriggerMode::Once);

        engine.update(viewport(0.0), &surface, 0.0);
        engine.update(viewport(10.0), &surface, 1.0);
        engine.update(viewport(20.0), &surface, 2.0);

        assert_eq!(surface.measurements.get(), 1);
    }

    #[test]
    fn test_invalidate_forces_remeasure() {
        let (mut engine, mut surface) = setup(TriggerMode::Once);
        engine.update(viewport(0.0), &surface, 0.0);

        engine.invalidate();
        assert!(engine.record(CARD).unwrap().last_measured_bounds().is_none());
        surface.bounds.insert(CARD, Bounds::new(100.0, 40.0, 300.0, 200.0));
        engine.update(viewport(0.0), &surface, 1.0);

        let bounds = engine.record(CARD).unwrap().last_measured_bounds().unwrap();
        assert_eq!((bounds.top, bounds.left), (100.0, 40.0));
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Armed);
    }

    #[test]
    fn test_detached_target_is_dropped_silently() {
        let (mut engine, mut surface) = setup(TriggerMode::Once);
        engine.update(viewport(400.0), &surface, 0.0);
        assert!(engine.is_animating());

        surface.bounds.clear();
        let writes = surface.writes.len();

        assert!(!engine.tick(&mut surface, 100.0));
        assert!(engine.is_empty());
        assert_eq!(surface.writes.len(), writes);
    }

    #[test]
    fn test_unmeasurable_target_dropped_on_refresh() {
        let (mut engine, mut surface) = setup(TriggerMode::Once);
        surface.bounds.clear();

        engine.refresh(&surface);

        assert!(engine.is_empty());
        assert!(!engine.register(OWNER, registration(TriggerMode::Once), &mut surface));
    }

    #[test]
    fn test_unregister_owner_cancels_in_flight_tweens() {
        // Arrange
        let (mut engine, mut surface) = setup(TriggerMode::Once);
        let other = TargetId(11);
        surface.bounds.insert(other, Bounds::new(5000.0, 0.0, 10.0, 10.0));
        let reg = Registration::new(other, AnimatedProps::HIDDEN, AnimatedProps::IDENTITY);
        engine.register(OwnerId(2), reg, &mut surface);
        engine.update(viewport(400.0), &surface, 0.0);
        let writes = surface.writes.len();

        // Act
        assert_eq!(engine.unregister_owner(OWNER), 1);
        engine.tick(&mut surface, 500.0);

        // Assert
        assert!(engine.record(CARD).is_none());
        assert_eq!(engine.len(), 1);
        assert_eq!(surface.writes.len(), writes);
        assert_eq!(engine.unregister_owner(OWNER), 0);
    }

    #[test]
    fn test_anchor_decides_firing() {
        let anchor = TargetId(99);
        let mut surface = TestSurface::with(CARD, Bounds::new(5000.0, 0.0, 10.0, 10.0));
        surface.bounds.insert(anchor, Bounds::new(100.0, 0.0, 10.0, 10.0));
        let mut engine = ScrollEngine::new();
        engine.register(OWNER, registration(TriggerMode::Once).anchor(anchor), &mut surface);

        let events = engine.update(viewport(0.0), &surface, 0.0);

        assert_eq!(events[0].target, CARD);
        assert_eq!(events[0].kind, TriggerEventKind::Enter);
    }

    fn scrubbed() -> Registration {
        Registration::new(CARD, AnimatedProps::IDENTITY, AnimatedProps::IDENTITY.y_percent(-30.0))
            .trigger(TriggerSpec::scrub_through())
            .timing(Timing::new(2000.0, Easing::Linear))
    }

    #[test]
    fn test_scrub_progress_spans_the_whole_pass() {
        // Card 1000..1200 in an 800 px viewport: progress runs from scroll 200 to 1200
        let trigger = TriggerSpec::scrub_through();
        let card = Bounds::new(1000.0, 0.0, 300.0, 200.0);

        assert_eq!(trigger.scrub_progress(card, viewport(0.0)), 0.0);
        assert_eq!(trigger.scrub_progress(card, viewport(200.0)), 0.0);
        assert_eq!(trigger.scrub_progress(card, viewport(700.0)), 0.5);
        assert_eq!(trigger.scrub_progress(card, viewport(1200.0)), 1.0);
        assert_eq!(trigger.scrub_progress(card, viewport(5000.0)), 1.0);
    }

    #[test]
    fn test_scrub_follows_scroll_with_lag() {
        // Arrange
        let mut surface = TestSurface::with(CARD, Bounds::new(1000.0, 0.0, 300.0, 200.0));
        let mut engine = ScrollEngine::new();
        engine.register(OWNER, scrubbed(), &mut surface);
        engine.update(viewport(0.0), &surface, 0.0);
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Pending);
        assert!(!engine.is_animating());

        // Act: scroll half-way through the pass
        engine.update(viewport(700.0), &surface, 0.0);
        engine.tick(&mut surface, 1000.0);
        let lagging = surface.last_write(CARD).unwrap();
        let still_moving = engine.tick(&mut surface, 2000.0);

        // Assert: the playhead needs the lag to catch up with the scroll position
        assert_eq!(lagging.y_percent, -7.5);
        assert_eq!(surface.last_write(CARD).unwrap().y_percent, -15.0);
        assert!(!still_moving);
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Armed);
        assert_eq!(engine.record(CARD).unwrap().scrub_progress(), Some(0.5));
    }

    #[test]
    fn test_scrub_runs_backwards_and_never_completes() {
        let mut surface = TestSurface::with(CARD, Bounds::new(1000.0, 0.0, 300.0, 200.0));
        let mut engine = ScrollEngine::new();
        engine.register(OWNER, scrubbed(), &mut surface);
        engine.update(viewport(700.0), &surface, 0.0);
        engine.tick(&mut surface, 2000.0);

        engine.update(viewport(0.0), &surface, 2000.0);
        engine.tick(&mut surface, 3000.0);
        assert_eq!(surface.last_write(CARD).unwrap().y_percent, -7.5);
        engine.tick(&mut surface, 4000.0);

        assert_eq!(surface.last_write(CARD), Some(AnimatedProps::IDENTITY));
        assert_eq!(engine.record(CARD).unwrap().state(), TriggerState::Armed);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_staggered_delay_holds_initial_state() {
        let mut surface = TestSurface::with(CARD, Bounds::new(0.0, 0.0, 10.0, 10.0));
        let mut engine = ScrollEngine::new();
        let reg = registration(TriggerMode::Once).timing(Timing::new(100.0, Easing::Linear).delayed(300.0));
        engine.register(OWNER, reg, &mut surface);

        engine.update(viewport(0.0), &surface, 0.0);
        engine.tick(&mut surface, 200.0);
        assert_eq!(surface.last_write(CARD), Some(AnimatedProps::HIDDEN.y(100.0)));

        engine.tick(&mut surface, 400.0);
        assert_eq!(surface.last_write(CARD), Some(AnimatedProps::IDENTITY));
    }
}
