//! Animation engine context.
//!
//! One [`ScrollEngine`] and one [`DomSurface`] per page, shared through
//! Leptos context. Scroll, resize and registration only mark the engine
//! dirty and wake the frame loop; intersection tests and tween writes happen
//! inside the frame callback, once per frame.

use crate::services::dom_surface::{read_viewport, DomSurface};
use crate::services::frame_loop::FrameLoop;
use leptos::prelude::*;
use lib_motion::{
    MotionConfig, OwnerId, Registration, ScrollEngine, TargetId, TriggerSpec, TriggerState,
};
use web_sys::HtmlElement;

#[derive(Clone, Copy)]
pub struct MotionContext {
    engine: StoredValue<ScrollEngine, LocalStorage>,
    surface: StoredValue<DomSurface, LocalStorage>,
    frames: StoredValue<Option<FrameLoop>, LocalStorage>,
    config: StoredValue<MotionConfig>,
    next_id: StoredValue<u64>,
    dirty: StoredValue<bool>,
}

impl MotionContext {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            engine: StoredValue::new_local(ScrollEngine::new()),
            surface: StoredValue::new_local(DomSurface::new()),
            frames: StoredValue::new_local(None),
            config: StoredValue::new(config),
            next_id: StoredValue::new(0),
            dirty: StoredValue::new(false),
        }
    }

    pub fn config(&self) -> MotionConfig {
        self.config.get_value()
    }

    pub fn trigger(&self) -> TriggerSpec {
        self.config.with_value(TriggerSpec::from_config)
    }

    fn next_id(&self) -> u64 {
        self.next_id
            .try_update_value(|id| {
                *id += 1;
                *id
            })
            .unwrap_or_default()
    }

    pub fn owner(&self) -> OwnerId {
        OwnerId(self.next_id())
    }

    pub fn target(&self) -> TargetId {
        TargetId(self.next_id())
    }

    /// Bind `element` to the registration's target and write its from-state.
    pub fn register(&self, owner: OwnerId, element: HtmlElement, registration: Registration) {
        let target = registration.target;
        self.surface
            .update_value(|surface| surface.insert(owner, target, element));
        let registered = self
            .surface
            .try_update_value(|surface| {
                self.engine
                    .try_update_value(|engine| engine.register(owner, registration, surface))
            })
            .flatten()
            .unwrap_or(false);
        if !registered {
            log::debug!("entrance {} not registered, element detached", target.0);
        }
        self.schedule_update();
    }

    /// Replace a registration that has not fired yet, e.g. with mirrored
    /// offsets after a direction flip. Entrances already played are left alone.
    pub fn remirror(&self, owner: OwnerId, registration: Registration) {
        let target = registration.target;
        let pending = self.engine.with_value(|engine| {
            engine
                .record(target)
                .is_some_and(|record| record.state() == TriggerState::Pending)
        });
        if !pending {
            return;
        }
        self.surface.update_value(|surface| {
            self.engine.update_value(|engine| {
                engine.register(owner, registration, surface);
            });
        });
        self.schedule_update();
    }

    /// Drop every record of `owner` and cancel its tweens.
    pub fn release(&self, owner: OwnerId) {
        self.engine.update_value(|engine| {
            engine.unregister_owner(owner);
        });
        self.surface.update_value(|surface| surface.remove_owner(owner));
    }

    /// Forget every measured bound; the next frame re-measures before testing.
    pub fn invalidate(&self) {
        self.engine.update_value(|engine| engine.invalidate());
        self.schedule_update();
    }

    /// Second pass after a direction flip, once the reflow has settled.
    pub fn relayout(&self) {
        log::debug!("re-measuring scroll triggers");
        self.invalidate();
    }

    /// Run intersection tests on the next frame.
    pub fn schedule_update(&self) {
        self.dirty.set_value(true);
        let motion = *self;
        self.frames.update_value(|frames| {
            frames
                .get_or_insert_with(|| FrameLoop::new(move |now| motion.frame(now)))
                .start();
        });
    }

    fn frame(&self, now_ms: f64) -> bool {
        let dirty = self
            .dirty
            .try_update_value(std::mem::take)
            .unwrap_or(false);

        if dirty {
            if let Some(viewport) = read_viewport() {
                self.surface.with_value(|surface| {
                    self.engine.update_value(|engine| {
                        for event in engine.update(viewport, surface, now_ms) {
                            log::trace!("trigger {:?} on {}", event.kind, event.target.0);
                        }
                    });
                });
            }
        }

        self.surface
            .try_update_value(|surface| {
                self.engine
                    .try_update_value(|engine| engine.tick(surface, now_ms))
            })
            .flatten()
            .unwrap_or(false)
    }
}

pub fn provide_motion_context(config: MotionConfig) -> MotionContext {
    let context = MotionContext::new(config);
    provide_context(context);
    context
}

pub fn use_motion() -> MotionContext {
    expect_context::<MotionContext>()
}
