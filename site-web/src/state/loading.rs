//! Load progress of the decorative background, read by the loading screen.

use leptos::prelude::*;
use lib_motion::LoadProgress;

#[derive(Clone, Copy)]
pub struct LoadingContext {
    progress: RwSignal<LoadProgress>,
    failed: RwSignal<bool>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            progress: RwSignal::new(LoadProgress::loading(0.0, "")),
            failed: RwSignal::new(false),
        }
    }

    /// Latest signal; tracked.
    pub fn progress(&self) -> LoadProgress {
        self.progress.get()
    }

    pub fn failed(&self) -> bool {
        self.failed.get()
    }

    pub fn report(&self, progress: LoadProgress) {
        self.progress.set(progress);
    }

    /// The background could not build; the loading screen exits at once.
    pub fn fail(&self) {
        self.failed.set(true);
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_loading_context() -> LoadingContext {
    let context = LoadingContext::new();
    provide_context(context);
    context
}

pub fn use_loading() -> LoadingContext {
    expect_context::<LoadingContext>()
}
