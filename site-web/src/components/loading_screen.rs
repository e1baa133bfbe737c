//! Loading Screen Component
//!
//! Full-screen overlay showing the background's build progress. The state
//! machine lives in [`lib_motion::LoadingScreen`]; this component feeds it progress
//! signals, ticks it once per frame and mirrors its output into the view.

use crate::services::frame_loop::{now_ms, FrameLoop};
use crate::state::{use_i18n, use_loading, use_motion};
use leptos::prelude::*;
use lib_motion::{LoaderPhase, LoadingScreen as LoaderModel};

#[derive(Clone, Debug, PartialEq)]
struct LoaderView {
    visible: bool,
    label: String,
    percent: f64,
    bar_style: String,
    container_style: String,
}

impl LoaderView {
    fn of(model: &LoaderModel, now_ms: f64) -> Self {
        let frame = model.exit_frame(now_ms);
        Self {
            visible: model.is_visible(),
            label: model.label(),
            percent: model.displayed(),
            bar_style: frame.bar.to_style(),
            container_style: frame.container.to_style(),
        }
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let i18n = use_i18n();
    let loading = use_loading();
    let config = use_motion().config();

    let model = StoredValue::new(LoaderModel::new(&config, now_ms()));
    let view_state = RwSignal::new(model.with_value(|model| LoaderView::of(model, now_ms())));

    let frames = StoredValue::new_local(FrameLoop::new(move |now| {
        let phase = model
            .try_update_value(|model| {
                let phase = model.tick(now);
                view_state.set(LoaderView::of(model, now));
                phase
            })
            .unwrap_or(LoaderPhase::Hidden);
        phase != LoaderPhase::Hidden
    }));
    frames.with_value(FrameLoop::start);

    Effect::new(move |_| {
        let progress = loading.progress();
        model.update_value(|model| model.on_progress(&progress, now_ms()));
        frames.with_value(FrameLoop::start);
    });

    Effect::new(move |_| {
        if loading.failed() {
            model.update_value(|model| model.abort(now_ms()));
            frames.with_value(FrameLoop::start);
        }
    });

    on_cleanup(move || frames.with_value(FrameLoop::stop));

    let bar_width = move || {
        view_state.with(|state| format!("width: {}%; {}", state.percent, state.bar_style))
    };

    view! {
        <Show when=move || view_state.with(|state| state.visible)>
            <div
                class="loading-screen"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || view_state.with(|state| state.percent.round().to_string())
                style=move || view_state.with(|state| state.container_style.clone())
            >
                <div class="loading-content">
                    <div class="loading-logo">"BAPETCO"</div>
                    <p class="loading-tagline">{move || i18n.t("loader.tagline")}</p>
                    <div class="loading-counter">
                        {move || view_state.with(|state| state.label.clone())}
                    </div>
                    <div class="loading-track">
                        <div class="loading-bar" style=bar_width></div>
                    </div>
                    <p class="loading-status">{move || i18n.t("loader.loading")}</p>
                </div>
            </div>
        </Show>
    }
}
