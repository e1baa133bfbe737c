//! BAPETCO site - Leptos front end
//!
//! Wires the shared contexts, the window listeners that drive the scroll
//! engine and the router.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use lib_motion::MotionConfig;

use crate::components::{LoadingScreen, Navbar, Starfield};
use crate::pages::{HomePage, NotFound};
use crate::state::{provide_i18n_context, provide_loading_context, provide_motion_context};

fn motion_config() -> MotionConfig {
    let config = MotionConfig::default();
    if let Err(e) = config.validate() {
        log::error!("invalid motion config: {}", e);
    }
    config
}

#[component]
pub fn App() -> impl IntoView {
    let motion = provide_motion_context(motion_config());
    provide_i18n_context(motion);
    provide_loading_context();

    // The engine detects a viewport size change itself and re-measures.
    let on_scroll = window_event_listener(ev::scroll, move |_| motion.schedule_update());
    let on_resize = window_event_listener(ev::resize, move |_| motion.schedule_update());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    view! {
        <Router>
            <LoadingScreen/>
            <Starfield/>
            <Navbar/>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}
