//! Starfield Background Component
//!
//! Decorative twinkling background. Stars are created in batches, one batch
//! per frame, and every batch reports a [`LoadProgress`] to the loading
//! screen. A missing container is reported as a failure so the loading
//! screen does not wait for a background that will never finish.

use crate::state::{use_loading, LoadingContext};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_motion::LoadProgress;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

const STARFIELD_ID: &str = "starfield";
const STAR_COUNT: usize = 150;
const BATCH_SIZE: usize = 25;
const FRAME_MS: u32 = 16;

#[component]
pub fn Starfield() -> impl IntoView {
    let loading = use_loading();

    leptos::task::spawn_local(async move {
        // Wait for the container to be attached.
        TimeoutFuture::new(100).await;
        if let Err(e) = build(loading).await {
            log::warn!("starfield unavailable: {:?}", e);
            loading.fail();
        }
    });

    view! {
        <div class="starfield" id=STARFIELD_ID aria-hidden="true"></div>
    }
}

async fn build(loading: LoadingContext) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(STARFIELD_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| JsValue::from_str("starfield container missing"))?;

    let batches = STAR_COUNT.div_ceil(BATCH_SIZE);
    for batch in 0..batches {
        let count = BATCH_SIZE.min(STAR_COUNT - batch * BATCH_SIZE);
        for _ in 0..count {
            let star: web_sys::Element = create_star(&document)?;
            container.append_child(&star)?;
        }

        let percent = (batch + 1) as f64 / batches as f64 * 100.0;
        loading.report(LoadProgress::loading(
            percent,
            format!("stars {}/{}", batch + 1, batches),
        ));
        TimeoutFuture::new(FRAME_MS).await;
    }

    loading.report(LoadProgress::done());
    log::debug!("starfield ready with {} stars", STAR_COUNT);
    Ok(())
}

fn create_star(document: &Document) -> Result<web_sys::Element, JsValue> {
    let star = document.create_element("div")?;
    star.set_class_name("star");

    let left = js_sys::Math::random() * 100.0;
    let top = js_sys::Math::random() * 100.0;
    let delay = js_sys::Math::random() * 3.0;
    let mut style = format!(
        "left: {}%; top: {}%; animation-delay: {}s;",
        left, top, delay
    );

    // One in five stars is larger and glows in the brand amber.
    if js_sys::Math::random() > 0.8 {
        let size = js_sys::Math::random() * 3.0 + 2.0;
        style.push_str(&format!(
            " width: {size}px; height: {size}px; background: #f5b041; \
             box-shadow: 0 0 10px rgba(245, 176, 65, 0.9);"
        ));
    } else {
        let size = js_sys::Math::random() * 2.0 + 1.0;
        style.push_str(&format!(" width: {size}px; height: {size}px;"));
    }

    star.set_attribute("style", &style)?;
    Ok(star)
}
