//! Fallback for unknown routes.

use crate::state::use_i18n;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="not-found">
            <div class="card">
                <h1>{move || i18n.t("notFound.title")}</h1>
                <p>{move || i18n.t("notFound.body")}</p>
                <A href="/">
                    <span class="btn-primary">{move || i18n.t("notFound.home")}</span>
                </A>
            </div>
        </div>
    }
}
