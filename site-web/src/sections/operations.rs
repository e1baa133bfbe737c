//! Operations section: one card per area of the upstream value chain.

use crate::components::{Entrance, Reveal};
use crate::state::use_i18n;
use leptos::prelude::*;

const AREAS: [(&str, &str); 6] = [
    ("exploration", "🔍"),
    ("drilling", "⚙️"),
    ("production", "🛢️"),
    ("facilities", "🏭"),
    ("pipeline", "🔗"),
    ("technology", "📡"),
];

#[component]
pub fn Operations() -> impl IntoView {
    let i18n = use_i18n();

    let cards = AREAS
        .iter()
        .enumerate()
        .map(|(index, (area, icon))| {
            let title = format!("operations.areas.{}", area);
            let description = format!("operations.areas.{}Desc", area);
            view! {
                <Reveal entrance=Entrance::TiltIn index=index class="operations-card">
                    <div class="operations-icon">{*icon}</div>
                    <h3>{move || i18n.t(&title)}</h3>
                    <p>{move || i18n.t(&description)}</p>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="operations" class="section operations">
            <Reveal entrance=Entrance::FadeInUp class="section-header">
                <h2 class="section-title">{move || i18n.t("operations.title")}</h2>
                <p class="section-intro">{move || i18n.t("operations.description")}</p>
            </Reveal>
            <div class="operations-grid">{cards}</div>
        </section>
    }
}
