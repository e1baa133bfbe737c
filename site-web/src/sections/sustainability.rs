//! Sustainability section.
//!
//! Initiative cards use toggle triggers: they fold away again when the
//! reader scrolls back above them.

use crate::components::{Entrance, Reveal};
use crate::state::use_i18n;
use leptos::prelude::*;

const INITIATIVES: [(&str, &str); 6] = [
    ("environment", "🌍"),
    ("water", "💧"),
    ("renewable", "☀️"),
    ("biodiversity", "🦋"),
    ("community", "🤝"),
    ("hse", "🦺"),
];

const CERTIFICATIONS: [&str; 4] = ["ISO 14001", "ISO 45001", "ISO 9001", "ISO 50001"];

const CERTIFICATION_STAGGER_MS: f64 = 200.0;

#[component]
pub fn Sustainability() -> impl IntoView {
    let i18n = use_i18n();

    let initiatives = INITIATIVES
        .iter()
        .enumerate()
        .map(|(index, (name, icon))| {
            let base = format!("sustainability.initiatives.{}", name);
            let title = format!("{base}.title");
            let description = format!("{base}.description");
            let metric = format!("{base}.metric");
            let metric_label = format!("{base}.metricLabel");
            view! {
                <Reveal entrance=Entrance::RiseIn index=index toggle=true class="initiative-card">
                    <div class="initiative-icon">{*icon}</div>
                    <h3>{move || i18n.t(&title)}</h3>
                    <p>{move || i18n.t(&description)}</p>
                    <div class="initiative-metric">
                        <span class="metric-value" dir="ltr">{move || i18n.t(&metric)}</span>
                        <span class="metric-label">{move || i18n.t(&metric_label)}</span>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    let certifications = CERTIFICATIONS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            view! {
                <Reveal
                    entrance=Entrance::FromStart
                    delay_ms=index as f64 * CERTIFICATION_STAGGER_MS
                    class="certification"
                >
                    <span class="certification-mark">"✓"</span>
                    <span dir="ltr">{*name}</span>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="sustainability" class="section sustainability">
            <Reveal entrance=Entrance::RiseIn toggle=true class="section-header">
                <span class="section-badge">{move || i18n.t("sustainability.badge")}</span>
                <h2 class="section-title">
                    <span>{move || i18n.t("sustainability.title.line1")}</span>
                    " "
                    <span class="gradient-text-gold">{move || i18n.t("sustainability.title.line2")}</span>
                </h2>
                <p class="section-intro">{move || i18n.t("sustainability.subtitle")}</p>
            </Reveal>

            <div class="initiative-grid">{initiatives}</div>

            <div class="certifications">
                <h3>{move || i18n.t("sustainability.certifications")}</h3>
                <div class="certification-list">{certifications}</div>
            </div>
        </section>
    }
}
