//! About section: heritage highlights and impact figures.

use crate::components::{Entrance, LanguageFont, Parallax, Reveal};
use crate::state::use_i18n;
use crate::utils::format::localize_digits;
use leptos::prelude::*;
use lib_i18n::FontVariant;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("heritage", "🏛️"),
    ("innovation", "💡"),
    ("sustainability", "🌱"),
];

/// `(figure, label key)`; figures are rendered in the active script.
const IMPACT: [(&str, &str); 4] = [
    ("40+", "about.impact.experience"),
    ("150K", "about.impact.daily"),
    ("1200+", "about.impact.employees"),
    ("99.8%", "about.impact.safety"),
];

#[component]
pub fn About() -> impl IntoView {
    let i18n = use_i18n();

    let highlights = HIGHLIGHTS
        .iter()
        .enumerate()
        .map(|(index, (name, icon))| {
            let base = format!("about.highlights.{}", name);
            let title = format!("{base}.title");
            let subtitle = format!("{base}.subtitle");
            let description = format!("{base}.description");
            view! {
                <Reveal entrance=Entrance::RiseIn index=index class="highlight-card">
                    <div class="highlight-icon">{*icon}</div>
                    <h3>{move || i18n.t(&title)}</h3>
                    <p class="highlight-subtitle">{move || i18n.t(&subtitle)}</p>
                    <p>{move || i18n.t(&description)}</p>
                </Reveal>
            }
        })
        .collect_view();

    let impact = IMPACT
        .iter()
        .enumerate()
        .map(|(index, (figure, label_key))| {
            let figure = *figure;
            let label_key = *label_key;
            view! {
                <Reveal entrance=Entrance::FlipIn index=index class="impact-stat">
                    <div class="impact-value">{move || localize_digits(i18n.language(), figure)}</div>
                    <div class="impact-label">{move || i18n.t(label_key)}</div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section about">
            <Parallax shift_percent=-30.0 class="about-bg">
                <div class="about-bg-element about-bg-glow"></div>
                <div class="about-bg-element about-bg-grid"></div>
            </Parallax>

            <Reveal entrance=Entrance::RiseIn class="section-header">
                <span class="section-badge">{move || i18n.t("about.top")}</span>
                <h2 class="section-title">
                    <span>{move || i18n.t("about.title.line1")}</span>
                    " "
                    <span class="gradient-text-gold">{move || i18n.t("about.title.line2")}</span>
                </h2>
                <LanguageFont variant=FontVariant::Secondary>
                    <p class="section-intro">{move || i18n.t("about.intro")}</p>
                </LanguageFont>
            </Reveal>

            <div class="highlight-grid">{highlights}</div>

            <div class="impact">
                <Reveal entrance=Entrance::FadeInUp>
                    <h3 class="impact-title">{move || i18n.t("about.impact.title")}</h3>
                </Reveal>
                <div class="impact-grid">{impact}</div>
            </div>
        </section>
    }
}
