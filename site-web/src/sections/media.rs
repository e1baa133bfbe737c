//! Media centre: filterable news grid.
//!
//! Cards are keyed by `(filter, id)`, so switching the filter remounts every
//! visible card and replays its entrance.

use crate::components::{Entrance, Reveal};
use crate::state::{use_i18n, I18nContext};
use crate::utils::format::{format_date, month_key};
use leptos::prelude::*;
use lib_motion::{AnimatedProps, Easing, Preset, Timing};
use shared::{filter_news, NewsFilter, NewsItem};

fn card_preset() -> Preset {
    Preset::new(
        AnimatedProps::HIDDEN.y(50.0).scale(0.95),
        Timing::new(800.0, Easing::Power4Out),
    )
}

fn published_label(i18n: I18nContext, item: &NewsItem) -> String {
    match item.date() {
        Some(date) => format_date(i18n.language(), date, &i18n.t(&month_key(date))),
        None => item.published.to_string(),
    }
}

#[component]
fn NewsCard(item: NewsItem, index: usize) -> impl IntoView {
    let i18n = use_i18n();
    let category_key = item.category.label_key();
    let title_key = item.title_key();
    let excerpt_key = item.excerpt_key();

    view! {
        <Reveal preset=card_preset() index=index class="news-card">
            <article>
                <div class="news-icon">{item.icon}</div>
                <div class="news-meta">
                    <span class="news-category">{move || i18n.t(&category_key)}</span>
                    <time datetime=item.published>{move || published_label(i18n, &item)}</time>
                </div>
                <h3 class="news-title">{move || i18n.t(&title_key)}</h3>
                <p class="news-excerpt">{move || i18n.t(&excerpt_key)}</p>
                <a href="#media" class="news-link">{move || i18n.t("media.readMore")}</a>
            </article>
        </Reveal>
    }
}

#[component]
pub fn Media() -> impl IntoView {
    let i18n = use_i18n();
    let (filter, set_filter) = signal(NewsFilter::All);

    let filter_buttons = NewsFilter::ALL
        .into_iter()
        .map(|option| {
            let label_key = option.label_key();
            view! {
                <button
                    class="filter-btn"
                    class:active=move || filter.get() == option
                    on:click=move |_| {
                        if filter.get_untracked() != option {
                            log::debug!("media filter -> {}", option);
                            set_filter.set(option);
                        }
                    }
                >
                    {move || i18n.t(&label_key)}
                </button>
            }
        })
        .collect_view();

    let visible = move || {
        let current = filter.get();
        filter_news(current)
            .into_iter()
            .enumerate()
            .map(|(index, item)| (current, index, item))
            .collect::<Vec<_>>()
    };

    view! {
        <section id="media" class="section media">
            <Reveal entrance=Entrance::FadeInUp class="section-header">
                <h2 class="section-title media-title">{move || i18n.t("media.title")}</h2>
                <p class="section-intro">{move || i18n.t("media.subtitle")}</p>
            </Reveal>

            <Reveal entrance=Entrance::FadeInUp delay_ms=300.0 class="filter-bar">
                {filter_buttons}
            </Reveal>

            <div class="news-grid">
                <For
                    each=visible
                    key=|(filter, _, item)| (*filter, item.id)
                    children=move |(_, index, item)| view! { <NewsCard item=item index=index/> }
                />
            </div>
        </section>
    }
}
