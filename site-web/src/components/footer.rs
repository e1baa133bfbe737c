//! Site footer.

use crate::components::reveal::{Entrance, Reveal};
use crate::state::use_i18n;
use crate::utils::constants::{CONTACT_EMAIL, CONTACT_PHONE, NAV_ITEMS};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();

    let quick_links = NAV_ITEMS
        .iter()
        .map(|(key, anchor)| {
            let key = *key;
            view! {
                <li><a href=format!("#{}", anchor)>{move || i18n.t(key)}</a></li>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <Reveal entrance=Entrance::FromStart class="footer-brand">
                    <h3>{move || i18n.t("footer.company")}</h3>
                    <p>{move || i18n.t("footer.address")}</p>
                    <p>{move || i18n.t("footer.location")}</p>
                </Reveal>

                <Reveal entrance=Entrance::FadeInUp delay_ms=100.0 class="footer-links">
                    <h4>{move || i18n.t("footer.quickLinks")}</h4>
                    <ul>{quick_links}</ul>
                </Reveal>

                <Reveal entrance=Entrance::FromEnd delay_ms=200.0 class="footer-contact">
                    <h4>{move || i18n.t("footer.connect")}</h4>
                    <p>
                        <span class="footer-label">{move || i18n.t("footer.phone")}</span>
                        <a href=format!("tel:{}", CONTACT_PHONE.replace(' ', "")) dir="ltr">{CONTACT_PHONE}</a>
                    </p>
                    <p>
                        <span class="footer-label">{move || i18n.t("footer.email")}</span>
                        <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                    </p>
                </Reveal>
            </div>

            <div class="footer-bottom">
                <p>{move || i18n.t("footer.copyright")}</p>
            </div>
        </footer>
    }
}
