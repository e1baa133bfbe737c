//! Single-page layout of every section.

use crate::components::Footer;
use crate::sections::{About, Contact, Hero, Media, Operations, Sustainability};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <Hero/>
            <About/>
            <Operations/>
            <Sustainability/>
            <Media/>
            <Contact/>
        </main>
        <Footer/>
    }
}
