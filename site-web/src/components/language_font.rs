//! Font wrapper following the active language.

use crate::state::use_i18n;
use leptos::prelude::*;
use lib_i18n::{font_family_var, FontVariant, Language};

fn font_style(language: Language, variant: FontVariant) -> String {
    format!("font-family: {};", font_family_var(language, variant))
}

/// Renders its children in the `variant` family of the active language.
/// The document root already carries the primary family; body copy asks for
/// [`FontVariant::Secondary`].
#[component]
pub fn LanguageFont(
    #[prop(optional)] variant: FontVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class=class style=move || font_style(i18n.language(), variant)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_switches_family_with_language() {
        assert_eq!(
            font_style(Language::Ar, FontVariant::Secondary),
            "font-family: var(--font-ar-secondary);"
        );
        assert_eq!(
            font_style(Language::En, FontVariant::Primary),
            "font-family: var(--font-en-primary);"
        );
    }
}
