//! Font-family selection per language.
//!
//! The stylesheet defines one CSS variable per language and variant
//! (`--font-en-primary`, `--font-ar-secondary`, ...). Components pick the
//! variable for the active language instead of hard-coding family names.

use crate::language::Language;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontVariant {
    /// Headings and display text.
    #[default]
    Primary,
    /// Body copy.
    Secondary,
}

impl FontVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// `var(--font-<lang>-<variant>)`, usable as a `font-family` value.
pub fn font_family_var(language: Language, variant: FontVariant) -> String {
    format!("var(--font-{}-{})", language.code(), variant.as_str())
}

/// Utility class carrying the same font family (`font-ar-secondary`).
pub fn font_class(language: Language, variant: FontVariant) -> String {
    format!("font-{}-{}", language.code(), variant.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_variables_follow_language() {
        assert_eq!(
            font_family_var(Language::En, FontVariant::Primary),
            "var(--font-en-primary)"
        );
        assert_eq!(
            font_family_var(Language::Ar, FontVariant::Secondary),
            "var(--font-ar-secondary)"
        );
        assert_eq!(font_class(Language::Ar, FontVariant::Primary), "font-ar-primary");
    }
}
