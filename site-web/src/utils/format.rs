//! # Formatting Utilities
//!
//! Localized dates and digits for the media centre and statistics.
//!
//! ## Functions
//!
//! - [`localize_digits`] - Swap ASCII digits for Arabic-Indic digits under Arabic
//! - [`format_date`] - "January 15, 2025" / "١٥ يناير ٢٠٢٥"

use chrono::{Datelike, NaiveDate};
use lib_i18n::Language;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Render ASCII digits in the script of `language`; other characters pass through.
pub fn localize_digits(language: Language, text: &str) -> String {
    match language {
        Language::En => text.to_string(),
        Language::Ar => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => ARABIC_INDIC_DIGITS[d as usize],
                None => c,
            })
            .collect(),
    }
}

/// Translation key of a month name (`media.months.1` .. `media.months.12`).
pub fn month_key(date: NaiveDate) -> String {
    format!("media.months.{}", date.month())
}

/// Long date using an already translated `month_name`.
pub fn format_date(language: Language, date: NaiveDate, month_name: &str) -> String {
    match language {
        Language::En => format!("{} {}, {}", month_name, date.day(), date.year()),
        Language::Ar => localize_digits(
            language,
            &format!("{} {} {}", date.day(), month_name, date.year()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_english_date() {
        assert_eq!(format_date(Language::En, date(), "January"), "January 15, 2025");
        assert_eq!(month_key(date()), "media.months.1");
    }

    #[test]
    fn test_arabic_date_uses_day_first_and_arabic_digits() {
        assert_eq!(format_date(Language::Ar, date(), "يناير"), "١٥ يناير ٢٠٢٥");
    }

    #[test]
    fn test_localize_digits_keeps_symbols() {
        assert_eq!(localize_digits(Language::Ar, "99.8%"), "٩٩.٨%");
        assert_eq!(localize_digits(Language::En, "99.8%"), "99.8%");
    }
}
