//! # Media Centre Content
//!
//! The news items shown in the media section. Titles and excerpts are
//! translation keys (`media.items.<id>.title`), so only language-neutral data
//! lives here: category, publication date and icon.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Announcement,
    Sustainability,
    Award,
    Technology,
    Community,
    Partnership,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Announcement => "announcement",
            NewsCategory::Sustainability => "sustainability",
            NewsCategory::Award => "award",
            NewsCategory::Technology => "technology",
            NewsCategory::Community => "community",
            NewsCategory::Partnership => "partnership",
        }
    }

    /// Translation key of the badge on a news card.
    pub fn label_key(&self) -> String {
        format!("media.categories.{}", self.as_str())
    }
}

/// Filter buttons above the news grid.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NewsFilter {
    #[default]
    All,
    Only(NewsCategory),
}

impl NewsFilter {
    /// Filters in display order. Partnership news has no dedicated filter.
    pub const ALL: [NewsFilter; 6] = [
        NewsFilter::All,
        NewsFilter::Only(NewsCategory::Announcement),
        NewsFilter::Only(NewsCategory::Sustainability),
        NewsFilter::Only(NewsCategory::Award),
        NewsFilter::Only(NewsCategory::Technology),
        NewsFilter::Only(NewsCategory::Community),
    ];

    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            NewsFilter::All => true,
            NewsFilter::Only(category) => item.category == *category,
        }
    }

    pub fn label_key(&self) -> String {
        match self {
            NewsFilter::All => "media.filters.all".to_string(),
            NewsFilter::Only(category) => format!("media.filters.{}", category.as_str()),
        }
    }
}

impl fmt::Display for NewsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsFilter::All => f.write_str("all"),
            NewsFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u8,
    pub category: NewsCategory,
    /// ISO `YYYY-MM-DD`.
    pub published: &'static str,
    pub icon: &'static str,
}

impl NewsItem {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    pub fn title_key(&self) -> String {
        format!("media.items.{}.title", self.id)
    }

    pub fn excerpt_key(&self) -> String {
        format!("media.items.{}.excerpt", self.id)
    }
}

/// News items, newest first.
pub const NEWS_ITEMS: [NewsItem; 6] = [
    NewsItem {
        id: 1,
        category: NewsCategory::Announcement,
        published: "2025-01-15",
        icon: "🎯",
    },
    NewsItem {
        id: 2,
        category: NewsCategory::Sustainability,
        published: "2025-01-10",
        icon: "☀️",
    },
    NewsItem {
        id: 3,
        category: NewsCategory::Award,
        published: "2024-12-20",
        icon: "🏆",
    },
    NewsItem {
        id: 4,
        category: NewsCategory::Technology,
        published: "2024-12-15",
        icon: "🤖",
    },
    NewsItem {
        id: 5,
        category: NewsCategory::Community,
        published: "2024-12-01",
        icon: "📚",
    },
    NewsItem {
        id: 6,
        category: NewsCategory::Partnership,
        published: "2024-11-25",
        icon: "🤝",
    },
];

/// Items visible under `filter`, keeping the newest-first order.
pub fn filter_news(filter: NewsFilter) -> Vec<NewsItem> {
    NEWS_ITEMS
        .iter()
        .filter(|item| filter.matches(item))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_all_dates_parse_newest_first() {
        let dates: Vec<NaiveDate> = NEWS_ITEMS.iter().map(|item| item.date().unwrap()).collect();
        assert!(dates.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(dates[0].month(), 1);
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(filter_news(NewsFilter::All).len(), 6);
        let awards = filter_news(NewsFilter::Only(NewsCategory::Award));
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].id, 3);
    }

    #[test]
    fn test_translation_keys() {
        assert_eq!(NEWS_ITEMS[1].title_key(), "media.items.2.title");
        assert_eq!(NewsFilter::All.label_key(), "media.filters.all");
        assert_eq!(
            NewsFilter::Only(NewsCategory::Community).label_key(),
            "media.filters.community"
        );
        assert_eq!(NewsCategory::Partnership.label_key(), "media.categories.partnership");
    }
}
