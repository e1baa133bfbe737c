//! # Localization Context
//!
//! One observable value holding the active [`Language`]. It is created once at
//! start-up, passed explicitly to every component that needs it, and mutated
//! only through [`Localization::set_language`] / [`Localization::toggle`].
//!
//! A language change runs three steps, in this order and synchronously:
//!
//! 1. the document root receives the new `lang` / `dir` attributes
//! 2. every subscriber is notified with a [`LanguageChange`]
//! 3. cached layout measurements are dropped at once, so nothing measured
//!    under the old direction is used again
//! 4. a re-measurement pass is scheduled after [`DEFAULT_RELAYOUT_DELAY`]
//!    (or the configured delay) so the new layout can settle first
//!
//! Rendering surfaces plug in through [`DocumentRoot`] and [`RelayoutScheduler`];
//! the no-op implementations make the context usable in plain unit tests.

use crate::catalog::Catalog;
use crate::language::{Direction, Language};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Delay between a direction flip and the scheduled re-measurement pass.
pub const DEFAULT_RELAYOUT_DELAY: Duration = Duration::from_millis(100);

/// Receives document-level attributes on every language change.
pub trait DocumentRoot {
    fn apply(&mut self, language: Language, direction: Direction);
}

/// Invalidates layout measurements after a direction change.
pub trait RelayoutScheduler {
    /// Drop cached measurements now.
    fn invalidate(&mut self);

    /// Re-measure again once the new layout has settled.
    fn schedule(&mut self, delay: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDocument;

impl DocumentRoot for NoopDocument {
    fn apply(&mut self, _language: Language, _direction: Direction) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRelayout;

impl RelayoutScheduler for NoopRelayout {
    fn invalidate(&mut self) {}

    fn schedule(&mut self, _delay: Duration) {}
}

/// Payload delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChange {
    pub previous: Language,
    pub current: Language,
}

impl LanguageChange {
    pub const fn direction(&self) -> Direction {
        self.current.direction()
    }

    /// True when the change flipped the layout direction.
    pub fn direction_changed(&self) -> bool {
        self.previous.direction() != self.current.direction()
    }
}

/// Handle returned by [`Localization::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&LanguageChange)>;

pub struct Localization {
    language: Language,
    catalog: Arc<Catalog>,
    document: Box<dyn DocumentRoot>,
    relayout: Box<dyn RelayoutScheduler>,
    relayout_delay: Duration,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl fmt::Debug for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localization")
            .field("language", &self.language)
            .field("relayout_delay", &self.relayout_delay)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Localization {
    pub fn new(language: Language, catalog: Arc<Catalog>) -> Self {
        Self {
            language,
            catalog,
            document: Box::new(NoopDocument),
            relayout: Box::new(NoopRelayout),
            relayout_delay: DEFAULT_RELAYOUT_DELAY,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Attach the document root. The current attributes are applied immediately.
    pub fn with_document(mut self, mut document: Box<dyn DocumentRoot>) -> Self {
        document.apply(self.language, self.language.direction());
        self.document = document;
        self
    }

    pub fn with_relayout(mut self, relayout: Box<dyn RelayoutScheduler>, delay: Duration) -> Self {
        self.relayout = relayout;
        self.relayout_delay = delay;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// `t(key)` for the active language. Never fails.
    pub fn translate(&self, key: &str) -> String {
        self.catalog.translate(self.language, key)
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&LanguageChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Switch to `language`. A no-op returning false when it is already active.
    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }

        let change = LanguageChange {
            previous: self.language,
            current: language,
        };
        self.language = language;
        debug!(from = %change.previous, to = %change.current, "language changed");

        self.document.apply(language, language.direction());
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&change);
        }
        self.relayout.invalidate();
        self.relayout.schedule(self.relayout_delay);
        true
    }

    /// Switch to the other language and return it.
    pub fn toggle(&mut self) -> Language {
        let next = self.language.toggled();
        self.set_language(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct RecordingDocument(Log);

    impl DocumentRoot for RecordingDocument {
        fn apply(&mut self, language: Language, direction: Direction) {
            self.0.borrow_mut().push(format!("document {language} {direction}"));
        }
    }

    struct RecordingRelayout(Log);

    impl RelayoutScheduler for RecordingRelayout {
        fn invalidate(&mut self) {
            self.0.borrow_mut().push("invalidate".to_string());
        }

        fn schedule(&mut self, delay: Duration) {
            self.0.borrow_mut().push(format!("relayout {}", delay.as_millis()));
        }
    }

    fn localization(log: &Log) -> Localization {
        let catalog = Arc::new(Catalog::embedded().unwrap());
        Localization::new(Language::En, catalog)
            .with_document(Box::new(RecordingDocument(log.clone())))
            .with_relayout(Box::new(RecordingRelayout(log.clone())), DEFAULT_RELAYOUT_DELAY)
    }

    #[test]
    fn test_document_applied_when_attached() {
        // Arrange
        let log = Log::default();

        // Act
        let _l10n = localization(&log);

        // Assert
        assert_eq!(*log.borrow(), vec!["document en ltr"]);
    }

    #[test]
    fn test_change_runs_document_then_subscribers_then_relayout() {
        // Arrange
        let log = Log::default();
        let mut l10n = localization(&log);
        let sub_log = log.clone();
        l10n.subscribe(move |change| {
            sub_log
                .borrow_mut()
                .push(format!("subscriber {} {}", change.current, change.direction()));
        });
        log.borrow_mut().clear();

        // Act
        let changed = l10n.set_language(Language::Ar);

        // Assert
        assert!(changed);
        assert_eq!(
            *log.borrow(),
            vec!["document ar rtl", "subscriber ar rtl", "invalidate", "relayout 100"]
        );
        assert_eq!(l10n.direction(), Direction::Rtl);
    }

    #[test]
    fn test_measurements_dropped_before_the_deferred_pass() {
        // Arrange
        let log = Log::default();
        let mut l10n = localization(&log);
        log.borrow_mut().clear();

        // Act: flip twice in a row
        l10n.toggle();
        l10n.toggle();

        // Assert: every flip invalidates synchronously, ahead of its own deferred pass
        assert_eq!(
            *log.borrow(),
            vec![
                "document ar rtl",
                "invalidate",
                "relayout 100",
                "document en ltr",
                "invalidate",
                "relayout 100",
            ]
        );
    }

    #[test]
    fn test_setting_current_language_is_a_noop() {
        let log = Log::default();
        let mut l10n = localization(&log);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        l10n.subscribe(move |_| *counter.borrow_mut() += 1);
        log.borrow_mut().clear();

        assert!(!l10n.set_language(Language::En));

        assert!(log.borrow().is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut l10n = localization(&Log::default());
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let id = l10n.subscribe(move |_| *counter.borrow_mut() += 1);

        l10n.toggle();
        assert!(l10n.unsubscribe(id));
        assert!(!l10n.unsubscribe(id));
        l10n.toggle();

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_translate_follows_active_language() {
        let mut l10n = localization(&Log::default());
        assert_eq!(l10n.translate("nav.contact"), "Contact");

        assert_eq!(l10n.toggle(), Language::Ar);
        assert_eq!(l10n.translate("nav.contact"), "اتصل بنا");
        assert_eq!(l10n.translate("missing.key"), "missing.key");
    }

    #[test]
    fn test_change_reports_direction_flip() {
        let change = LanguageChange {
            previous: Language::En,
            current: Language::Ar,
        };
        assert!(change.direction_changed());
        assert_eq!(change.direction(), Direction::Rtl);
    }
}
