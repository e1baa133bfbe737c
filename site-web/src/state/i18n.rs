//! Localization context.
//!
//! [`Localization`] stays the single authority for language changes: it
//! writes `lang`/`dir` onto the document, notifies subscribers and schedules
//! the engine re-measurement. The `language` signal mirrors it so views
//! re-render; translation reads the shared catalog directly.

use crate::services::{document::HtmlDocument, storage};
use crate::state::motion::MotionContext;
use crate::utils::{constants::LANGUAGE_QUERY_PARAM, url::get_query_param};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use lib_i18n::{Catalog, Direction, Language, Localization, RelayoutScheduler, DEFAULT_LANGUAGE};
use std::sync::Arc;
use std::time::Duration;

/// Drops the engine's bounds on a direction flip and re-measures again with
/// [`MotionContext::relayout`] once the new direction has been laid out.
struct EngineRelayout {
    motion: MotionContext,
}

impl RelayoutScheduler for EngineRelayout {
    fn invalidate(&mut self) {
        self.motion.invalidate();
    }

    fn schedule(&mut self, delay: Duration) {
        let motion = self.motion;
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || motion.relayout()).forget();
    }
}

/// Start-up language: `?lang=` wins over the stored choice, then the default.
pub fn initial_language(query: Option<&str>, stored: Option<Language>) -> Language {
    query
        .and_then(Language::from_tag)
        .or(stored)
        .unwrap_or(DEFAULT_LANGUAGE)
}

#[derive(Clone, Copy)]
pub struct I18nContext {
    localization: StoredValue<Localization, LocalStorage>,
    catalog: StoredValue<Arc<Catalog>>,
    language: RwSignal<Language>,
}

impl I18nContext {
    pub fn new(initial: Language, catalog: Arc<Catalog>, motion: MotionContext) -> Self {
        let relayout_delay = motion.config().relayout_delay();
        let mut localization = Localization::new(initial, Arc::clone(&catalog))
            .with_document(Box::new(HtmlDocument))
            .with_relayout(Box::new(EngineRelayout { motion }), relayout_delay);
        localization.subscribe(|change| {
            log::info!("language switched {} -> {}", change.previous, change.current);
            storage::save_language(change.current);
        });

        Self {
            localization: StoredValue::new_local(localization),
            catalog: StoredValue::new(catalog),
            language: RwSignal::new(initial),
        }
    }

    /// Active language; tracked.
    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn language_untracked(&self) -> Language {
        self.language.get_untracked()
    }

    pub fn direction(&self) -> Direction {
        self.language().direction()
    }

    pub fn direction_untracked(&self) -> Direction {
        self.language_untracked().direction()
    }

    /// `t(key)` in the active language; re-runs when the language changes.
    pub fn t(&self, key: &str) -> String {
        let language = self.language.get();
        self.catalog
            .with_value(|catalog| catalog.translate(language, key))
    }

    pub fn set_language(&self, language: Language) {
        let changed = self
            .localization
            .try_update_value(|localization| localization.set_language(language))
            .unwrap_or(false);
        if changed {
            self.language.set(language);
        }
    }

    pub fn toggle(&self) {
        self.set_language(self.language_untracked().toggled());
    }
}

pub fn provide_i18n_context(motion: MotionContext) -> I18nContext {
    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("string tables failed to load, showing keys: {}", e);
            Catalog::default()
        }
    };
    let query = get_query_param(LANGUAGE_QUERY_PARAM);
    let language = initial_language(query.as_deref(), storage::load_language());
    log::info!("starting in {}", language);

    let context = I18nContext::new(language, Arc::new(catalog), motion);
    provide_context(context);
    context
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
