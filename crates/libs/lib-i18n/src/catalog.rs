//! String tables for every supported language.
//!
//! Each table is a JSON tree addressed by dotted paths (`hero.title.line1`).
//! Lookups never fail: a missing key resolves to the key itself and is logged
//! once per `(language, key)` pair.

use crate::language::Language;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;

const EN_TABLE: &str = include_str!("../locales/en.json");
const AR_TABLE: &str = include_str!("../locales/ar.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("string table for '{language}' is not valid JSON: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("string table for '{0}' must be a JSON object")]
    NotAnObject(Language),
}

/// Parsed string tables for all languages.
#[derive(Debug)]
pub struct Catalog {
    en: Value,
    ar: Value,
    reported: Mutex<HashSet<(Language, String)>>,
}

impl Catalog {
    /// Tables compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EN_TABLE, AR_TABLE)
    }

    pub fn from_json(en: &str, ar: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            en: parse_table(Language::En, en)?,
            ar: parse_table(Language::Ar, ar)?,
            reported: Mutex::new(HashSet::new()),
        })
    }

    fn table(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Look up `key` for `language`, or `None` when absent or not a string.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.table(language);
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// Translate `key`, falling back to the key itself.
    pub fn translate(&self, language: Language, key: &str) -> String {
        match self.lookup(language, key) {
            Some(text) => text.to_string(),
            None => {
                self.report_missing(language, key);
                key.to_string()
            }
        }
    }

    fn report_missing(&self, language: Language, key: &str) {
        let Ok(mut reported) = self.reported.lock() else {
            return;
        };
        if reported.insert((language, key.to_string())) {
            warn!(language = %language, key, "missing translation, falling back to key");
        }
    }
}

impl Default for Catalog {
    /// Empty tables; every lookup falls back to its key.
    fn default() -> Self {
        Self {
            en: Value::Object(Default::default()),
            ar: Value::Object(Default::default()),
            reported: Mutex::new(HashSet::new()),
        }
    }
}

fn parse_table(language: Language, raw: &str) -> Result<Value, CatalogError> {
    let tree: Value =
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse { language, source })?;
    if !tree.is_object() {
        return Err(CatalogError::NotAnObject(language));
    }
    Ok(tree)
}
