//! # Localization Library
//!
//! Bilingual (English / Arabic) text and layout-direction support for the site.
//!
//! ## Modules
//!
//! - **[`language`]**: [`Language`] and its [`Direction`]
//! - **[`direction`]**: the Directional Style Resolver (logical `start`/`end` to physical `left`/`right`)
//! - **[`catalog`]**: embedded string tables and `translate(key)` with key fallback
//! - **[`context`]**: the observable [`Localization`] context (language switch, document attributes, subscribers)
//! - **[`font`]**: font-family selection per language
//!
//! ## Usage
//!
//! ```rust
//! use lib_i18n::{Catalog, Direction, Language, Localization};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::embedded().expect("embedded tables parse"));
//! let mut l10n = Localization::new(Language::En, catalog);
//! assert_eq!(l10n.translate("nav.home"), "Home");
//!
//! l10n.toggle();
//! assert_eq!(l10n.direction(), Direction::Rtl);
//! ```

pub mod catalog;
pub mod context;
pub mod direction;
pub mod font;
pub mod language;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use context::{
    DocumentRoot, LanguageChange, Localization, NoopDocument, NoopRelayout, RelayoutScheduler,
    SubscriptionId, DEFAULT_RELAYOUT_DELAY,
};
pub use direction::{
    mirror_rotation, resolve, resolve_side, translate_toward_end, LogicalOffset, LogicalSide,
    PhysicalOffset, PhysicalSide,
};
pub use font::{font_class, font_family_var, FontVariant};
pub use language::{Direction, Language, DEFAULT_LANGUAGE};
