//! Application state shared through Leptos context.

pub mod i18n;
pub mod loading;
pub mod motion;

pub use i18n::{provide_i18n_context, use_i18n, I18nContext};
pub use loading::{provide_loading_context, use_loading, LoadingContext};
pub use motion::{provide_motion_context, use_motion, MotionContext};
