//! # Utilities Library
//!
//! Shared helpers for environment variables and form-field validation.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_list, get_env_or, get_env_parse};
pub use validation::{validate_email, validate_max_length, validate_not_empty};
