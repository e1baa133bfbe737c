//! # Core Library
//!
//! Server configuration and the application-wide error type.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{core_config, init_config, Config};
pub use error::{AppError, Result};
