//! # HTTP Request Handlers
//!
//! Axum handlers for the few dynamic endpoints of the site. Everything else is
//! static content served from the dist directory.
//!
//! ## Handler Modules
//!
//! - **[`contact`]**: Contact form submission
//!   - `POST /api/contact` - Validate and acknowledge a message
//!
//! - **[`health`]**: Liveness check
//!   - `GET /health` - Always `200 OK`
//!
//! ## Error Handling
//!
//! Handlers return `Result<T, AppError>`; [`lib_core::AppError`] renders the
//! status code and the `{ "error", "code" }` body.

pub mod contact;
pub mod health;
