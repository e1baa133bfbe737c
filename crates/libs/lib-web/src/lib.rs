//! # Web Library
//!
//! HTTP handlers, middleware and server start-up for the site.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{build_router, start_server, AppState};
