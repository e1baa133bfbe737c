//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the front end and backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`contact`] - Contact form submission, acknowledgement and error body
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! POST /api/contact
//! Content-Type: application/json
//!
//! {
//!   "name": "Mona Hassan",
//!   "email": "mona@example.com",
//!   "phone": "+20 100 000 0000",
//!   "department": "operations",
//!   "message": "I would like to learn more about your field operations."
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 202 Accepted
//! Content-Type: application/json
//!
//! {
//!   "reference": "4f9c2d7e-0b1a-4c55-9d0e-2b8f6a1c3e77",
//!   "message": "Message received"
//! }
//! ```
//!
//! ### Validation Failure
//!
//! ```text
//! HTTP/1.1 422 Unprocessable Entity
//! Content-Type: application/json
//!
//! {
//!   "error": "Please correct the highlighted fields",
//!   "code": "Validation",
//!   "fields": [
//!     { "field": "email", "kind": "invalid_email", "key": "contact.errors.email" }
//!   ]
//! }
//! ```

pub mod contact;

pub use contact::*;
