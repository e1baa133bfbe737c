//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the site front end and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::contact`]**: Contact form payload, response and error body
//! - **[`validation`]**: Required-field validation run by both sides before a message is accepted
//! - **[`content`]**: Static media-centre content (news items and their categories)
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in Backend
//!
//! ```rust,ignore
//! use shared::dto::contact::{ContactRequest, ContactResponse};
//! use axum::Json;
//!
//! async fn contact(Json(request): Json<ContactRequest>) -> Json<ContactResponse> {
//!     // Request is automatically deserialized from JSON
//!     // Response is automatically serialized to JSON
//!     # todo!()
//! }
//! ```
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::contact::ContactRequest;
//! use shared::validation::{validate_contact, ContactField};
//!
//! let request = ContactRequest {
//!     name: "Mona".to_string(),
//!     email: "not-an-address".to_string(),
//!     message: "Hello".to_string(),
//!     ..Default::default()
//! };
//!
//! let errors = validate_contact(&request, 5000).unwrap_err();
//! assert!(errors.for_field(ContactField::Email).is_some());
//! ```

pub mod content;
pub mod dto;
pub mod validation;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use content::*;
pub use dto::*;
pub use validation::*;
