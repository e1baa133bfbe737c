//! # Contact Handler
//!
//! Accepts contact form submissions. The payload is validated with the same
//! rules the front end applies before sending, then acknowledged with a
//! reference id. Nothing is stored or forwarded.
//!
//! ## Endpoints
//!
//! - `POST /api/contact` - Submit a message
//!
//! ## Request Example
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/contact \
//!   -H 'content-type: application/json' \
//!   -d '{"name":"Mona","email":"mona@example.com","message":"Hello"}'
//! ```

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use lib_core::{AppError, Config};
use shared::{validate_contact, ContactRequest, ContactResponse};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Submit a contact message.
///
/// **Route**: `POST /api/contact`
///
/// # Returns
///
/// Success (202): `Json<ContactResponse>` with the reference id
///
/// Error (400): Body is not a JSON contact request
/// Error (422): One or more fields are invalid; `fields` lists them with their
/// translation keys
#[instrument(skip_all)]
pub async fn submit_contact(
    State(config): State<Arc<Config>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
    let request = request.normalized();

    validate_contact(&request, config.max_message_len)?;

    let reference = Uuid::new_v4().to_string();
    info!(
        reference = %reference,
        department = request.department().map(|d| d.as_str()).unwrap_or("none"),
        message_chars = request.message.chars().count(),
        "[CONTACT] Message accepted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactResponse {
            reference,
            message: "Message received".to_string(),
        }),
    ))
}
