//! Contact form transport.

use crate::utils::constants::CONTACT_ENDPOINT;
use gloo_net::http::Request;
use shared::{ContactRequest, ContactResponse, ErrorResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never got an answer.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with an error body.
    #[error("rejected ({status}): {}", .body.error)]
    Rejected { status: u16, body: ErrorResponse },

    #[error("unexpected response: {0}")]
    Decode(String),
}

pub async fn submit_contact(request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
    let response = Request::post(CONTACT_ENDPOINT)
        .json(request)
        .map_err(|e| SubmitError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| SubmitError::Decode(format!("{status}: {e}")))?;
        return Err(SubmitError::Rejected { status, body });
    }

    response
        .json::<ContactResponse>()
        .await
        .map_err(|e| SubmitError::Decode(e.to_string()))
}
