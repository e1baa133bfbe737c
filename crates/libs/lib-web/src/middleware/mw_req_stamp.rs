//! # Request Stamping Middleware
//!
//! Gives every request an ID, stores it in the request extensions and echoes
//! it in the `X-Request-ID` response header so a visitor's report can be
//! matched with the server log.
//!
//! A reverse proxy that already assigned a UUID keeps it; anything else is
//! replaced with a fresh v4 UUID.
//!
//! The stamp is available in handlers via `Extension<RequestStamp>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_web::middleware::mw_req_stamp::RequestStamp;
//!
//! async fn handler(Extension(stamp): Extension<RequestStamp>) -> String {
//!     format!("Request ID: {}", stamp.id)
//! }
//! ```

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::SystemTime;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
    /// Request timestamp
    pub timestamp: SystemTime,
}

impl RequestStamp {
    fn new(id: String) -> Self {
        Self {
            id,
            timestamp: SystemTime::now(),
        }
    }

    /// Reuse an upstream UUID from `X-Request-ID`, otherwise generate one.
    fn from_headers(headers: &HeaderMap) -> Self {
        let upstream = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok());

        Self::new(upstream.unwrap_or_else(Uuid::new_v4).to_string())
    }
}

/// Request stamping middleware.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::from_headers(req.headers());
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_uuid_without_header() {
        let stamp = RequestStamp::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(&stamp.id).is_ok());
    }

    #[test]
    fn test_keeps_upstream_uuid() {
        // Arrange
        let upstream = "6f1c2a4e-8d3b-4c7a-9e51-0b2d4f6a8c10";
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(upstream));

        // Act
        let stamp = RequestStamp::from_headers(&headers);

        // Assert
        assert_eq!(stamp.id, upstream);
    }

    #[test]
    fn test_replaces_malformed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("<script>"));

        let stamp = RequestStamp::from_headers(&headers);

        assert_ne!(stamp.id, "<script>");
        assert!(Uuid::parse_str(&stamp.id).is_ok());
    }
}
