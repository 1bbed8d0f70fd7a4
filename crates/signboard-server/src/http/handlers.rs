use crate::http::errors::{ApiError, ApiErrorCode};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use signboard_store::{StoreError, StoreErrorCode};
use std::fmt::Write;

pub(crate) fn error_json(
    code: ApiErrorCode,
    message: &str,
    details: Value,
    request_id: &str,
) -> ApiError {
    ApiError::new(code, message, details, request_id)
}

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    let body = Json(json!({"error": err}));
    (status, body).into_response()
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        let _ = write!(out, "{b:02x}");
    }
    out
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

/// Listings are mutable; clients revalidate with the ETag.
pub(crate) fn put_listing_headers(headers: &mut HeaderMap, etag: &str) {
    headers.insert("cache-control", HeaderValue::from_static("no-cache"));
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

pub(crate) fn store_error_response(err: &StoreError, request_id: &str) -> Response {
    let (status, code) = match err.code {
        StoreErrorCode::Io | StoreErrorCode::NotFound => {
            (StatusCode::SERVICE_UNAVAILABLE, ApiErrorCode::StoreUnavailable)
        }
        StoreErrorCode::Validation | StoreErrorCode::Internal => {
            (StatusCode::INTERNAL_SERVER_ERROR, ApiErrorCode::Internal)
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ApiErrorCode::Internal),
    };
    api_error_response(
        status,
        error_json(
            code,
            "slot store operation failed",
            json!({"store_code": err.code.as_str(), "message": err.message}),
            request_id,
        ),
    )
}
