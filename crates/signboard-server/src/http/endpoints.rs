use crate::http::board_page::BOARD_PAGE_HTML;
use crate::http::errors::ApiErrorCode;
use crate::http::handlers::{
    api_error_response, error_json, if_none_match, put_listing_headers, sha256_hex,
    store_error_response,
};
use crate::http::request_id::RequestId;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path as AxumPath, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use signboard_model::{
    signup_window, window_contains, Clipboard, SignupDraft, SignupRecord, Slot, SlotDate,
    SIGNUP_WINDOW_DAYS,
};
use signboard_store::StoreError;
use std::sync::atomic::Ordering;
use tokio::time::timeout;
use tracing::{error, info};

pub(crate) async fn board_page_handler() -> Html<&'static str> {
    Html(BOARD_PAGE_HTML)
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> Response {
    if state.ready.load(Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({"status": "ready"}))).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "not_ready"})),
        )
            .into_response()
    }
}

pub(crate) async fn version_handler() -> impl IntoResponse {
    Json(json!({
        "name": "signboard-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn clipboards_handler() -> impl IntoResponse {
    let clipboards: Vec<Value> = Clipboard::ALL
        .into_iter()
        .map(|c| json!({"token": c.as_str(), "label": c.label()}))
        .collect();
    Json(json!({"clipboards": clipboards}))
}

pub(crate) async fn window_handler(State(state): State<AppState>) -> impl IntoResponse {
    let today = state.clock.today();
    let dates: Vec<Value> = signup_window(today)
        .into_iter()
        .map(|d| json!({"date": d.iso_string(), "label": d.label()}))
        .collect();
    Json(json!({
        "today": today.format("%Y-%m-%d").to_string(),
        "dates": dates,
    }))
}

pub(crate) async fn slot_handler(
    State(state): State<AppState>,
    AxumPath((clipboard, date)): AxumPath<(String, String)>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
) -> Response {
    let slot = match parse_slot(&clipboard, &date, &request_id.0) {
        Ok(slot) => slot,
        Err(response) => return response,
    };

    let store = state.store.clone();
    let records = match run_store(&state, &request_id.0, move || store.load(&slot)).await {
        Ok(records) => records,
        Err(response) => return response,
    };

    let payload = listing_payload(&slot, &records);
    let bytes = match serde_json::to_vec(&payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("listing serialization failed: {e}");
            return api_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_json(
                    ApiErrorCode::Internal,
                    "listing serialization failed",
                    json!({}),
                    &request_id.0,
                ),
            );
        }
    };
    let etag = format!("\"{}\"", sha256_hex(&bytes));
    if if_none_match(&headers).as_deref() == Some(etag.as_str()) {
        let mut response = StatusCode::NOT_MODIFIED.into_response();
        put_listing_headers(response.headers_mut(), &etag);
        return response;
    }

    let mut response = (StatusCode::OK, Json(payload)).into_response();
    put_listing_headers(response.headers_mut(), &etag);
    response
}

pub(crate) async fn signup_handler(
    State(state): State<AppState>,
    AxumPath((clipboard, date)): AxumPath<(String, String)>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<SignupDraft>, JsonRejection>,
) -> Response {
    let slot = match parse_slot(&clipboard, &date, &request_id.0) {
        Ok(slot) => slot,
        Err(response) => return response,
    };

    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiErrorCode::PayloadTooLarge
            } else {
                ApiErrorCode::ValidationFailed
            };
            return api_error_response(
                rejection.status(),
                error_json(
                    code,
                    "invalid signup body",
                    json!({"message": rejection.body_text()}),
                    &request_id.0,
                ),
            );
        }
    };

    let today = state.clock.today();
    if !window_contains(today, slot.date) {
        return api_error_response(
            StatusCode::BAD_REQUEST,
            error_json(
                ApiErrorCode::DateOutOfWindow,
                "date outside signup window",
                json!({
                    "date": slot.date.iso_string(),
                    "window_days": SIGNUP_WINDOW_DAYS,
                }),
                &request_id.0,
            ),
        );
    }

    let record = match draft.into_record(state.clock.now()) {
        Ok(record) => record,
        Err(e) => {
            return api_error_response(
                StatusCode::BAD_REQUEST,
                error_json(
                    ApiErrorCode::ValidationFailed,
                    "validation failed",
                    json!({"message": e.to_string()}),
                    &request_id.0,
                ),
            );
        }
    };

    let _guard = state.write_lock.lock().await;

    let store = state.store.clone();
    let count = match run_store(&state, &request_id.0, move || store.append(&slot, record)).await
    {
        Ok(count) => count,
        Err(response) => return response,
    };
    info!(slot = %slot, count, "signup appended");

    let store = state.store.clone();
    let records = match run_store(&state, &request_id.0, move || store.load(&slot)).await {
        Ok(records) => records,
        Err(response) => return response,
    };

    (StatusCode::CREATED, Json(listing_payload(&slot, &records))).into_response()
}

fn parse_slot(clipboard: &str, date: &str, request_id: &str) -> Result<Slot, Response> {
    let clipboard_token = Clipboard::parse(clipboard).map_err(|e| {
        api_error_response(
            StatusCode::BAD_REQUEST,
            error_json(
                ApiErrorCode::InvalidPathParameter,
                "invalid path parameter: clipboard",
                json!({"parameter": "clipboard", "value": clipboard, "reason": e.to_string()}),
                request_id,
            ),
        )
    })?;
    let slot_date = SlotDate::parse(date).map_err(|e| {
        api_error_response(
            StatusCode::BAD_REQUEST,
            error_json(
                ApiErrorCode::InvalidPathParameter,
                "invalid path parameter: date",
                json!({"parameter": "date", "value": date, "reason": e.to_string()}),
                request_id,
            ),
        )
    })?;
    Ok(Slot::new(clipboard_token, slot_date))
}

fn listing_payload(slot: &Slot, records: &[SignupRecord]) -> Value {
    json!({
        "slot": slot.canonical_string(),
        "clipboard": {"token": slot.clipboard.as_str(), "label": slot.clipboard.label()},
        "date": {"date": slot.date.iso_string(), "label": slot.date.label()},
        "count": records.len(),
        "signups": records,
    })
}

/// Store calls are synchronous filesystem work; run them off the reactor
/// and bound them by the configured timeout.
async fn run_store<T, F>(state: &AppState, request_id: &str, op: F) -> Result<T, Response>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    match timeout(state.api.store_timeout, tokio::task::spawn_blocking(op)).await {
        Err(_) => Err(api_error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            error_json(
                ApiErrorCode::StoreUnavailable,
                "store operation timed out",
                json!({"timeout_ms": state.api.store_timeout.as_millis() as u64}),
                request_id,
            ),
        )),
        Ok(Err(join_err)) => {
            error!("store task failed: {join_err}");
            Err(api_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_json(
                    ApiErrorCode::Internal,
                    "store task failed",
                    json!({}),
                    request_id,
                ),
            ))
        }
        Ok(Ok(Err(store_err))) => {
            error!("store error: {store_err}");
            Err(store_error_response(&store_err, request_id))
        }
        Ok(Ok(Ok(value))) => Ok(value),
    }
}
