use crate::AppState;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::atomic::Ordering;

/// Per-request correlation id, available to handlers as an extension and
/// echoed on every response as `x-request-id`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

pub(crate) async fn request_id_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let id = format!(
        "req-{:08x}",
        state.request_id_seed.fetch_add(1, Ordering::Relaxed)
    );
    req.extensions_mut().insert(RequestId(id.clone()));
    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
