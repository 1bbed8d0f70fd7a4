#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use signboard_model::{BoardClock, SystemClock};
use signboard_store::SlotStore;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;
use tokio::sync::Mutex;

mod config;
mod http;

pub use config::{validate_startup_config, ApiConfig, CONFIG_SCHEMA_VERSION};
pub use http::errors::{ApiError, ApiErrorCode};
pub use http::request_id::RequestId;

pub const CRATE_NAME: &str = "signboard-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SlotStore + Send + Sync>,
    pub clock: Arc<dyn BoardClock>,
    pub api: ApiConfig,
    /// Slot appends serialize through this; the store itself takes no locks.
    pub write_lock: Arc<Mutex<()>>,
    pub request_id_seed: Arc<AtomicU64>,
    pub ready: Arc<AtomicBool>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SlotStore + Send + Sync>) -> Self {
        Self::with_config(store, Arc::new(SystemClock), ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(
        store: Arc<dyn SlotStore + Send + Sync>,
        clock: Arc<dyn BoardClock>,
        api: ApiConfig,
    ) -> Self {
        Self {
            store,
            clock,
            api,
            write_lock: Arc::new(Mutex::new(())),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::endpoints::board_page_handler))
        .route("/healthz", get(http::endpoints::healthz_handler))
        .route("/readyz", get(http::endpoints::readyz_handler))
        .route("/v1/version", get(http::endpoints::version_handler))
        .route("/v1/clipboards", get(http::endpoints::clipboards_handler))
        .route("/v1/window", get(http::endpoints::window_handler))
        .route(
            "/v1/slots/:clipboard/:date",
            get(http::endpoints::slot_handler),
        )
        .route(
            "/v1/slots/:clipboard/:date/signups",
            post(http::endpoints::signup_handler),
        )
        .layer(from_fn_with_state(
            state.clone(),
            http::request_id::request_id_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
