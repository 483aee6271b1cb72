use axum::{
    extract::State,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use chrono::SecondsFormat;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod car_rental;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod flight;
pub mod hotel;
pub mod metrics;
pub mod params;
pub mod planner;
pub mod state;
pub mod supervisor;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .route("/v1/agents/{agent}/invoke", post(dispatch::invoke))
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn render_metrics(State(state): State<AppState>) -> Result<String, AppError> {
    Ok(state.metrics.render()?)
}

/// Current time as UTC RFC 3339, whole seconds.
pub fn timestamp(state: &AppState) -> String {
    state.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Decodes a stored JSON array column. Missing or malformed text yields
/// an empty list.
pub fn json_list(raw: Option<&str>) -> Vec<Value> {
    raw.and_then(|s| serde_json::from_str::<Vec<Value>>(s).ok())
        .unwrap_or_default()
}
