use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{chart_svg, dataset_json, health_check, index, status};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chart.svg", get(chart_svg))
        .route("/api/dataset", get(dataset_json))
        .route("/api/status", get(status))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
