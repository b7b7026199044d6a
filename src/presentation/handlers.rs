// HTTP request handlers
use crate::application::view_controller::LoadState;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::json_mapper::dataset_to_dto;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use crate::presentation::scatter_svg::render_scatter;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct StatusDto {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&LoadState> for StatusDto {
    fn from(state: &LoadState) -> Self {
        let mut dto = StatusDto {
            state: state.name(),
            series: None,
            points: None,
            loaded_at: None,
            error: None,
        };
        match state {
            LoadState::Loaded { dataset, loaded_at } => {
                dto.series = Some(dataset.series.len());
                dto.points = Some(dataset.point_count());
                dto.loaded_at = Some(loaded_at.to_rfc3339());
            }
            LoadState::Failed(failure) => dto.error = Some(failure.to_string()),
            LoadState::Uninitialized | LoadState::Loading => {}
        }
        dto
    }
}

/// 503 while the dataset is on its way, 502 once the load has failed
fn not_ready(state: &LoadState) -> Response {
    let status = match state {
        LoadState::Failed(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(StatusDto::from(state))).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The chart page in whatever state the view is in
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = state.controller.state().await;
    Html(render_page(&view, &state.page, &state.chart_options))
}

/// Standalone SVG chart
pub async fn chart_svg(State(state): State<Arc<AppState>>) -> Response {
    let view = state.controller.state().await;
    match view.dataset() {
        Some(dataset) => (
            [(header::CONTENT_TYPE, "image/svg+xml")],
            render_scatter(dataset, &state.chart_options),
        )
            .into_response(),
        None => not_ready(&view),
    }
}

/// Dataset in the Chart.js `{ datasets: [...] }` shape
pub async fn dataset_json(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let view = state.controller.state().await;
    let Some(dataset) = view.dataset() else {
        return not_ready(&view);
    };

    match json_response(&dataset_to_dto(dataset), accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusDto> {
    let view = state.controller.state().await;
    Json(StatusDto::from(&view))
}
