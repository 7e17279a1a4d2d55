//! Chart Routes
//!
//! Rendered SVG for the two charts, fetched by the page on every selector
//! change.
//!
//! - GET /api/v1/charts/outcomes?site= - Outcome pie chart
//! - GET /api/v1/charts/payload?site=&low=&high= - Payload scatter chart

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::dto::{PayloadParams, SiteParams};
use crate::api::state::AppState;
use crate::charts::{outcome_chart, payload_chart};
use crate::filter::{outcome_breakdown, payload_correlation};

/// GET /api/v1/charts/outcomes
pub async fn outcome_svg(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SiteParams>,
) -> Response {
    let result = outcome_breakdown(&state.dataset, &params.site);
    svg_response(outcome_chart(&result))
}

/// GET /api/v1/charts/payload
pub async fn payload_svg(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PayloadParams>,
) -> Response {
    let range = params.payload_range(state.default_payload_range());
    let result = payload_correlation(&state.dataset, &params.site, range);
    svg_response(payload_chart(&result))
}

fn svg_response(svg: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        svg,
    )
        .into_response()
}
