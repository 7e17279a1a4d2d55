//! Selection Routes
//!
//! JSON endpoints behind the dashboard selectors and charts.
//!
//! - GET /api/v1/sites - Dropdown options and payload bounds
//! - GET /api/v1/outcomes?site= - Outcome breakdown for the pie chart
//! - GET /api/v1/payload?site=&low=&high= - Points for the scatter chart

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    OutcomeBreakdownResponse, PayloadCorrelationResponse, PayloadParams, SiteOption, SiteParams,
    SitesResponse,
};
use crate::api::state::AppState;
use crate::filter::{outcome_breakdown, payload_correlation, ALL_SITES};

/// GET /api/v1/sites
///
/// List the site dropdown options, `All Sites` first.
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    let mut options = vec![SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(state.dataset.sites().into_iter().map(|site| SiteOption {
        label: site.to_string(),
        value: site.to_string(),
    }));

    let bounds = state.dataset.payload_bounds();

    Json(SitesResponse {
        options,
        payload_min: bounds.map(|(min, _)| min),
        payload_max: bounds.map(|(_, max)| max),
        record_count: state.dataset.len(),
    })
}

/// GET /api/v1/outcomes
///
/// Rows and slice counts for the selected site.
pub async fn get_outcomes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SiteParams>,
) -> Response {
    let result = outcome_breakdown(&state.dataset, &params.site);

    let response = OutcomeBreakdownResponse {
        site: params.site.to_string(),
        total: result.len(),
        slices: result.outcome_slices(),
        title: result.title,
        rows: result.rows,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/v1/payload
///
/// Scatter points for the selected site and payload range.
pub async fn get_payload(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PayloadParams>,
) -> Response {
    let range = params.payload_range(state.default_payload_range());
    let result = payload_correlation(&state.dataset, &params.site, range);

    let response = PayloadCorrelationResponse {
        site: params.site.to_string(),
        range,
        total: result.len(),
        categories: result.booster_categories(),
        points: result.scatter_points(),
        title: result.title,
    };

    (StatusCode::OK, Json(response)).into_response()
}
