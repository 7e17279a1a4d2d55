//! Data Transfer Objects
//!
//! Query parameters and JSON response bodies for the API endpoints.
//! Response types borrow from the shared dataset and are serialized before
//! the handler returns.

use serde::{Deserialize, Serialize};

use crate::dataset::LaunchRecord;
use crate::filter::{OutcomeSlice, PayloadRange, ScatterPoint, SiteFilter};

// ============================================
// QUERY PARAMETERS
// ============================================

/// `?site=` parameter; absent means `ALL`
#[derive(Debug, Default, Deserialize)]
pub struct SiteParams {
    #[serde(default)]
    pub site: SiteFilter,
}

/// `?site=&low=&high=` parameters
///
/// Missing bounds fall back to the dataset's payload bounds.
#[derive(Debug, Default, Deserialize)]
pub struct PayloadParams {
    #[serde(default)]
    pub site: SiteFilter,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
}

impl PayloadParams {
    pub fn payload_range(&self, default: PayloadRange) -> PayloadRange {
        PayloadRange::new(
            self.low.unwrap_or(default.low),
            self.high.unwrap_or(default.high),
        )
    }
}

// ============================================
// SITE DTOs
// ============================================

/// One dropdown entry
#[derive(Debug, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Dropdown options and payload selector bounds
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// `All Sites` first, then each site in dataset order
    pub options: Vec<SiteOption>,
    /// Smallest payload in the dataset (absent when empty)
    pub payload_min: Option<f64>,
    /// Largest payload in the dataset (absent when empty)
    pub payload_max: Option<f64>,
    /// Number of launch records
    pub record_count: usize,
}

// ============================================
// CHART DATA DTOs
// ============================================

/// Data behind the outcome pie chart
#[derive(Debug, Serialize)]
pub struct OutcomeBreakdownResponse<'a> {
    pub site: String,
    pub title: String,
    pub total: usize,
    pub slices: Vec<OutcomeSlice>,
    pub rows: Vec<&'a LaunchRecord>,
}

/// Data behind the payload scatter chart
#[derive(Debug, Serialize)]
pub struct PayloadCorrelationResponse<'a> {
    pub site: String,
    pub title: String,
    pub range: PayloadRange,
    pub total: usize,
    /// Booster categories in legend/color order
    pub categories: Vec<&'a str>,
    pub points: Vec<ScatterPoint<'a>>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Dataset status: ok or empty
    pub dataset: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
