//! # Launch Dashboard
//!
//! Interactive dashboard over a static table of rocket launch records: pick a
//! launch site and a payload mass range, see the share of successful launches
//! and how outcome relates to payload.
//!
//! ## Modules
//!
//! - [`dataset`]: Launch records and the CSV loader
//! - [`filter`]: Selection filter and aggregator behind both charts
//! - [`charts`]: SVG rendering of the pie and scatter charts
//! - [`api`]: HTTP server with Axum (page, JSON, SVG, health)
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dashboard::dataset::Dataset;
//! use launch_dashboard::filter::{outcome_breakdown, payload_correlation, PayloadRange, SiteFilter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("spacex_launch_dash.csv")?;
//!
//!     let pie = outcome_breakdown(&dataset, &SiteFilter::All);
//!     for slice in pie.outcome_slices() {
//!         println!("class {}: {} launches", slice.outcome, slice.count);
//!     }
//!
//!     let site = SiteFilter::parse("KSC LC-39A");
//!     let scatter = payload_correlation(&dataset, &site, PayloadRange::new(2000.0, 8000.0));
//!     println!("{}: {} launches", scatter.title, scatter.rows.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod filter;

// Re-export top-level types for convenience
pub use dataset::{Dataset, DatasetError, DatasetResult, LaunchRecord, Outcome};

pub use filter::{
    outcome_breakdown, payload_correlation, FilterResult, OutcomeSlice, PayloadRange,
    ScatterPoint, Selection, SiteFilter,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig};
