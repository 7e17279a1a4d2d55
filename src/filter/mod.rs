//! Selection Filter & Aggregator
//!
//! Derives, from the dataset and the current selection, the rows and caption
//! for each of the two dashboard charts.
//!
//! # Example
//!
//! ```rust
//! use launch_dashboard::dataset::{Dataset, LaunchRecord, Outcome};
//! use launch_dashboard::filter::{outcome_breakdown, payload_correlation, PayloadRange, SiteFilter};
//!
//! let dataset = Dataset::new(vec![
//!     LaunchRecord::new("CCAFS", 500.0, "v1.0", Outcome::Success),
//!     LaunchRecord::new("CCAFS", 9000.0, "B4", Outcome::Failure),
//!     LaunchRecord::new("KSC", 3000.0, "FT", Outcome::Success),
//! ]);
//!
//! let pie = outcome_breakdown(&dataset, &SiteFilter::All);
//! assert_eq!(pie.title, "Total Success Launches for All Sites");
//! assert_eq!(pie.rows.len(), 3);
//!
//! let scatter = payload_correlation(
//!     &dataset,
//!     &SiteFilter::parse("CCAFS"),
//!     PayloadRange::new(0.0, 1000.0),
//! );
//! assert_eq!(scatter.title, "Payload vs. Success Scatter Plot for CCAFS");
//! assert_eq!(scatter.rows.len(), 1);
//! ```

mod breakdown;
mod selection;

pub use breakdown::{
    outcome_breakdown, payload_correlation, FilterResult, OutcomeSlice, ScatterPoint,
};
pub use selection::{PayloadRange, Selection, SiteFilter, ALL_SITES};
