//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks; the dataset is
//! never mutated after load, so no locking is needed.

use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::filter::PayloadRange;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch records, loaded once at startup
    pub dataset: Arc<Dataset>,
    /// Page layout settings
    pub dashboard: Arc<DashboardConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, dashboard: DashboardConfig) -> Self {
        Self {
            dataset,
            dashboard: Arc::new(dashboard),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Payload range selected when the page first loads
    ///
    /// The dataset's own payload bounds; for an empty dataset, the selector
    /// bounds.
    pub fn default_payload_range(&self) -> PayloadRange {
        match self.dataset.payload_bounds() {
            Some((min, max)) => PayloadRange::new(min, max),
            None => PayloadRange::new(self.dashboard.slider_min, self.dashboard.slider_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    #[test]
    fn test_default_payload_range() {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("CCAFS", 2500.0, "FT", Outcome::Success),
            LaunchRecord::new("KSC", 475.0, "v1.1", Outcome::Failure),
        ]);
        let state = AppState::new(Arc::new(dataset), DashboardConfig::default());
        assert_eq!(state.default_payload_range(), PayloadRange::new(475.0, 2500.0));

        let state = AppState::new(Arc::new(Dataset::default()), DashboardConfig::default());
        assert_eq!(state.default_payload_range(), PayloadRange::new(0.0, 10_000.0));
    }
}
