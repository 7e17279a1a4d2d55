//! Selection types
//!
//! The user's current site choice and payload interval. Neither is validated
//! against the dataset: an unknown site or an inverted interval simply selects
//! nothing.

use serde::{Deserialize, Serialize};

/// Sentinel site value meaning "no site filter"
pub const ALL_SITES: &str = "ALL";

/// Site selector value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteFilter {
    /// Every launch site
    #[default]
    All,
    /// Exactly one launch site
    Site(String),
}

impl SiteFilter {
    /// Parse a selector value; only the exact string `ALL` is the sentinel
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    /// Whether a record's launch site passes this filter
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => site == launch_site,
        }
    }

    /// Human-readable name used in chart titles
    pub fn label(&self) -> &str {
        match self {
            SiteFilter::All => "All Sites",
            SiteFilter::Site(site) => site,
        }
    }

    /// Raw selector value (`ALL` or the site identifier)
    pub fn as_str(&self) -> &str {
        match self {
            SiteFilter::All => ALL_SITES,
            SiteFilter::Site(site) => site,
        }
    }
}

impl From<&str> for SiteFilter {
    fn from(value: &str) -> Self {
        SiteFilter::parse(value)
    }
}

impl From<String> for SiteFilter {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value)
        }
    }
}

impl From<SiteFilter> for String {
    fn from(filter: SiteFilter) -> Self {
        match filter {
            SiteFilter::All => ALL_SITES.to_string(),
            SiteFilter::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload mass interval `[low, high]` in kilograms
///
/// Not clamped to the dataset bounds and `low <= high` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends; NaN bounds contain nothing
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

/// The site choice and payload interval currently selected on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

impl Selection {
    pub fn new(site: impl Into<SiteFilter>, payload_range: PayloadRange) -> Self {
        Self {
            site: site.into(),
            payload_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_filter_parse() {
        assert_eq!(SiteFilter::parse("ALL"), SiteFilter::All);
        assert_eq!(
            SiteFilter::parse("KSC LC-39A"),
            SiteFilter::Site("KSC LC-39A".to_string())
        );
        // Sentinel is case-sensitive
        assert_eq!(SiteFilter::parse("all"), SiteFilter::Site("all".to_string()));
    }

    #[test]
    fn test_site_filter_matches() {
        assert!(SiteFilter::All.matches("anything"));
        let ksc = SiteFilter::parse("KSC LC-39A");
        assert!(ksc.matches("KSC LC-39A"));
        assert!(!ksc.matches("CCAFS LC-40"));
    }

    #[test]
    fn test_site_filter_serde() {
        let filter: SiteFilter = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(filter, SiteFilter::All);

        let json = serde_json::to_string(&SiteFilter::parse("VAFB SLC-4E")).unwrap();
        assert_eq!(json, "\"VAFB SLC-4E\"");
    }

    #[test]
    fn test_payload_range_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(range.is_inverted());
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
    }

    #[test]
    fn test_nan_range_contains_nothing() {
        let range = PayloadRange::new(f64::NAN, 1000.0);
        assert!(!range.contains(500.0));
    }
}
