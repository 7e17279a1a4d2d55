//! Core data types for the launch records dataset
//!
//! - `LaunchRecord`: one row of the dataset
//! - `Outcome`: binary success/failure class
//! - `Dataset`: the ordered, read-only collection of records

use serde::{Serialize, Serializer};

/// Binary launch outcome class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Class 0
    Failure,
    /// Class 1
    Success,
}

impl Outcome {
    /// Parse a raw class value; only 0 and 1 are valid
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric class value as it appears in the dataset
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class())
    }
}

// Charts and JSON consumers expect the raw class integer, not a variant name
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.class())
    }
}

/// A single launch record
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// Launch site identifier (e.g. "CCAFS LC-40")
    pub launch_site: String,
    /// Payload mass in kilograms, finite and non-negative
    pub payload_mass_kg: f64,
    /// Booster version category label (e.g. "FT", "B5")
    pub booster_version_category: String,
    /// Launch outcome class
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }
}

/// Ordered, read-only sequence of launch records
///
/// Built once at startup and shared by reference for the lifetime of the
/// process. Every record satisfies the payload invariant checked by the loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Wrap already-validated records
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// All records in original order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in order of first appearance
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(&record.launch_site);
            }
        }
        sites
    }

    /// Minimum and maximum payload mass, `None` when the dataset is empty
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }
}

impl FromIterator<LaunchRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = LaunchRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("KSC", 3000.0, "FT", Outcome::Success),
            LaunchRecord::new("CCAFS", 9000.0, "B4", Outcome::Failure),
        ])
    }

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }

    #[test]
    fn test_outcome_serializes_as_class() {
        let json = serde_json::to_string(&Outcome::Success).unwrap();
        assert_eq!(json, "1");
        let json = serde_json::to_string(&Outcome::Failure).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_sites_first_appearance_order() {
        assert_eq!(sample().sites(), vec!["CCAFS", "KSC"]);
    }

    #[test]
    fn test_payload_bounds() {
        assert_eq!(sample().payload_bounds(), Some((500.0, 9000.0)));
        assert_eq!(Dataset::default().payload_bounds(), None);
    }
}
