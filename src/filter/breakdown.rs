//! Filter operations
//!
//! Both operations are pure functions of the dataset and the selection: they
//! scan every record, keep file order and never mutate or cache anything.

use super::{PayloadRange, Selection, SiteFilter};
use crate::dataset::{Dataset, LaunchRecord, Outcome};
use serde::Serialize;

const OUTCOME_TITLE_PREFIX: &str = "Total Success Launches for";
const PAYLOAD_TITLE_PREFIX: &str = "Payload vs. Success Scatter Plot for";

/// Rows selected for one chart plus the chart caption
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<'a> {
    /// Matching records, in dataset order
    pub rows: Vec<&'a LaunchRecord>,
    /// Chart caption describing the active filter
    pub title: String,
}

/// One pie slice: how many rows carry a given outcome class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeSlice {
    #[serde(rename = "class")]
    pub outcome: Outcome,
    pub count: usize,
    /// Fraction of all rows, in `(0, 1]`
    pub share: f64,
}

/// One scatter point: payload against outcome, colored by booster category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint<'a> {
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    pub booster_version_category: &'a str,
}

impl<'a> FilterResult<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Group rows by outcome class
    ///
    /// One slice per class present, in order of first appearance. A result
    /// with a single class yields a single slice; an empty result yields none.
    pub fn outcome_slices(&self) -> Vec<OutcomeSlice> {
        let mut counts: Vec<(Outcome, usize)> = Vec::with_capacity(2);
        for row in &self.rows {
            match counts.iter_mut().find(|(outcome, _)| *outcome == row.outcome) {
                Some((_, count)) => *count += 1,
                None => counts.push((row.outcome, 1)),
            }
        }

        let total = self.rows.len() as f64;
        counts
            .into_iter()
            .map(|(outcome, count)| OutcomeSlice {
                outcome,
                count,
                share: count as f64 / total,
            })
            .collect()
    }

    /// Rows projected to `(payload, outcome, booster category)` points
    pub fn scatter_points(&self) -> Vec<ScatterPoint<'a>> {
        self.rows
            .iter()
            .map(|row| ScatterPoint {
                payload_mass_kg: row.payload_mass_kg,
                outcome: row.outcome,
                booster_version_category: &row.booster_version_category,
            })
            .collect()
    }

    /// Distinct booster categories in order of first appearance
    ///
    /// Color assignment follows this order, so a category keeps its color as
    /// long as the rows ahead of it do not change.
    pub fn booster_categories(&self) -> Vec<&'a str> {
        let mut categories: Vec<&'a str> = Vec::new();
        for row in &self.rows {
            let category = row.booster_version_category.as_str();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}

/// Records for the outcome proportion chart
///
/// `ALL` keeps every record; any other value keeps the records launched from
/// that site. A site absent from the dataset yields an empty result.
pub fn outcome_breakdown<'a>(dataset: &'a Dataset, site: &SiteFilter) -> FilterResult<'a> {
    let rows: Vec<&LaunchRecord> = dataset
        .records()
        .iter()
        .filter(|r| site.matches(&r.launch_site))
        .collect();

    tracing::debug!(site = %site, rows = rows.len(), "Computed outcome breakdown");

    FilterResult {
        rows,
        title: format!("{} {}", OUTCOME_TITLE_PREFIX, site.label()),
    }
}

/// Records for the payload vs. outcome scatter chart
///
/// Keeps records whose payload lies in the closed interval and, unless the
/// site is `ALL`, that were launched from the site. An inverted interval
/// yields an empty result.
pub fn payload_correlation<'a>(
    dataset: &'a Dataset,
    site: &SiteFilter,
    payload_range: PayloadRange,
) -> FilterResult<'a> {
    let rows: Vec<&LaunchRecord> = dataset
        .records()
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg) && site.matches(&r.launch_site))
        .collect();

    tracing::debug!(
        site = %site,
        low = payload_range.low,
        high = payload_range.high,
        inverted = payload_range.is_inverted(),
        rows = rows.len(),
        "Computed payload correlation"
    );

    FilterResult {
        rows,
        title: format!("{} {}", PAYLOAD_TITLE_PREFIX, site.label()),
    }
}

impl Selection {
    /// Pie chart input for this selection (the payload range does not apply)
    pub fn outcome_breakdown<'a>(&self, dataset: &'a Dataset) -> FilterResult<'a> {
        outcome_breakdown(dataset, &self.site)
    }

    /// Scatter chart input for this selection
    pub fn payload_correlation<'a>(&self, dataset: &'a Dataset) -> FilterResult<'a> {
        payload_correlation(dataset, &self.site, self.payload_range)
    }
}
