//! Aggregate statistics returned by the API and their chart reshaping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregation window for statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    #[default]
    Week,
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    /// Parse a selector value; unknown values yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "today" => Some(Period::Today),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            _ => None,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary cards of the statistics page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_reviewed: u64,
    pub total_reviewed_today: u64,
    pub total_reviewed_this_week: u64,
    pub total_reviewed_this_month: u64,
    pub approved_percentage: f64,
    pub rejected_percentage: f64,
    pub request_changes_percentage: f64,
    /// Seconds.
    pub average_review_time: f64,
}

/// Decision counts for one day of the activity chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityData {
    pub date: String,
    pub approved: u64,
    pub rejected: u64,
    pub request_changes: u64,
}

impl ActivityData {
    pub fn total(&self) -> u64 {
        self.approved + self.rejected + self.request_changes
    }
}

/// Share of each decision type over the period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecisionsData {
    pub approved: f64,
    pub rejected: f64,
    pub request_changes: f64,
}

/// A named value ready for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

impl ChartSlice {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl DecisionsData {
    /// Slices in fixed order: approved, rejected, sent back for changes.
    pub fn slices(&self) -> Vec<ChartSlice> {
        vec![
            ChartSlice::new("Одобрено", self.approved),
            ChartSlice::new("Отклонено", self.rejected),
            ChartSlice::new("На доработку", self.request_changes),
        ]
    }
}

/// One slice per category, in the map's key order.
pub fn category_slices(categories: &BTreeMap<String, u64>) -> Vec<ChartSlice> {
    categories
        .iter()
        .map(|(name, count)| ChartSlice::new(name.clone(), *count as f64))
        .collect()
}

/// Largest value among `values`, used to scale bar widths. Never below 1.
pub fn scale_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(1.0_f64, f64::max)
}
