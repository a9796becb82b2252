//! State of the statistics view.

use api::{ApiError, ModerationApi, StatsBundle, fetch_stats_bundle};
use moderation_core::{ActivityData, ChartSlice, Period, StatsSummary, category_slices};

/// Statistics of one period, reshaped for the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub period: Period,
    pub summary: StatsSummary,
    pub activity: Vec<ActivityData>,
    pub decisions: Vec<ChartSlice>,
    pub categories: Vec<ChartSlice>,
}

impl From<StatsBundle> for StatsView {
    fn from(bundle: StatsBundle) -> Self {
        Self {
            period: bundle.period,
            decisions: bundle.decisions.slices(),
            categories: category_slices(&bundle.categories),
            summary: bundle.summary,
            activity: bundle.activity,
        }
    }
}

/// Fetch the four datasets of `period` in parallel and reshape them.
pub async fn load_stats<A: ModerationApi>(api: &A, period: Period) -> Result<StatsView, ApiError> {
    tracing::debug!(%period, "loading statistics");
    let bundle = fetch_stats_bundle(api, period).await?;
    Ok(StatsView::from(bundle))
}
