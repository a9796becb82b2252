//! The operations the dashboard needs from the backend.

use std::collections::BTreeMap;

use moderation_core::{
    ActivityData, AdFilters, AdId, AdStatus, AdsPage, Advertisement, Decision, DecisionsData,
    Period, ReasonPayload, StatsSummary,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ApiError;

/// Answer to a moderation mutation.
///
/// The backend's exact shape varies; only the fields below are read and
/// the rest is ignored. An empty body is a valid receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationReceipt {
    pub message: Option<String>,
    pub status: Option<AdStatus>,
    /// Updated ad, when the backend echoes it in a readable shape.
    #[serde(deserialize_with = "echoed_ad")]
    pub ad: Option<Box<Advertisement>>,
}

/// An echoed ad that fails to decode is dropped; the mutation still succeeded.
fn echoed_ad<'de, D>(deserializer: D) -> Result<Option<Box<Advertisement>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// The four statistics datasets of one period, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsBundle {
    pub period: Period,
    pub summary: StatsSummary,
    pub activity: Vec<ActivityData>,
    pub decisions: DecisionsData,
    pub categories: BTreeMap<String, u64>,
}

/// Remote moderation operations.
///
/// Every call is a single request: no retries, no caching, no
/// deduplication.
#[allow(async_fn_in_trait)]
pub trait ModerationApi {
    /// `GET /ads` with the filter descriptor as query string.
    async fn list_ads(&self, filters: &AdFilters) -> Result<AdsPage, ApiError>;

    /// `GET /ads/:id`.
    async fn get_ad(&self, id: AdId) -> Result<Advertisement, ApiError>;

    /// `POST /ads/:id/approve`.
    async fn approve_ad(&self, id: AdId) -> Result<ModerationReceipt, ApiError>;

    /// `POST /ads/:id/reject`.
    async fn reject_ad(
        &self,
        id: AdId,
        payload: &ReasonPayload,
    ) -> Result<ModerationReceipt, ApiError>;

    /// `POST /ads/:id/request-changes`.
    async fn request_changes(
        &self,
        id: AdId,
        payload: &ReasonPayload,
    ) -> Result<ModerationReceipt, ApiError>;

    async fn stats_summary(&self, period: Period) -> Result<StatsSummary, ApiError>;

    async fn activity_chart(&self, period: Period) -> Result<Vec<ActivityData>, ApiError>;

    async fn decisions_chart(&self, period: Period) -> Result<DecisionsData, ApiError>;

    async fn categories_chart(&self, period: Period) -> Result<BTreeMap<String, u64>, ApiError>;

    /// Send a decision through the matching endpoint.
    async fn decide(&self, id: AdId, decision: &Decision) -> Result<ModerationReceipt, ApiError> {
        match decision {
            Decision::Approve => self.approve_ad(id).await,
            Decision::Reject { reason, comment } => {
                let payload = ReasonPayload {
                    reason: reason.clone(),
                    comment: comment.clone(),
                };
                self.reject_ad(id, &payload).await
            }
            Decision::RequestChanges { reason, comment } => {
                let payload = ReasonPayload {
                    reason: reason.clone(),
                    comment: comment.clone(),
                };
                self.request_changes(id, &payload).await
            }
        }
    }
}

/// Fetch summary, activity, decisions and categories concurrently.
///
/// The first failure wins; the other requests are dropped.
pub async fn fetch_stats_bundle<A: ModerationApi>(
    api: &A,
    period: Period,
) -> Result<StatsBundle, ApiError> {
    let (summary, activity, decisions, categories) = futures_util::try_join!(
        api.stats_summary(period),
        api.activity_chart(period),
        api.decisions_chart(period),
        api.categories_chart(period),
    )?;

    Ok(StatsBundle {
        period,
        summary,
        activity,
        decisions,
        categories,
    })
}
