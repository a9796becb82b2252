//! State of the ad detail view and the moderator decision flow.

use api::{ApiError, ModerationApi};
use moderation_core::{AdId, AdStatus, Advertisement, Decision};
use thiserror::Error;

use super::Notice;

/// Lifecycle of the detail view: idle, loading, then loaded or not found.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Loaded(Box<Advertisement>),
    NotFound,
}

impl DetailState {
    /// Resolve a finished load. Any failure leaves the view in `NotFound`.
    pub fn from_load(result: Result<Advertisement, ApiError>) -> (Self, Option<Notice>) {
        match result {
            Ok(ad) => (DetailState::Loaded(Box::new(ad)), None),
            Err(e) => {
                tracing::error!("Failed to load ad: {}", e);
                (
                    DetailState::NotFound,
                    Some(Notice::load_failed("Не удалось загрузить объявление")),
                )
            }
        }
    }

    pub fn ad(&self) -> Option<&Advertisement> {
        match self {
            DetailState::Loaded(ad) => Some(ad),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Idle | DetailState::Loading)
    }
}

/// Failure of a moderator decision.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The API refused the decision; nothing was re-fetched.
    #[error("decision failed: {0}")]
    Action(#[source] ApiError),
    /// The decision went through but the ad could not be re-fetched.
    #[error("decision applied but refresh failed: {0}")]
    Refresh(#[source] ApiError),
}

impl ActionError {
    pub fn notice(&self, decision: &Decision) -> Notice {
        match self {
            ActionError::Action(_) => Notice::action_failed(decision.failure_message()),
            ActionError::Refresh(_) => Notice::load_failed("Не удалось обновить объявление"),
        }
    }
}

/// Which buttons of the action panel are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionAvailability {
    pub approve: bool,
    pub reject: bool,
    pub request_changes: bool,
}

impl ActionAvailability {
    pub fn for_status(status: AdStatus, busy: bool) -> Self {
        Self {
            approve: !busy && status != AdStatus::Approved,
            reject: !busy && status != AdStatus::Rejected,
            request_changes: !busy,
        }
    }
}

/// Fetch one ad for the detail view.
pub async fn load_detail<A: ModerationApi>(api: &A, id: AdId) -> Result<Advertisement, ApiError> {
    tracing::debug!(%id, "loading ad");
    api.get_ad(id).await
}

/// Send a decision, then re-fetch the ad exactly once.
///
/// When the decision itself fails, no re-fetch happens.
pub async fn apply_decision<A: ModerationApi>(
    api: &A,
    id: AdId,
    decision: &Decision,
) -> Result<Advertisement, ActionError> {
    tracing::info!(%id, action = decision.verb(), "applying moderator decision");

    api.decide(id, decision).await.map_err(|e| {
        tracing::error!(%id, action = decision.verb(), "Decision failed: {}", e);
        ActionError::Action(e)
    })?;

    api.get_ad(id).await.map_err(|e| {
        tracing::error!(%id, "Refresh after decision failed: {}", e);
        ActionError::Refresh(e)
    })
}
