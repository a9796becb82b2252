//! Client for the moderation REST API.
//!
//! This crate contains:
//! - `ApiConfig`: base path, asset host and image URL resolution
//! - `ModerationApi`: the remote operations the views depend on
//! - `ApiClient`: the `reqwest` implementation of those operations

mod client;
mod config;
mod service;

pub use client::{ApiClient, ApiError};
pub use config::{ApiConfig, DEFAULT_ASSET_HOST, DEFAULT_BASE_URL};
pub use service::{ModerationApi, ModerationReceipt, StatsBundle, fetch_stats_bundle};

// Re-export core types for convenience
pub use moderation_core::{
    ActivityData, AdFilters, AdId, AdStatus, AdsPage, Advertisement, Decision, DecisionsData,
    Pagination, Period, ReasonPayload, StatsSummary,
};
