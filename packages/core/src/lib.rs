//! Core domain types for the moderation dashboard.
//!
//! This crate contains shared types and pure logic used by all packages:
//! - Advertisement and its seller / moderation history
//! - AdFilters with the page-reset reducer, and Pagination
//! - Statistics projections and their chart reshaping
//! - Formatting of prices, dates and statuses
//! - Fixed lookup tables (reasons, categories, sort options)

mod ad;
pub mod catalog;
mod decision;
pub mod format;
mod filters;
mod stats;

pub use ad::{AdId, AdStatus, Advertisement, ModerationAction, ModerationEntry, Priority, Seller};
pub use decision::{Decision, FormError, ReasonForm, ReasonKind, ReasonPayload};
pub use filters::{AdFilters, AdsPage, FilterChange, ITEMS_PER_PAGE, Pagination, SortBy, SortOrder};
pub use stats::{
    ActivityData, ChartSlice, DecisionsData, Period, StatsSummary, category_slices, scale_max,
};
