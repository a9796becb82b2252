//! View state shared by the moderation pages.
//!
//! Everything here is plain Rust over [`api::ModerationApi`], so the
//! loading and decision rules can be tested without rendering.

mod detail;
mod generation;
mod list;
mod notice;
mod stats;

#[cfg(test)]
pub(crate) mod mock;

pub use detail::{ActionAvailability, ActionError, DetailState, apply_decision, load_detail};
pub use generation::{Generation, Ticket};
pub use list::{ListState, load_list};
pub use notice::{NOTICE_TIMEOUT_MS, Notice, NoticeKind};
pub use stats::{StatsView, load_stats};
