//! Moderator dashboard components: ad list, ad detail and statistics.

mod ad_card;
mod charts;
mod decision_dialog;
mod filters_panel;
mod moderation_history;
mod notice_banner;
mod pagination_bar;
mod seller_card;
mod status_badge;

pub mod pages;

pub use ad_card::AdCard;
pub use charts::{ActivityChart, SliceChart};
pub use decision_dialog::DecisionDialog;
pub use filters_panel::FiltersPanel;
pub use moderation_history::ModerationHistory;
pub use notice_banner::NoticeBanner;
pub use pagination_bar::PaginationBar;
pub use seller_card::SellerCard;
pub use status_badge::{ActionTag, StatusBadge};
