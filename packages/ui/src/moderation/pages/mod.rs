//! Page components for route-based navigation.

mod ad_detail_page;
mod ads_list_page;
mod stats_page;

pub use ad_detail_page::AdDetailPage;
pub use ads_list_page::AdsListPage;
pub use stats_page::StatsPage;
