//! State of the ad list view.

use api::{ApiError, ModerationApi};
use moderation_core::{AdFilters, AdsPage, Advertisement, FilterChange, Pagination};

use super::Notice;

/// Filters, the current page of ads and the loading flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub filters: AdFilters,
    pub ads: Vec<Advertisement>,
    pub pagination: Pagination,
    pub loading: bool,
}

impl ListState {
    /// Apply an edit; returns whether the query changed and must be refetched.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let next = self.filters.apply(change);
        if next == self.filters {
            return false;
        }
        self.filters = next;
        true
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Store a finished load. On failure the previous ads stay visible.
    pub fn finish_load(&mut self, result: Result<AdsPage, ApiError>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(page) => {
                self.ads = page.ads;
                self.pagination = page.pagination;
                None
            }
            Err(e) => {
                tracing::error!("Failed to load ads: {}", e);
                Some(Notice::load_failed("Не удалось загрузить объявления"))
            }
        }
    }
}

/// Fetch one page of ads for `filters`.
pub async fn load_list<A: ModerationApi>(api: &A, filters: &AdFilters) -> Result<AdsPage, ApiError> {
    tracing::debug!(page = filters.page, "loading ads");
    api.list_ads(filters).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::state::mock::{Call, MockApi, server_error};
    use moderation_core::AdStatus;

    async fn refresh(state: &mut ListState, api: &MockApi) -> Option<Notice> {
        state.begin_load();
        let result = load_list(api, &state.filters).await;
        state.finish_load(result)
    }

    #[tokio::test]
    async fn page_change_keeps_status_and_category_in_next_request() {
        let api = MockApi::default();
        let mut state = ListState::default();

        refresh(&mut state, &api).await;
        assert!(state.apply(FilterChange::Statuses(vec![AdStatus::Rejected])));
        refresh(&mut state, &api).await;
        assert!(state.apply(FilterChange::Category(Some(3))));
        refresh(&mut state, &api).await;
        assert!(state.apply(FilterChange::Page(2)));
        refresh(&mut state, &api).await;

        let requests: Vec<AdFilters> = api
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ListAds(filters) => Some(filters),
                _ => None,
            })
            .collect();
        assert_eq!(requests.len(), 4);

        let before = &requests[2];
        let after = &requests[3];
        assert_eq!(before.page, 1);
        assert_eq!(after.page, 2);
        assert_eq!(after.status, vec![AdStatus::Rejected]);
        assert_eq!(after.category_id, Some(3));
        assert_eq!(AdFilters { page: 1, ..after.clone() }, *before);

        assert_eq!(state.pagination.current_page, 2);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn narrowing_after_paging_goes_back_to_first_page() {
        let api = MockApi::default();
        let mut state = ListState::default();
        state.apply(FilterChange::Page(4));
        state.apply(FilterChange::Search(Some("шкаф".to_string())));
        refresh(&mut state, &api).await;

        assert_eq!(
            api.calls(),
            vec![Call::ListAds(AdFilters {
                search: Some("шкаф".to_string()),
                ..AdFilters::default()
            })]
        );
    }

    #[test]
    fn unchanged_filters_do_not_refetch() {
        let mut state = ListState::default();
        assert!(!state.apply(FilterChange::Page(1)));
        assert!(!state.apply(FilterChange::Category(None)));
        assert!(state.apply(FilterChange::Category(Some(2))));
        assert!(!state.apply(FilterChange::Category(Some(2))));
    }

    #[tokio::test]
    async fn reselecting_current_page_or_sort_does_not_refetch() {
        let api = MockApi::default();
        let mut state = ListState::default();
        state.apply(FilterChange::Category(Some(3)));
        state.apply(FilterChange::Page(3));
        refresh(&mut state, &api).await;

        assert!(!state.apply(FilterChange::Page(3)));
        let (sort_by, sort_order) = (state.filters.sort_by, state.filters.sort_order);
        assert!(!state.apply(FilterChange::Sort(sort_by, sort_order)));

        assert_eq!(state.filters.page, 3);
        assert_eq!(state.filters.category_id, Some(3));
        assert_eq!(api.count(|c| matches!(c, Call::ListAds(_))), 1);
    }

    #[test]
    fn failed_load_keeps_previous_ads() {
        let mut state = ListState::default();
        state.begin_load();
        let page = AdsPage {
            ads: vec![crate::state::mock::sample_ad(1, AdStatus::Pending)],
            pagination: Pagination::default(),
        };
        assert_eq!(state.finish_load(Ok(page)), None);

        state.begin_load();
        let notice = state.finish_load(Err(server_error()));
        assert_eq!(
            notice,
            Some(Notice::load_failed("Не удалось загрузить объявления"))
        );
        assert_eq!(state.ads.len(), 1);
        assert!(!state.loading);
    }
}
