//! Ads list page - filters, sort, card grid and pager.

use api::ApiClient;
use dioxus::prelude::*;
use moderation_core::FilterChange;
use moderation_core::catalog::{SORT_OPTIONS, sort_option};

use crate::moderation::{AdCard, FiltersPanel, NoticeBanner, PaginationBar};
use crate::state::{ListState, Notice, load_list};

/// Ads list page component.
#[component]
pub fn AdsListPage() -> Element {
    let client = use_context::<ApiClient>();
    let mut list = use_signal(ListState::default);
    let notice = use_signal(|| None::<Notice>);

    // Only the filters drive refetching; loading flags and results do not.
    let filters = use_memo(move || list.read().filters.clone());

    // Restarting the resource drops the superseded request.
    let _ads = use_resource(move || {
        let client = client.clone();
        let filters = filters();
        let mut notice = notice;
        async move {
            list.write().begin_load();
            let result = load_list(&client, &filters).await;
            if let Some(n) = list.write().finish_load(result) {
                notice.set(Some(n));
            }
        }
    });

    let mut on_change = move |change: FilterChange| {
        if list.write().apply(change) {
            tracing::debug!("ad filters changed");
        }
    };

    let state = list.read().clone();
    let current_sort = format!(
        "{}-{}",
        state.filters.sort_by.as_str(),
        state.filters.sort_order.as_str()
    );

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Объявления" }
                    p { class: "page-description", "Всего: {state.pagination.total_items}" }
                }
                div { class: "page-header-actions",
                    label { class: "sort-select",
                        span { "Сортировка:" }
                        select {
                            value: "{current_sort}",
                            onchange: move |e| {
                                if let Some(sort) = sort_option(&e.value()) {
                                    on_change(FilterChange::Sort(sort.sort_by, sort.sort_order));
                                }
                            },
                            for sort in SORT_OPTIONS {
                                option {
                                    key: "{sort.label}",
                                    value: sort.value(),
                                    selected: sort.value() == current_sort,
                                    "{sort.label}"
                                }
                            }
                        }
                    }
                }
            }

            NoticeBanner { notice: notice }

            FiltersPanel {
                filters: state.filters.clone(),
                on_change: move |change| on_change(change),
            }

            if state.loading && state.ads.is_empty() {
                div { class: "loading", "Загрузка объявлений..." }
            } else if state.ads.is_empty() {
                div { class: "empty-state",
                    p { "Объявления не найдены" }
                }
            } else {
                div { class: if state.loading { "ad-grid ad-grid-loading" } else { "ad-grid" },
                    for ad in state.ads.iter() {
                        AdCard { key: "{ad.id}", ad: ad.clone() }
                    }
                }
                PaginationBar {
                    pagination: state.pagination.clone(),
                    on_page: move |page| on_change(FilterChange::Page(page)),
                }
            }
        }
    }
}
