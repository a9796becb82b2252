//! Statistics page - summary cards and charts for a selectable period.

use api::ApiClient;
use dioxus::prelude::*;
use moderation_core::Period;
use moderation_core::catalog::PERIODS;
use moderation_core::format::format_percent;

use crate::moderation::{ActivityChart, NoticeBanner, SliceChart};
use crate::state::{Notice, StatsView, load_stats};

/// Statistics page component.
#[component]
pub fn StatsPage() -> Element {
    let client = use_context::<ApiClient>();
    let mut period = use_signal(Period::default);
    let mut stats = use_signal(|| None::<StatsView>);
    let mut loading = use_signal(|| true);
    let notice = use_signal(|| None::<Notice>);

    // Refetch all four datasets whenever the period changes.
    let _stats_resource = use_resource(move || {
        let client = client.clone();
        let period = period();
        let mut notice = notice;
        async move {
            loading.set(true);
            match load_stats(&client, period).await {
                Ok(view) => stats.set(Some(view)),
                Err(e) => {
                    tracing::error!(%period, "Failed to load statistics: {}", e);
                    notice.set(Some(Notice::load_failed("Не удалось загрузить статистику")));
                }
            }
            loading.set(false);
        }
    });

    let selected = period().as_str();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Статистика" }
                }
                div { class: "page-header-actions",
                    select {
                        value: "{selected}",
                        onchange: move |e| {
                            if let Some(next) = Period::from_code(&e.value()) {
                                period.set(next);
                            }
                        },
                        for (value, label) in PERIODS {
                            option {
                                key: "{value}",
                                value: value.as_str(),
                                selected: value.as_str() == selected,
                                "{label}"
                            }
                        }
                    }
                }
            }

            NoticeBanner { notice: notice }

            if let Some(view) = stats() {
                div { class: if loading() { "stats-content stats-refreshing" } else { "stats-content" },
                    div { class: "stats-grid",
                        div { class: "stat-card",
                            div { class: "stat-card-value", "{view.summary.total_reviewed}" }
                            div { class: "stat-card-label", "Всего проверено" }
                        }
                        div { class: "stat-card stat-card-success",
                            div { class: "stat-card-value", {format_percent(view.summary.approved_percentage)} }
                            div { class: "stat-card-label", "Одобрено" }
                        }
                        div { class: "stat-card stat-card-danger",
                            div { class: "stat-card-value", {format_percent(view.summary.rejected_percentage)} }
                            div { class: "stat-card-label", "Отклонено" }
                        }
                        div { class: "stat-card",
                            div { class: "stat-card-value", "{view.summary.average_review_time}" }
                            div { class: "stat-card-label", "Среднее время (сек)" }
                        }
                    }

                    div { class: "stats-charts",
                        div { class: "card chart-card chart-card-wide",
                            h3 { class: "card-title", "Активность" }
                            ActivityChart { activity: view.activity.clone() }
                        }
                        div { class: "card chart-card",
                            h3 { class: "card-title", "Решения" }
                            SliceChart { slices: view.decisions.clone(), percent: true }
                        }
                        div { class: "card chart-card",
                            h3 { class: "card-title", "Категории" }
                            SliceChart { slices: view.categories.clone() }
                        }
                    }
                }
            } else if loading() {
                div { class: "loading", "Загрузка статистики..." }
            } else {
                div { class: "empty-state", "Нет данных за выбранный период" }
            }
        }
    }
}
