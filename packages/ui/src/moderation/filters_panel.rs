//! Filter panel above the ad list.

use dioxus::prelude::*;
use moderation_core::catalog::CATEGORIES;
use moderation_core::format::status_label;
use moderation_core::{AdFilters, AdStatus, FilterChange};

/// Props for FiltersPanel component.
#[derive(Props, Clone, PartialEq)]
pub struct FiltersPanelProps {
    /// Filters currently applied to the list.
    pub filters: AdFilters,
    /// Callback for every edit made in the panel.
    pub on_change: EventHandler<FilterChange>,
}

/// Parse a price field; blank or invalid input clears the bound.
fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

fn price_text(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// Search, status, category and price filters with a reset button.
#[component]
pub fn FiltersPanel(props: FiltersPanelProps) -> Element {
    let filters = &props.filters;
    let on_change = props.on_change;

    let search = filters.search.clone().unwrap_or_default();
    let category = filters
        .category_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    let min_price = price_text(filters.min_price);
    let max_price = price_text(filters.max_price);

    rsx! {
        div { class: "filters-panel",
            div { class: "form-group",
                label { "Поиск" }
                input {
                    r#type: "search",
                    placeholder: "Название",
                    value: "{search}",
                    oninput: move |e| on_change.call(FilterChange::Search(Some(e.value()))),
                }
            }

            div { class: "form-group",
                label { "Статус" }
                div { class: "status-options",
                    for status in AdStatus::ALL {
                        label { key: "{status}", class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: filters.status.contains(&status),
                                onchange: move |_| on_change.call(FilterChange::ToggleStatus(status)),
                            }
                            {status_label(status)}
                        }
                    }
                }
            }

            div { class: "form-group",
                label { "Категория" }
                select {
                    value: "{category}",
                    onchange: move |e| {
                        let id = e.value().parse::<u32>().ok();
                        on_change.call(FilterChange::Category(id));
                    },
                    option { value: "", "Все категории" }
                    for (id, name) in CATEGORIES {
                        option { key: "{id}", value: "{id}", selected: filters.category_id == Some(id), "{name}" }
                    }
                }
            }

            div { class: "form-group",
                label { "Цена" }
                div { class: "price-range",
                    input {
                        r#type: "number",
                        min: "0",
                        placeholder: "От",
                        value: "{min_price}",
                        onchange: move |e| on_change.call(FilterChange::MinPrice(parse_price(&e.value()))),
                    }
                    input {
                        r#type: "number",
                        min: "0",
                        placeholder: "До",
                        value: "{max_price}",
                        onchange: move |e| on_change.call(FilterChange::MaxPrice(parse_price(&e.value()))),
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_change.call(FilterChange::Clear),
                    "Сбросить"
                }
            }
        }
    }
}
