//! Card for one advertisement in the list grid.

use api::ApiClient;
use dioxus::prelude::*;
use moderation_core::Advertisement;
use moderation_core::format::{format_date, format_price};

use crate::moderation::StatusBadge;

/// Props for AdCard component.
#[derive(Props, Clone, PartialEq)]
pub struct AdCardProps {
    pub ad: Advertisement,
}

/// Clickable card linking to the ad's detail page.
#[component]
pub fn AdCard(props: AdCardProps) -> Element {
    let client = use_context::<ApiClient>();
    let ad = &props.ad;
    let cover = client.config().cover_url(ad);
    let price = format_price(ad.price);
    let created = format_date(&ad.created_at);

    rsx! {
        Link { to: "/item/{ad.id}", class: "ad-card",
            div { class: "ad-card-cover",
                img { src: "{cover}", alt: "{ad.title}" }
                if ad.priority.is_top() {
                    span { class: "ad-card-top", "ТОП" }
                }
            }
            div { class: "ad-card-body",
                h3 { class: "ad-card-title", "{ad.title}" }
                div { class: "ad-card-price", "{price}" }
                div { class: "ad-card-meta",
                    span { class: "ad-card-category", "{ad.category}" }
                    span { class: "ad-card-date", "{created}" }
                }
                StatusBadge { status: ad.status }
            }
        }
    }
}
