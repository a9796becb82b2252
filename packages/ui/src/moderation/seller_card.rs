//! Seller summary on the detail page.

use dioxus::prelude::*;
use moderation_core::Seller;
use moderation_core::format::format_short_date;

#[component]
pub fn SellerCard(seller: Seller) -> Element {
    let registered = format_short_date(&seller.registered_at);

    rsx! {
        div { class: "card seller-card",
            h3 { class: "card-title", "Продавец" }
            div { class: "seller-name", "{seller.name}" }
            div { class: "seller-meta", "Рейтинг: {seller.rating}" }
            if let Some(total) = seller.total_ads {
                div { class: "seller-meta", "Объявлений: {total}" }
            }
            div { class: "seller-meta", "На Авито с {registered}" }
        }
    }
}
