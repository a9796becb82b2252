// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use api::{ApiClient, ApiConfig};
use ui::moderation::pages::{AdDetailPage, AdsListPage, StatsPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Moderator routes with sidebar navigation
    #[layout(ModerationLayout)]
        #[route("/")]
        ListRedirect {},
        #[route("/list")]
        AdsList {},
        #[route("/item/:id")]
        AdDetail { id: u64 },
        #[route("/stats")]
        Stats {},
}

const MODERATION_CSS: Asset = asset!("/assets/moderation.css");

fn main() {
    #[cfg(feature = "desktop")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| ApiClient::new(ApiConfig::from_env()).map_err(|e| e.to_string()));

    rsx! {
        // Global app resources
        document::Title { "Avito Moderation" }
        document::Link { rel: "stylesheet", href: MODERATION_CSS }

        match client {
            Ok(client) => rsx! {
                ApiProvider { client, Router::<Route> {} }
            },
            Err(e) => {
                tracing::error!("Invalid API configuration: {}", e);
                rsx! {
                    div { class: "error-banner", "Неверная конфигурация API: {e}" }
                }
            }
        }
    }
}

/// Makes the API client available to every view below it.
#[component]
fn ApiProvider(client: ApiClient, children: Element) -> Element {
    use_context_provider(|| client);
    children
}

/// Layout for moderator routes with sidebar navigation.
#[component]
fn ModerationLayout() -> Element {
    rsx! {
        div { class: "admin-layout",
            // Sidebar navigation
            aside { class: "admin-sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-logo", "Avito Moderation" }
                }
                nav { class: "sidebar-nav",
                    Link {
                        to: Route::AdsList {},
                        class: "nav-link",
                        active_class: "active",
                        span { class: "nav-icon", "▦" }
                        span { "Объявления" }
                    }
                    Link {
                        to: Route::Stats {},
                        class: "nav-link",
                        active_class: "active",
                        span { class: "nav-icon", "▤" }
                        span { "Статистика" }
                    }
                }
            }

            div { class: "admin-body",
                header { class: "admin-header",
                    h2 { "Панель модератора" }
                }
                // Main content area
                main { class: "admin-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Redirect / to /list.
#[component]
fn ListRedirect() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.push(Route::AdsList {});
    });
    rsx! {}
}

/// Ads list page.
#[component]
fn AdsList() -> Element {
    rsx! {
        AdsListPage {}
    }
}

/// Ad detail page.
#[component]
fn AdDetail(id: u64) -> Element {
    rsx! {
        AdDetailPage { id }
    }
}

/// Statistics page.
#[component]
fn Stats() -> Element {
    rsx! {
        StatsPage {}
    }
}
