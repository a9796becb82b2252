//! Pager below the ad grid.

use dioxus::prelude::*;
use moderation_core::Pagination;

/// Number of page buttons shown at once.
const PAGE_WINDOW: u32 = 5;

/// Props for PaginationBar component.
#[derive(Props, Clone, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    /// Called with the page number the moderator picked.
    pub on_page: EventHandler<u32>,
}

/// Previous/next buttons around a window of numbered pages.
#[component]
pub fn PaginationBar(props: PaginationBarProps) -> Element {
    let pagination = props.pagination.clone();
    let current = pagination.current_page;
    let total = pagination.total_pages.max(1);
    let pages = pagination.window(PAGE_WINDOW);

    rsx! {
        div { class: "pagination",
            button {
                class: "btn btn-page",
                disabled: !pagination.has_previous(),
                onclick: move |_| props.on_page.call(current.saturating_sub(1)),
                "‹"
            }
            for page in pages {
                button {
                    key: "{page}",
                    class: if page == current { "btn btn-page active" } else { "btn btn-page" },
                    disabled: page == current,
                    onclick: move |_| props.on_page.call(page),
                    "{page}"
                }
            }
            button {
                class: "btn btn-page",
                disabled: !pagination.has_next(),
                onclick: move |_| props.on_page.call(current + 1),
                "›"
            }
            span { class: "pagination-summary",
                "Страница {current} из {total} · всего {pagination.total_items}"
            }
        }
    }
}
