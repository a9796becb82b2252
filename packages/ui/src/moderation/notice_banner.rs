//! Dismissible notification banner.

use dioxus::prelude::*;

use crate::state::{NOTICE_TIMEOUT_MS, Notice};

async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Shows the current notice and clears it after a few seconds.
///
/// A newer notice restarts the timer.
#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    let mut notice = notice;

    let _dismiss = use_resource(move || {
        let showing = notice.read().is_some();
        async move {
            if showing {
                sleep_ms(NOTICE_TIMEOUT_MS).await;
                notice.set(None);
            }
        }
    });

    let Some(current) = notice() else {
        return rsx! {};
    };
    let class = current.css_class();

    rsx! {
        div { class: "notice {class}",
            span { "{current.text}" }
            button {
                onclick: move |_| notice.set(None),
                "×"
            }
        }
    }
}
