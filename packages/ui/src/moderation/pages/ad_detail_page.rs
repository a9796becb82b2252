//! Ad detail page - full ad, seller, history and the moderator actions.

use api::ApiClient;
use dioxus::prelude::*;
use moderation_core::format::{format_date, format_price};
use moderation_core::{AdId, Decision, ReasonKind};

use crate::moderation::{DecisionDialog, ModerationHistory, NoticeBanner, SellerCard, StatusBadge};
use crate::state::{
    ActionAvailability, DetailState, Generation, Notice, apply_decision, load_detail,
};

/// Props for AdDetailPage.
#[derive(Props, Clone, PartialEq)]
pub struct AdDetailPageProps {
    pub id: u64,
}

/// Ad detail page component.
#[component]
pub fn AdDetailPage(props: AdDetailPageProps) -> Element {
    let id = AdId(props.id);
    let client = use_context::<ApiClient>();
    let assets = client.config().clone();
    let generation = use_hook(Generation::default);

    let mut detail = use_signal(DetailState::default);
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);
    let mut dialog = use_signal(|| None::<ReasonKind>);

    // Load the ad; reruns when the route id changes.
    let load_client = client.clone();
    let load_generation = generation.clone();
    let _ad_resource = use_resource(use_reactive!(|(id,)| {
        let client = load_client.clone();
        let generation = load_generation.clone();
        async move {
            let ticket = generation.begin();
            detail.set(DetailState::Loading);
            let result = load_detail(&client, id).await;
            if !generation.is_current(ticket) {
                return;
            }
            let (state, failure) = DetailState::from_load(result);
            detail.set(state);
            if failure.is_some() {
                notice.set(failure);
            }
        }
    }));

    // Send a decision, then show the re-fetched ad unless a newer load started.
    let decide = move |decision: Decision| {
        let client = client.clone();
        let generation = generation.clone();
        spawn(async move {
            busy.set(true);
            let ticket = generation.begin();
            let result = apply_decision(&client, id, &decision).await;
            busy.set(false);
            if !generation.is_current(ticket) {
                tracing::debug!(%id, "dropping superseded decision result");
                return;
            }
            match result {
                Ok(ad) => {
                    dialog.set(None);
                    detail.set(DetailState::Loaded(Box::new(ad)));
                    notice.set(Some(Notice::success(decision.success_message())));
                }
                Err(e) => notice.set(Some(e.notice(&decision))),
            }
        });
    };

    let state = detail();
    let Some(ad) = state.ad() else {
        return rsx! {
            div { class: "page-container",
                Link { to: "/list", class: "btn btn-secondary back-link", "← Назад к списку" }
                NoticeBanner { notice: notice }
                if state.is_loading() {
                    div { class: "loading", "Загрузка объявления..." }
                } else {
                    div { class: "empty-state", "Объявление не найдено" }
                }
            }
        };
    };

    let actions = ActionAvailability::for_status(ad.status, busy());
    let images: Vec<String> = ad.images.iter().map(|path| assets.image_url(path)).collect();
    let price = format_price(ad.price);
    let created = format_date(&ad.created_at);
    let characteristics = ad.characteristic_rows();

    let approve = decide.clone();
    let submit_reason = decide.clone();

    rsx! {
        div { class: "page-container",
            Link { to: "/list", class: "btn btn-secondary back-link", "← Назад к списку" }

            NoticeBanner { notice: notice }

            div { class: "detail-layout",
                div { class: "detail-main card",
                    h1 { class: "page-title", "{ad.title}" }

                    div { class: "image-strip",
                        for (index, src) in images.iter().enumerate() {
                            img { key: "{index}", src: "{src}", alt: "{ad.title}" }
                        }
                    }

                    dl { class: "detail-fields",
                        dt { "Цена" }
                        dd { class: "detail-price", "{price}" }
                        dt { "Категория" }
                        dd { "{ad.category}" }
                        dt { "Статус" }
                        dd { StatusBadge { status: ad.status } }
                        dt { "Дата создания" }
                        dd { "{created}" }
                    }

                    h2 { class: "section-title", "Описание" }
                    p { class: "detail-description", "{ad.description}" }

                    h2 { class: "section-title", "Характеристики" }
                    table { class: "characteristics",
                        tbody {
                            for (key, value) in characteristics {
                                tr { key: "{key}",
                                    th { "{key}" }
                                    td { "{value}" }
                                }
                            }
                        }
                    }
                }

                div { class: "detail-side",
                    div { class: "card action-panel",
                        h3 { class: "card-title", "Действия модератора" }
                        button {
                            class: "btn btn-approve",
                            disabled: !actions.approve,
                            onclick: move |_| approve(Decision::Approve),
                            "Одобрить"
                        }
                        button {
                            class: "btn btn-reject",
                            disabled: !actions.reject,
                            onclick: move |_| dialog.set(Some(ReasonKind::Reject)),
                            "Отклонить"
                        }
                        button {
                            class: "btn btn-secondary",
                            disabled: !actions.request_changes,
                            onclick: move |_| dialog.set(Some(ReasonKind::RequestChanges)),
                            "Вернуть на доработку"
                        }
                    }

                    SellerCard { seller: ad.seller.clone() }

                    ModerationHistory { entries: ad.moderation_history.clone() }
                }
            }

            if let Some(kind) = dialog() {
                DecisionDialog {
                    key: "{kind:?}",
                    kind: kind,
                    busy: busy(),
                    on_submit: move |decision| submit_reason(decision),
                    on_cancel: move |_| dialog.set(None),
                }
            }
        }
    }
}
