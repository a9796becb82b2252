//! Modal asking for the reason of a rejection or change request.

use dioxus::prelude::*;
use moderation_core::catalog::REJECTION_REASONS;
use moderation_core::{Decision, ReasonForm, ReasonKind};

/// Props for DecisionDialog component.
#[derive(Props, Clone, PartialEq)]
pub struct DecisionDialogProps {
    pub kind: ReasonKind,
    /// Whether a decision is already in flight.
    pub busy: bool,
    /// Callback with the completed decision.
    pub on_submit: EventHandler<Decision>,
    /// Callback when the dialog is dismissed.
    pub on_cancel: EventHandler<()>,
}

/// Reason select and optional comment; submit stays disabled until a reason is chosen.
#[component]
pub fn DecisionDialog(props: DecisionDialogProps) -> Element {
    let kind = props.kind;
    let mut form = use_signal(move || ReasonForm::new(kind));
    let mut error = use_signal(|| None::<String>);

    let submit = move |_| {
        let result = form.read().submit();
        match result {
            Ok(decision) => props.on_submit.call(decision),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let selected = form.read().reason().unwrap_or_default().to_string();
    let comment = form.read().comment().to_string();
    let can_submit = form.read().can_submit() && !props.busy;

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { class: "modal-title", {kind.title()} }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "Причина" }
                    select {
                        value: "{selected}",
                        onchange: move |e| {
                            error.set(None);
                            if let Err(err) = form.write().select_reason(&e.value()) {
                                tracing::warn!("Rejected reason selection: {}", err);
                                error.set(Some(err.to_string()));
                            }
                        },
                        option { value: "", disabled: true, selected: selected.is_empty(), "Выберите причину" }
                        for reason in REJECTION_REASONS {
                            option { key: "{reason}", value: reason, selected: selected == reason, "{reason}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "Комментарий" }
                    textarea {
                        rows: 4,
                        value: "{comment}",
                        oninput: move |e| form.write().set_comment(e.value()),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit,
                        onclick: submit,
                        if props.busy { "Отправка..." } else { "Подтвердить" }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| props.on_cancel.call(()),
                        "Отмена"
                    }
                }
            }
        }
    }
}
