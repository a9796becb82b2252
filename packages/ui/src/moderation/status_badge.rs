//! Status and history action tags.

use dioxus::prelude::*;
use moderation_core::format::{status_label, status_tone};
use moderation_core::{AdStatus, ModerationAction};

/// Badge for displaying an ad's moderation status.
#[component]
pub fn StatusBadge(status: AdStatus) -> Element {
    let tone = status_tone(status).as_str();
    let text = status_label(status);

    rsx! {
        span {
            class: "status-badge badge-{tone}",
            {text}
        }
    }
}

/// Tag for one entry of the moderation history.
#[component]
pub fn ActionTag(action: ModerationAction) -> Element {
    let tone = match action {
        ModerationAction::Approved => "success",
        ModerationAction::Rejected => "error",
        ModerationAction::RequestChanges => "warning",
        ModerationAction::Other => "default",
    };

    rsx! {
        span {
            class: "action-tag badge-{tone}",
            {action.label()}
        }
    }
}
