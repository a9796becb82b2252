//! Past decisions on an advertisement.

use dioxus::prelude::*;
use moderation_core::ModerationEntry;
use moderation_core::format::format_date;

use crate::moderation::ActionTag;

/// Props for ModerationHistory component.
#[derive(Props, Clone, PartialEq)]
pub struct ModerationHistoryProps {
    pub entries: Vec<ModerationEntry>,
}

/// History card; renders nothing while the ad has no history.
#[component]
pub fn ModerationHistory(props: ModerationHistoryProps) -> Element {
    if props.entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "card history-card",
            h3 { class: "card-title", "История модерации" }
            ul { class: "history-list",
                for (index, entry) in props.entries.iter().enumerate() {
                    li { key: "{index}", class: "history-item",
                        div { class: "history-header",
                            strong { "{entry.moderator_name}" }
                            ActionTag { action: entry.action }
                        }
                        div { class: "history-date", {format_date(&entry.timestamp)} }
                        if let Some(ref reason) = entry.reason {
                            div { class: "history-reason", "Причина: {reason}" }
                        }
                        if let Some(ref comment) = entry.comment {
                            div { class: "history-comment", "{comment}" }
                        }
                    }
                }
            }
        }
    }
}
