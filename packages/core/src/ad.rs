//! Advertisement domain types as delivered by the moderation API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Numeric identifier of an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdId(pub u64);

impl AdId {
    /// Parse an ad ID from a route or query string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u64> for AdId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AdId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation status of an advertisement.
///
/// Codes the dashboard does not know are read as [`AdStatus::Draft`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Draft,
}

impl AdStatus {
    /// Every status, in the order the filter panel lists them.
    pub const ALL: [AdStatus; 4] = [
        AdStatus::Pending,
        AdStatus::Approved,
        AdStatus::Rejected,
        AdStatus::Draft,
    ];

    /// Wire code for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdStatus::Pending => "pending",
            AdStatus::Approved => "approved",
            AdStatus::Rejected => "rejected",
            AdStatus::Draft => "draft",
        }
    }

    /// Map a raw status code to a status; anything unknown is a draft.
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => AdStatus::Pending,
            "approved" => AdStatus::Approved,
            "rejected" => AdStatus::Rejected,
            _ => AdStatus::Draft,
        }
    }
}

impl std::fmt::Display for AdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review priority of an advertisement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Urgent,
    #[default]
    #[serde(other)]
    Normal,
}

impl Priority {
    /// Whether the card should carry the "ТОП" marker.
    pub fn is_top(&self) -> bool {
        matches!(self, Priority::High | Priority::Urgent)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Normal => write!(f, "normal"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

/// Seller shown on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    /// Some API versions send the rating as a string.
    #[serde(default, deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ads: Option<u32>,
    pub registered_at: DateTime<Utc>,
}

/// Kind of decision recorded in the moderation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModerationAction {
    Approved,
    Rejected,
    RequestChanges,
    #[serde(other)]
    Other,
}

impl ModerationAction {
    pub fn label(&self) -> &'static str {
        match self {
            ModerationAction::Approved => "Одобрено",
            ModerationAction::Rejected => "Отклонено",
            ModerationAction::RequestChanges => "На доработку",
            ModerationAction::Other => "Прочее",
        }
    }
}

/// One past decision on an advertisement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationEntry {
    pub moderator_name: String,
    pub action: ModerationAction,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A classified listing under moderation review.
///
/// This is a snapshot of the remote record; the dashboard never edits it
/// locally and replaces it wholesale after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    pub id: AdId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    pub status: AdStatus,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Ordered image URLs, either absolute or relative to the asset host.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub characteristics: BTreeMap<String, serde_json::Value>,
    pub seller: Seller,
    #[serde(default)]
    pub moderation_history: Vec<ModerationEntry>,
}

impl Advertisement {
    /// First image path, if the ad has any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Characteristics as display pairs, with string values unquoted.
    pub fn characteristic_rows(&self) -> Vec<(String, String)> {
        self.characteristics
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect()
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
