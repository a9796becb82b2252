//! Moderator decisions and the reason dialog that gates them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::is_known_reason;

/// A moderator decision on one advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject {
        reason: String,
        comment: Option<String>,
    },
    RequestChanges {
        reason: String,
        comment: Option<String>,
    },
}

impl Decision {
    /// Short verb used in logs.
    pub fn verb(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject { .. } => "reject",
            Decision::RequestChanges { .. } => "request-changes",
        }
    }

    /// Notification shown after the decision was accepted.
    pub fn success_message(&self) -> &'static str {
        match self {
            Decision::Approve => "Объявление одобрено",
            Decision::Reject { .. } => "Объявление отклонено",
            Decision::RequestChanges { .. } => "Запрошены изменения",
        }
    }

    /// Notification shown when the API refused the decision.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Decision::Approve => "Ошибка при одобрении",
            _ => "Ошибка выполнения операции",
        }
    }
}

/// Body of the reject and request-changes calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonPayload {
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Which dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonKind {
    Reject,
    RequestChanges,
}

impl ReasonKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReasonKind::Reject => "Отклонение объявления",
            ReasonKind::RequestChanges => "Запрос изменений",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Выберите причину")]
    MissingReason,
    #[error("Unknown reason: {0}")]
    UnknownReason(String),
}

/// State of the reject / request-changes dialog.
///
/// Submission stays blocked until a reason from
/// [`REJECTION_REASONS`](crate::catalog::REJECTION_REASONS) is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonForm {
    kind: ReasonKind,
    reason: Option<String>,
    comment: String,
}

impl ReasonForm {
    /// Fresh, empty dialog.
    pub fn new(kind: ReasonKind) -> Self {
        Self {
            kind,
            reason: None,
            comment: String::new(),
        }
    }

    pub fn kind(&self) -> ReasonKind {
        self.kind
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Select a reason. An empty string clears the selection.
    pub fn select_reason(&mut self, reason: &str) -> Result<(), FormError> {
        if reason.is_empty() {
            self.reason = None;
            return Ok(());
        }
        if !is_known_reason(reason) {
            return Err(FormError::UnknownReason(reason.to_string()));
        }
        self.reason = Some(reason.to_string());
        Ok(())
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn can_submit(&self) -> bool {
        self.reason.is_some()
    }

    /// Build the decision, or report why it cannot be sent yet.
    pub fn submit(&self) -> Result<Decision, FormError> {
        let reason = self.reason.clone().ok_or(FormError::MissingReason)?;
        let comment = Some(self.comment.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(match self.kind {
            ReasonKind::Reject => Decision::Reject { reason, comment },
            ReasonKind::RequestChanges => Decision::RequestChanges { reason, comment },
        })
    }
}
