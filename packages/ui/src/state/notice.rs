//! Transient notifications shown above each view.

/// How long a notice stays on screen before it dismisses itself.
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

/// What kind of event produced the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    LoadFailed,
    ActionFailed,
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn load_failed(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::LoadFailed,
            text: text.into(),
        }
    }

    pub fn action_failed(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::ActionFailed,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self.kind, NoticeKind::Success)
    }

    /// CSS modifier for the banner.
    pub fn css_class(&self) -> &'static str {
        if self.is_error() {
            "notice-error"
        } else {
            "notice-success"
        }
    }
}
