//! Transient user notifications (toasts in the browser, stderr in the CLI).

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::ForumError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    /// Notice for a failed action. `LoginRequired` gets a prompt naming
    /// `action`, e.g. `"Please login to reply"`.
    #[must_use]
    pub fn from_error(err: &ForumError, action: &str) -> Self {
        match err {
            ForumError::LoginRequired => Self::error(format!("Please login to {action}")),
            other => Self::error(other.message()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
