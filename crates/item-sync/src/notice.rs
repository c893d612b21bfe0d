//! User-visible Notifications
//!
//! Every finished operation produces exactly one [`Notice`].

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast: short title plus message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error notice carrying the request failure's message
    pub fn failed(title: impl Into<String>, err: &ApiError) -> Self {
        Self::error(title, err.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
