//! Error types shared across the client library.
//!
//! ERROR HANDLING
//! ==============
//! Three layers, three enums. `ApiError` covers one HTTP exchange,
//! `StorageError` covers session persistence, and `ForumError` is what a view
//! sees when it runs a user action (including the client-side login guard).
//! None of these are retried; every caller surfaces them as a notice.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

// =============================================================================
// API
// =============================================================================

/// Failure of a single REST call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    ///
    /// `message` is the `message` field of the JSON error body when present,
    /// otherwise the per-operation fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success body did not match the declared shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The configured base URL cannot be used to build requests.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// User-facing text for a notice.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for 401/403, i.e. a missing or expired token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Failure reading or writing persisted session state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing store refused the operation (browser storage quota, etc.).
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// FORUM ACTIONS
// =============================================================================

/// Failure of a user-initiated forum action.
#[derive(Debug, thiserror::Error)]
pub enum ForumError {
    /// The action needs a session; nothing was sent. Callers redirect to login.
    #[error("login required")]
    LoginRequired,

    /// The draft failed client-side checks; nothing was sent.
    #[error("{0}")]
    Validation(&'static str),

    /// The action needs data that has not been loaded yet.
    #[error("Still loading, try again in a moment")]
    NotLoaded,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ForumError {
    /// User-facing text for a notice.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api(err) => err.message(),
            other => other.to_string(),
        }
    }

    /// `true` when the caller should navigate to the login view.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        match self {
            Self::LoginRequired => true,
            Self::Api(err) => err.is_unauthorized(),
            _ => false,
        }
    }
}
