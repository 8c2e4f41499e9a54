//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_QUESTION_PAGE_SIZE: u32 = 20;

/// Settings for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST root including the `/api` prefix, without a trailing slash.
    pub base_url: String,
    /// Default `size` for paged question listings.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), page_size: DEFAULT_QUESTION_PAGE_SIZE }
    }
}

impl ClientConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PEERPOINT_API_BASE_URL`: default `http://localhost:8080/api`
    /// - `PEERPOINT_PAGE_SIZE`: default 20
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("PEERPOINT_API_BASE_URL").ok();
        Self {
            base_url: normalize_base_url(base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)),
            page_size: env_parse_u32("PEERPOINT_PAGE_SIZE", DEFAULT_QUESTION_PAGE_SIZE),
        }
    }

    /// Config pointing at `base_url` with default paging.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url), ..Self::default() }
    }
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn env_parse_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
