//! REST client for the forum backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every view and the CLI go through [`ApiClient`]; nothing else opens HTTP
//! connections. Calls are grouped by resource (`auth`, `pages`, `questions`,
//! `replies`) behind borrowed handles, e.g. `client.questions().create(..)`.
//!
//! ERROR HANDLING
//! ==============
//! One exchange per call: no retry, no timeout, no cancellation. A non-success
//! status becomes [`ApiError::Status`] carrying the JSON body's `message` when
//! the server sent one, else the operation's fixed fallback text.

pub mod auth;
pub mod pages;
pub mod questions;
pub mod replies;


use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;

pub use auth::AuthApi;
pub use pages::PagesApi;
pub use questions::QuestionsApi;
pub use replies::RepliesApi;

// =============================================================================
// TOKEN SLOT
// =============================================================================

/// Shared, cloneable holder for the bearer token.
///
/// The session store writes it; the client only reads it when building an
/// authenticated request.
#[derive(Clone, Debug, Default)]
pub struct TokenSlot(Arc<RwLock<Option<String>>>);

impl TokenSlot {
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, token: Option<String>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = token;
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Whether a request carries the session's bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Auth {
    Anonymous,
    Bearer,
}

/// HTTP client bound to one backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
    token: TokenSlot,
}

impl ApiClient {
    /// Build a client from config with a fresh, empty token slot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the base URL is not absolute
    /// http(s).
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = crate::config::normalize_base_url(&config.base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            page_size: config.page_size,
            token: TokenSlot::default(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Handle to the token slot shared with the session store.
    #[must_use]
    pub fn token_slot(&self) -> TokenSlot {
        self.token.clone()
    }

    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    #[must_use]
    pub fn pages(&self) -> PagesApi<'_> {
        PagesApi::new(self)
    }

    #[must_use]
    pub fn questions(&self) -> QuestionsApi<'_> {
        QuestionsApi::new(self)
    }

    #[must_use]
    pub fn replies(&self) -> RepliesApi<'_> {
        RepliesApi::new(self)
    }

    pub(crate) fn request(&self, method: Method, path: &str, auth: Auth) -> RequestBuilder {
        tracing::debug!(%method, %path, authenticated = auth == Auth::Bearer, "api request");
        let request = self.http.request(method, endpoint(&self.base_url, path));
        match (auth, self.token.get()) {
            (Auth::Bearer, Some(token)) => request.bearer_auth(token),
            _ => request,
        }
    }

    /// Send and decode a JSON success body as `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &'static str,
    ) -> Result<T, ApiError> {
        let response = checked(request.send().await?, fallback).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and discard the success body.
    pub(crate) async fn send_empty(&self, request: RequestBuilder, fallback: &'static str) -> Result<(), ApiError> {
        checked(request.send().await?, fallback).await?;
        Ok(())
    }
}

async fn checked(response: Response, fallback: &'static str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body, fallback);
    tracing::debug!(status = status.as_u16(), %message, "api request rejected");
    Err(ApiError::Status { status: status.as_u16(), message })
}

/// Pull `message` out of a JSON error body, else use `fallback`.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Percent-encode one path segment.
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
