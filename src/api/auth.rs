//! `/auth` endpoints.
//!
//! These calls only exchange credentials for a token. Storing the result is
//! the session store's job; see [`crate::session::SessionStore::login`].

use reqwest::Method;

use super::{ApiClient, Auth};
use crate::error::ApiError;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Registration failed`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/register", Auth::Anonymous)
            .json(&RegisterRequest { name, email, password });
        self.client.send_json(request, "Registration failed").await
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Login failed`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/login", Auth::Anonymous)
            .json(&LoginRequest { email, password });
        self.client.send_json(request, "Login failed").await
    }
}
