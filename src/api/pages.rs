//! `/pages` endpoints (communities). Read-only and unauthenticated.

use reqwest::Method;

use super::{ApiClient, Auth, segment};
use crate::error::ApiError;
use crate::types::Page;

pub struct PagesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PagesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /pages`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to fetch pages`.
    pub async fn list(&self) -> Result<Vec<Page>, ApiError> {
        let request = self.client.request(Method::GET, "/pages", Auth::Anonymous);
        self.client.send_json(request, "Failed to fetch pages").await
    }

    /// `GET /pages/name/{name}`; the name is percent-encoded.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Page not found`.
    pub async fn by_name(&self, name: &str) -> Result<Page, ApiError> {
        let path = format!("/pages/name/{}", segment(name));
        let request = self.client.request(Method::GET, &path, Auth::Anonymous);
        self.client.send_json(request, "Page not found").await
    }

    /// `GET /pages/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Page not found`.
    pub async fn by_id(&self, id: &str) -> Result<Page, ApiError> {
        let path = format!("/pages/{}", segment(id));
        let request = self.client.request(Method::GET, &path, Auth::Anonymous);
        self.client.send_json(request, "Page not found").await
    }
}
