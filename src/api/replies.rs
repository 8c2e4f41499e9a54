//! `/replies` endpoints.

use reqwest::Method;

use super::{ApiClient, Auth, segment};
use crate::error::ApiError;
use crate::types::{Reply, ReplyRequest};

pub struct RepliesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RepliesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /replies/question/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to fetch replies`.
    pub async fn by_question(&self, question_id: &str) -> Result<Vec<Reply>, ApiError> {
        let path = format!("/replies/question/{}", segment(question_id));
        let request = self.client.request(Method::GET, &path, Auth::Anonymous);
        self.client.send_json(request, "Failed to fetch replies").await
    }

    /// `POST /replies/question/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to create reply`.
    pub async fn create(&self, question_id: &str, content: &str) -> Result<Reply, ApiError> {
        let path = format!("/replies/question/{}", segment(question_id));
        let request = self
            .client
            .request(Method::POST, &path, Auth::Bearer)
            .json(&ReplyRequest { content });
        self.client.send_json(request, "Failed to create reply").await
    }

    /// `PUT /replies/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to update reply`.
    pub async fn update(&self, id: &str, content: &str) -> Result<Reply, ApiError> {
        let path = format!("/replies/{}", segment(id));
        let request = self
            .client
            .request(Method::PUT, &path, Auth::Bearer)
            .json(&ReplyRequest { content });
        self.client.send_json(request, "Failed to update reply").await
    }

    /// `DELETE /replies/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to delete reply`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/replies/{}", segment(id));
        let request = self.client.request(Method::DELETE, &path, Auth::Bearer);
        self.client.send_empty(request, "Failed to delete reply").await
    }
}
