//! `/questions` endpoints.
//!
//! Reads are anonymous; create/update/delete carry the bearer token when the
//! session has one. The server decides who may mutate what.

use reqwest::Method;

use super::{ApiClient, Auth, segment};
use crate::error::ApiError;
use crate::types::{Question, QuestionRequest};

pub struct QuestionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> QuestionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// First page of a community's questions at the configured page size.
    ///
    /// # Errors
    ///
    /// See [`Self::by_page_paged`].
    pub async fn by_page(&self, page_name: &str) -> Result<Vec<Question>, ApiError> {
        self.by_page_paged(page_name, 0, self.client.page_size()).await
    }

    /// `GET /questions/page/name/{name}?page=&size=`.
    ///
    /// The array is returned exactly as the server sent it.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to fetch questions`.
    pub async fn by_page_paged(&self, page_name: &str, page: u32, size: u32) -> Result<Vec<Question>, ApiError> {
        let path = format!("/questions/page/name/{}?page={page}&size={size}", segment(page_name));
        let request = self.client.request(Method::GET, &path, Auth::Anonymous);
        self.client.send_json(request, "Failed to fetch questions").await
    }

    /// `GET /questions/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Question not found`.
    pub async fn get(&self, id: &str) -> Result<Question, ApiError> {
        let path = format!("/questions/{}", segment(id));
        let request = self.client.request(Method::GET, &path, Auth::Anonymous);
        self.client.send_json(request, "Question not found").await
    }

    /// `POST /questions`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to create question`.
    pub async fn create(&self, title: &str, description: &str, page_id: &str) -> Result<Question, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/questions", Auth::Bearer)
            .json(&QuestionRequest { title, description, page_id });
        self.client.send_json(request, "Failed to create question").await
    }

    /// `PUT /questions/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to update question`.
    pub async fn update(&self, id: &str, title: &str, description: &str, page_id: &str) -> Result<Question, ApiError> {
        let path = format!("/questions/{}", segment(id));
        let request = self
            .client
            .request(Method::PUT, &path, Auth::Bearer)
            .json(&QuestionRequest { title, description, page_id });
        self.client.send_json(request, "Failed to update question").await
    }

    /// `DELETE /questions/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with the server's message, or `Failed to delete question`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/questions/{}", segment(id));
        let request = self.client.request(Method::DELETE, &path, Auth::Bearer);
        self.client.send_empty(request, "Failed to delete question").await
    }
}
