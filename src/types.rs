//! Wire DTOs for the forum REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON. Timestamps stay strings;
//! only the formatting helpers in `forum::format` interpret them. The server
//! owns every value here, so nothing is validated beyond deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Body returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token scheme reported by the server (normally `"Bearer"`).
    #[serde(rename = "type", default)]
    pub token_type: String,
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AuthResponse {
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// A community (subject area) grouping questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question_count: u64,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub user_name: String,
    pub page_id: String,
    pub page_name: String,
    pub reply_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub question_id: String,
    pub user_id: String,
    pub user_name: String,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for question create and update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub page_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReplyRequest<'a> {
    pub content: &'a str,
}
