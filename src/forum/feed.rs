//! Question feeds: the home feed across communities and a single
//! community's page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home route shows the sidebar of communities plus "Latest Doubts"; a
//! community route shows one page header, its questions, and the post dialog.
//! Both re-load from the server after any mutation; nothing here caches.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use futures::future::{join_all, try_join};

use super::format::parse_timestamp;
use crate::api::ApiClient;
use crate::error::ForumError;
use crate::refresh::RefreshBus;
use crate::session::{SessionStorage, SessionStore};
use crate::types::{Page, Question};

/// Sidebar label that selects every community.
pub const ALL_COMMUNITIES: &str = "All";

// =============================================================================
// HOME FEED
// =============================================================================

/// Communities plus the first page of each one's questions, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeFeed {
    pub communities: Vec<Page>,
    pub questions: Vec<Question>,
}

impl HomeFeed {
    /// Load the community list, then every community's first page at once.
    ///
    /// A community whose questions fail to load is skipped with a warning so
    /// one bad page doesn't blank the feed.
    ///
    /// # Errors
    ///
    /// Fails only when the community list itself cannot be fetched.
    pub async fn load(api: &ApiClient) -> Result<Self, ForumError> {
        let communities = api.pages().list().await?;
        let questions_api = api.questions();
        let batches = join_all(communities.iter().map(|page| questions_api.by_page(&page.name))).await;
        let mut questions = Vec::new();
        for (page, batch) in communities.iter().zip(batches) {
            match batch {
                Ok(mut batch) => questions.append(&mut batch),
                Err(e) => tracing::warn!(page = %page.name, error = %e, "skipping community in home feed"),
            }
        }
        Ok(Self::assemble(communities, questions))
    }

    /// Build a feed from already-fetched data, ordering questions newest first.
    #[must_use]
    pub fn assemble(communities: Vec<Page>, mut questions: Vec<Question>) -> Self {
        questions.sort_by(|a, b| match (parse_timestamp(&a.created_at), parse_timestamp(&b.created_at)) {
            (Some(a_at), Some(b_at)) => b_at.cmp(&a_at),
            _ => b.created_at.cmp(&a.created_at),
        });
        Self { communities, questions }
    }

    /// Questions visible under the sidebar selection.
    #[must_use]
    pub fn filtered(&self, community: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| community == ALL_COMMUNITIES || q.page_name == community)
            .collect()
    }

    /// Subtitle under "Latest Doubts".
    #[must_use]
    pub fn subtitle(community: &str) -> String {
        if community == ALL_COMMUNITIES {
            "Explore questions from all communities".to_owned()
        } else {
            format!("Questions from {community} community")
        }
    }
}

// =============================================================================
// COMMUNITY FEED
// =============================================================================

/// One community page and its questions as the server returned them.
#[derive(Clone, Debug, PartialEq)]
pub struct CommunityFeed {
    pub page: Page,
    pub questions: Vec<Question>,
}

impl CommunityFeed {
    /// Fetch the page by name and its first page of questions.
    ///
    /// # Errors
    ///
    /// Fails if either request fails; the view shows "Page not found".
    pub async fn load(api: &ApiClient, subject: &str) -> Result<Self, ForumError> {
        let (page, questions) = try_join(api.pages().by_name(subject), api.questions().by_page(subject)).await?;
        Ok(Self { page, questions })
    }

    /// Post a question into this community, then reload and broadcast.
    ///
    /// The login check runs before validation and before any request.
    ///
    /// # Errors
    ///
    /// [`ForumError::LoginRequired`] when signed out, [`ForumError::Validation`]
    /// for a blank draft, or the API error from create. A failed reload keeps
    /// the old list with the new question prepended.
    pub async fn post_question<S: SessionStorage>(
        &mut self,
        session: &SessionStore<S>,
        bus: &RefreshBus,
        draft: &QuestionDraft,
    ) -> Result<Question, ForumError> {
        if !session.is_authenticated() {
            return Err(ForumError::LoginRequired);
        }
        let (title, description) = draft.validate()?;
        let created = session.api().questions().create(title, description, &self.page.id).await?;
        tracing::info!(question_id = %created.id, page = %self.page.name, "question posted");
        bus.notify();
        let name = self.page.name.clone();
        match Self::load(session.api(), &name).await {
            Ok(fresh) => *self = fresh,
            Err(e) => {
                tracing::warn!(page = %name, error = %e, "reload after post failed");
                self.questions.insert(0, created.clone());
            }
        }
        Ok(created)
    }

    /// `"12 questions • Active community"`.
    #[must_use]
    pub fn stats_line(&self) -> String {
        format!("{} questions • Active community", self.page.question_count)
    }
}

// =============================================================================
// DRAFTS
// =============================================================================

/// Contents of the post-question dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: String,
    pub description: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }

    /// Trimmed `(title, description)`.
    ///
    /// # Errors
    ///
    /// `Please fill in all fields` when either is blank.
    pub fn validate(&self) -> Result<(&str, &str), ForumError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(ForumError::Validation("Please fill in all fields"));
        }
        Ok((title, description))
    }
}
