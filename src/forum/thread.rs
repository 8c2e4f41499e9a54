//! A question with its replies, and the actions the detail view offers.
//!
//! Every mutation follows the same order: login guard, client-side checks,
//! one API call, local list update, refresh broadcast, then a best-effort
//! reload so server-owned counts (`replyCount`) catch up.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use futures::future::try_join;

use crate::api::ApiClient;
use crate::error::ForumError;
use crate::refresh::RefreshBus;
use crate::session::{Session, SessionStorage, SessionStore};
use crate::types::{Question, Reply};

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionThread {
    pub question: Question,
    pub replies: Vec<Reply>,
}

impl QuestionThread {
    /// Fetch the question and its replies.
    ///
    /// # Errors
    ///
    /// Fails if either request fails; the view shows "Question not found".
    pub async fn load(api: &ApiClient, question_id: &str) -> Result<Self, ForumError> {
        let (question, replies) = try_join(api.questions().get(question_id), api.replies().by_question(question_id)).await?;
        Ok(Self { question, replies })
    }

    /// Only the author sees the delete control on the question.
    #[must_use]
    pub fn can_delete_question(&self, session: Option<&Session>) -> bool {
        session.is_some_and(|s| s.user_id() == self.question.user_id)
    }

    /// Only the author sees the delete control on a reply.
    #[must_use]
    pub fn can_delete_reply(reply: &Reply, session: Option<&Session>) -> bool {
        session.is_some_and(|s| s.user_id() == reply.user_id)
    }

    /// Drop `reply_id` from the local list; returns the removed reply.
    pub fn remove_reply(&mut self, reply_id: &str) -> Option<Reply> {
        let index = self.replies.iter().position(|r| r.id == reply_id)?;
        Some(self.replies.remove(index))
    }

    /// Post a reply, append it locally, broadcast, then reload.
    ///
    /// # Errors
    ///
    /// [`ForumError::LoginRequired`] when signed out, `Reply cannot be empty`
    /// for blank content, or the API error from create.
    pub async fn post_reply<S: SessionStorage>(
        &mut self,
        session: &SessionStore<S>,
        bus: &RefreshBus,
        content: &str,
    ) -> Result<Reply, ForumError> {
        if !session.is_authenticated() {
            return Err(ForumError::LoginRequired);
        }
        let content = validate_reply(content)?;
        let reply = session.api().replies().create(&self.question.id, content).await?;
        tracing::info!(reply_id = %reply.id, question_id = %self.question.id, "reply posted");
        self.replies.push(reply.clone());
        bus.notify();
        self.reload(session.api()).await;
        Ok(reply)
    }

    /// Delete one reply, remove exactly it from the local list, broadcast,
    /// then reload.
    ///
    /// # Errors
    ///
    /// [`ForumError::LoginRequired`] when signed out, or the API error from
    /// delete (the local list is untouched in that case).
    pub async fn delete_reply<S: SessionStorage>(
        &mut self,
        session: &SessionStore<S>,
        bus: &RefreshBus,
        reply_id: &str,
    ) -> Result<(), ForumError> {
        if !session.is_authenticated() {
            return Err(ForumError::LoginRequired);
        }
        session.api().replies().delete(reply_id).await?;
        tracing::info!(%reply_id, question_id = %self.question.id, "reply deleted");
        self.remove_reply(reply_id);
        bus.notify();
        self.reload(session.api()).await;
        Ok(())
    }

    /// Delete the question itself. The caller navigates home afterwards.
    ///
    /// # Errors
    ///
    /// [`ForumError::LoginRequired`] when signed out, or the API error.
    pub async fn delete_question<S: SessionStorage>(
        &self,
        session: &SessionStore<S>,
        bus: &RefreshBus,
    ) -> Result<(), ForumError> {
        if !session.is_authenticated() {
            return Err(ForumError::LoginRequired);
        }
        session.api().questions().delete(&self.question.id).await?;
        tracing::info!(question_id = %self.question.id, "question deleted");
        bus.notify();
        Ok(())
    }

    async fn reload(&mut self, api: &ApiClient) {
        let question_id = self.question.id.clone();
        match Self::load(api, &question_id).await {
            Ok(fresh) => *self = fresh,
            Err(e) => tracing::warn!(%question_id, error = %e, "thread reload failed"),
        }
    }
}

/// Trimmed reply content.
///
/// # Errors
///
/// `Reply cannot be empty` for blank input.
pub fn validate_reply(content: &str) -> Result<&str, ForumError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ForumError::Validation("Reply cannot be empty"));
    }
    Ok(content)
}
