//! Authenticated session store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, PoisonError, RwLock};

use super::storage::SessionStorage;
use crate::api::{ApiClient, TokenSlot};
use crate::error::ApiError;
use crate::types::{AuthResponse, User};

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user.
pub const USER_KEY: &str = "user";

/// The signed-in identity plus its bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.user.name
    }
}

/// Holds the current session in memory and mirrors it into `S`.
///
/// Clones share state, so the browser UI can hand the same store to several
/// views.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    api: ApiClient,
    token: TokenSlot,
    storage: S,
    current: Arc<RwLock<Option<Session>>>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Build a store over `storage`, restoring a persisted session when both
    /// keys are present and the user parses. Anything else starts signed out.
    ///
    /// No expiry check is done here; a stale token surfaces as a 401 on the
    /// next authenticated call.
    pub fn restore(api: ApiClient, storage: S) -> Self {
        let token = api.token_slot();
        let restored = load_session(&storage);
        token.set(restored.as_ref().map(|s| s.token.clone()));
        if let Some(session) = &restored {
            tracing::debug!(user_id = %session.user.id, "session restored");
        }
        Self { api, token, storage, current: Arc::new(RwLock::new(restored)) }
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the store is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let auth = self.api.auth().login(email, password).await?;
        self.establish(&auth);
        Ok(auth)
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the store is left as it was.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let auth = self.api.auth().register(name, email, password).await?;
        self.establish(&auth);
        Ok(auth)
    }

    /// Forget the session in memory and in storage. Safe to call when signed out.
    pub fn logout(&self) {
        let was_signed_in = self.write(None);
        self.token.set(None);
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "failed to clear persisted session");
            }
        }
        if was_signed_in {
            tracing::info!("signed out");
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session().map(|s| s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    /// The client this store authenticates.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn establish(&self, auth: &AuthResponse) {
        // Memory first: a storage failure must not undo a successful login.
        let session = Session { user: auth.user(), token: auth.token.clone() };
        self.token.set(Some(session.token.clone()));
        self.write(Some(session));

        if let Err(e) = self.storage.set(TOKEN_KEY, &auth.token) {
            tracing::warn!(error = %e, "failed to persist session token");
        }
        match serde_json::to_string(auth) {
            Ok(user) => {
                if let Err(e) = self.storage.set(USER_KEY, &user) {
                    tracing::warn!(error = %e, "failed to persist session user");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize session user"),
        }
        tracing::info!(user_id = %auth.id, "signed in");
    }

    /// Replace the in-memory session; returns whether one was present.
    fn write(&self, session: Option<Session>) -> bool {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, session).is_some()
    }
}

/// Read both keys; either missing or a malformed user means signed out.
fn load_session(storage: &impl SessionStorage) -> Option<Session> {
    let token = match storage.get(TOKEN_KEY) {
        Ok(token) => token.filter(|t| !t.is_empty())?,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted token");
            return None;
        }
    };
    let raw_user = match storage.get(USER_KEY) {
        Ok(user) => user?,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted user");
            return None;
        }
    };
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Some(Session { user, token }),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed persisted user");
            None
        }
    }
}
