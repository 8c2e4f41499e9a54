//! Session lifecycle: who is signed in, with which token, and where that
//! survives a restart.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is the only writer of the identity and of the token slot
//! the [`crate::ApiClient`] reads. Views receive the store (or a snapshot of
//! its [`Session`]) explicitly; nothing looks it up globally.

pub mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{Session, SessionStore, TOKEN_KEY, USER_KEY};
