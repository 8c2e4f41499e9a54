//! # peerpoint
//!
//! Client library for the PeerPoint student Q&A forum.
//!
//! SYSTEM CONTEXT
//! ==============
//! The forum backend is a plain REST service. This crate is everything that
//! sits between a front end (the Leptos browser UI in `client/`, or the
//! `peerpoint` CLI) and that service:
//!
//! - `api`: request/response functions grouped by resource.
//! - `session`: the authenticated identity, its token, and where it persists.
//! - `refresh`: payload-free change notifications between views.
//! - `forum`: framework-agnostic view-models for the feed and thread pages.

pub mod api;
pub mod config;
pub mod error;
pub mod forum;
pub mod refresh;
pub mod session;
pub mod types;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ForumError, StorageError};
pub use refresh::RefreshBus;
pub use session::{MemoryStorage, SessionStorage, SessionStore};
