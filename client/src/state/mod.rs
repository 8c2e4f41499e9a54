//! Plain state structs held in `RwSignal`s by [`crate::app::AppContext`].

pub mod auth;
pub mod ui;
