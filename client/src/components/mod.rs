//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render forum chrome and cards. Those that need shared state take
//! an [`crate::app::AppContext`] prop; the rest are pure functions of their
//! props.

pub mod community_sidebar;
pub mod confirm_dialog;
pub mod doubt_card;
pub mod header;
pub mod particle_background;
pub mod post_button;
pub mod post_question_dialog;
pub mod splash_screen;
pub mod toast;
