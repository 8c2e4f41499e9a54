//! Framework-agnostic view-models for the forum pages.
//!
//! DESIGN
//! ======
//! Pages hold these as plain values (inside a signal in the browser, on the
//! stack in the CLI) and call their async actions. Each action takes the
//! session store and refresh bus as arguments; there is no ambient lookup.

pub mod feed;
pub mod format;
pub mod notice;
pub mod thread;

pub use feed::{ALL_COMMUNITIES, CommunityFeed, HomeFeed, QuestionDraft};
pub use notice::{Notice, NoticeKind};
pub use thread::QuestionThread;
