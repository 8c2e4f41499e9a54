//! Local UI chrome state: the toast stack.
//!
//! DESIGN
//! ======
//! Toasts carry a monotonically increasing id so a delayed dismissal removes
//! exactly the toast it was scheduled for, even if others came and went.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use peerpoint::forum::Notice;

/// How long a toast stays up.
pub const TOAST_TTL_MS: u64 = 4000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast; returns its id for later dismissal.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.items.push(Toast { id: self.next_id, notice });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
