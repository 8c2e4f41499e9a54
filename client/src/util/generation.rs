//! Tracks which load a page is waiting on so late responses can be dropped.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

/// Monotonic ticket counter. Each [`begin`](Self::begin) supersedes every
/// earlier ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}
