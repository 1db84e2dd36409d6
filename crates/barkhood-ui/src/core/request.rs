//! Generation counter for discarding late async responses.
//!
//! # Design
//! - A call site takes a ticket before it starts a request.
//! - Unmounting, or starting a newer request, invalidates older tickets.
//! - A response is applied only while its ticket is still current.

use std::cell::Cell;

/// Proof of which request generation a response belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Per-call-site generation counter.
#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: Cell<u64>,
}

impl RequestGuard {
    /// Start a new generation and return its ticket. Older tickets go stale.
    #[must_use]
    pub fn issue(&self) -> RequestTicket {
        self.bump();
        RequestTicket(self.generation.get())
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.bump();
    }

    /// Whether a response carrying `ticket` may still be applied.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.get() == ticket.0
    }

    fn bump(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}
