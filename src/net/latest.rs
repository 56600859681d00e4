//! Out-of-order response suppression.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests cannot be cancelled once issued. When a view re-requests the
//! same logical resource (next page, different post id), an older response
//! may still arrive afterwards. Each request takes a ticket; only the most
//! recently issued ticket is allowed to write into view state.

#[cfg(test)]
#[path = "latest_test.rs"]
mod latest_test;

/// Identity of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the newest request issued for one logical resource slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LatestRequest {
    issued: u64,
}

impl LatestRequest {
    /// Issue a ticket, superseding every earlier one.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Whether a response carrying `ticket` is still current.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Invalidate all outstanding tickets without issuing a new one.
    pub fn supersede(&mut self) {
        self.issued += 1;
    }
}
