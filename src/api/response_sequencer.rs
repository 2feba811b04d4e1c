use serde::{Deserialize, Serialize};
use tracing::debug;

/// Monotonic token attached to an outgoing data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Orders asynchronous responses by request start.
///
/// A response is applied only when its ticket is newer than the last applied
/// one, so a slow old request can never overwrite fresher data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseSequencer {
    next: u64,
    latest_applied: Option<u64>,
}

impl ResponseSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        let ticket = RequestTicket(self.next);
        self.next += 1;
        ticket
    }

    /// Marks `ticket` as applied when it is the freshest seen so far.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 >= self.next {
            debug!(ticket = ticket.0, "rejecting ticket that was never issued");
            return false;
        }
        match self.latest_applied {
            Some(latest) if ticket.0 <= latest => {
                debug!(ticket = ticket.0, latest, "dropping stale response");
                false
            }
            _ => {
                self.latest_applied = Some(ticket.0);
                true
            }
        }
    }

    #[must_use]
    pub fn latest_applied(self) -> Option<RequestTicket> {
        self.latest_applied.map(RequestTicket)
    }

    #[must_use]
    pub fn issued_count(self) -> u64 {
        self.next
    }
}
