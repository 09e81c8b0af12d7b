//! Upload request bookkeeping.
//!
//! At most one upload is outstanding per widget. Each request gets a ticket
//! from a generation counter; a reset bumps the generation so the pending
//! response, once it lands, is recognised as stale and dropped.

/// Token identifying one upload request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: u64,
    in_flight: Option<RequestTicket>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, unless one is still outstanding.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        self.generation += 1;
        let ticket = RequestTicket(self.generation);
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Mark any outstanding request as stale.
    ///
    /// The request still occupies the in-flight slot until it settles.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Record that `ticket` settled. Returns whether its result may be applied.
    pub fn settle(&mut self, ticket: RequestTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
        self.is_current(ticket)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// A request is outstanding, stale or not.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// A request is outstanding and its result is still wanted.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some_and(|ticket| self.is_current(ticket))
    }
}
