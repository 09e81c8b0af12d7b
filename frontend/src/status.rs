//! Status banner state.
//!
//! At most one message is live at a time, across all kinds. Showing a new
//! message purges the previous one; expiry timers carry the message id so a
//! late timer never removes a newer message.

use crate::types::{StatusId, StatusKind, StatusMessage, StatusPlacement};

#[derive(Clone, Debug, Default)]
pub struct StatusBoard {
    next_id: u64,
    current: Option<StatusMessage>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is displayed with a new message.
    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) -> StatusId {
        self.next_id += 1;
        let id = StatusId(self.next_id);
        self.current = Some(StatusMessage {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Remove the message `id` if it is still the one displayed.
    pub fn dismiss(&mut self, id: StatusId) -> bool {
        match &self.current {
            Some(message) if message.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Remove any displayed message.
    pub fn purge(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// The live message if it belongs in `placement`.
    pub fn at(&self, placement: StatusPlacement) -> Option<&StatusMessage> {
        self.current
            .as_ref()
            .filter(|message| message.kind.placement() == placement)
    }
}
