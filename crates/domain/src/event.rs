//! Event: an immutable record of something that happened.
//!
//! Observers (cached quote-request lists, notification hooks) subscribe to
//! these to know when their view is stale.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, QuoteRequestId};
use crate::time::{Timestamp, now};

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A quote request passed validation and was stored.
    QuoteRequestCreated {
        quote_request_id: QuoteRequestId,
        service: String,
    },
}

/// A timestamped [`EventKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self::at(kind, now())
    }

    /// Create an event stamped with `timestamp`.
    #[must_use]
    pub fn at(kind: EventKind, timestamp: Timestamp) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp,
        }
    }

    /// Id of the quote request this event is about, if any.
    #[must_use]
    pub fn quote_request_id(&self) -> Option<QuoteRequestId> {
        match &self.kind {
            EventKind::QuoteRequestCreated {
                quote_request_id, ..
            } => Some(*quote_request_id),
        }
    }
}
