//! Event bus port: publish/subscribe for domain events.

use std::future::Future;

use maisonci_domain::error::MaisonError;
use maisonci_domain::event::Event;

/// Publishes domain events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), MaisonError>> + Send;
}
