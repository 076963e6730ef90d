//! Quote request service: intake of customer leads.

use std::future::Future;

use maisonci_domain::error::MaisonError;
use maisonci_domain::event::{Event, EventKind};
use maisonci_domain::id::QuoteRequestId;
use maisonci_domain::quote_request::{NewQuoteRequest, QuoteRequest};
use maisonci_domain::time::{Clock, now};

use crate::ports::{EventPublisher, QuoteRequestRepository, QuoteRequestSubmitter};

/// Application service that validates, stamps and stores quote requests.
///
/// Every stored request is announced on the event publisher so that cached
/// quote-request lists can be invalidated.
pub struct QuoteRequestService<R, P> {
    repo: R,
    publisher: P,
    clock: Clock,
}

impl<R, P> QuoteRequestService<R, P>
where
    R: QuoteRequestRepository,
    P: EventPublisher,
{
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self {
            repo,
            publisher,
            clock: now,
        }
    }

    /// Replace the clock used to stamp `created_at` and published events.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Validate `input`, assign a fresh id and timestamp, and store it.
    ///
    /// Nothing is stored when validation fails. There is no deduplication:
    /// identical inputs produce distinct records.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::Validation`] with one entry per invalid field,
    /// or a storage error propagated from the repository.
    pub async fn create_quote_request(
        &self,
        input: NewQuoteRequest,
    ) -> Result<QuoteRequest, MaisonError> {
        let request = input
            .accept(QuoteRequestId::new(), (self.clock)())
            .inspect_err(|err| tracing::warn!(error = %err, "rejected quote request"))?;
        let stored = self.repo.create(request).await?;
        tracing::info!(id = %stored.id, service = %stored.service, "quote request recorded");

        let event = Event::at(
            EventKind::QuoteRequestCreated {
                quote_request_id: stored.id,
                service: stored.service.clone(),
            },
            (self.clock)(),
        );
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, id = %stored.id, "failed to publish quote request event");
        }
        Ok(stored)
    }

    /// List every stored quote request, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_quote_requests(&self) -> Result<Vec<QuoteRequest>, MaisonError> {
        self.repo.get_all().await
    }
}

impl<R, P> QuoteRequestSubmitter for QuoteRequestService<R, P>
where
    R: QuoteRequestRepository + Send + Sync,
    P: EventPublisher + Send + Sync,
{
    fn submit(
        &self,
        input: NewQuoteRequest,
    ) -> impl Future<Output = Result<QuoteRequest, MaisonError>> + Send {
        self.create_quote_request(input)
    }
}
