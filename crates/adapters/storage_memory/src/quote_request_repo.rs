//! In-memory implementation of [`QuoteRequestRepository`].

use std::future::Future;
use std::sync::{Arc, RwLock};

use maisonci_app::ports::QuoteRequestRepository;
use maisonci_domain::error::MaisonError;
use maisonci_domain::quote_request::QuoteRequest;

use crate::error::StorageError;

/// Append-only quote-request log shared behind a lock.
///
/// Writers append under the write lock, so concurrent creates are
/// serialized and readers never observe a partially appended record.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuoteRequestRepository {
    log: Arc<RwLock<Vec<QuoteRequest>>>,
}

impl MemoryQuoteRequestRepository {
    #[must_use]
    pub fn new(log: Arc<RwLock<Vec<QuoteRequest>>>) -> Self {
        Self { log }
    }

    fn append(&self, request: &QuoteRequest) -> Result<(), StorageError> {
        let mut log = self.log.write().map_err(|_| StorageError::Poisoned)?;
        log.push(request.clone());
        tracing::debug!(id = %request.id, total = log.len(), "appended quote request");
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<QuoteRequest>, StorageError> {
        let log = self.log.read().map_err(|_| StorageError::Poisoned)?;
        Ok(log.clone())
    }
}

impl QuoteRequestRepository for MemoryQuoteRequestRepository {
    fn create(
        &self,
        request: QuoteRequest,
    ) -> impl Future<Output = Result<QuoteRequest, MaisonError>> + Send {
        let result = self.append(&request).map(|()| request);
        async move { result.map_err(MaisonError::from) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<QuoteRequest>, MaisonError>> + Send {
        let result = self.snapshot();
        async move { result.map_err(MaisonError::from) }
    }
}
