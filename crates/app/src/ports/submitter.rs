//! Submission port: where the quote form sends a completed request.
//!
//! Implemented in-process by
//! [`QuoteRequestService`](crate::services::quote_request_service::QuoteRequestService);
//! a remote client would implement it over HTTP.

use std::future::Future;

use maisonci_domain::error::MaisonError;
use maisonci_domain::quote_request::{NewQuoteRequest, QuoteRequest};

/// Accepts a quote request on behalf of the quote form.
pub trait QuoteRequestSubmitter {
    /// Submit the input; the returned record is the stored request.
    fn submit(
        &self,
        input: NewQuoteRequest,
    ) -> impl Future<Output = Result<QuoteRequest, MaisonError>> + Send;
}
