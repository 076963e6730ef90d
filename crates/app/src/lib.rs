//! # maisonci-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceCatalog`: read access to the service catalog
//!   - `AgencyCatalog`: read access to the agency directory
//!   - `QuoteRequestRepository`: append & list quote requests
//!   - `EventPublisher`: broadcast domain events
//! - Define **driving/inbound ports** as use-case structs/traits:
//!   - `CatalogService`: list, look up, search and facet the catalog
//!   - `QuoteRequestService`: validate, stamp, store and list quote requests
//!   - `QuoteRequestSubmitter`: what the quote form submits to
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Model the **quote form** submission flow as a state machine
//!
//! ## Dependency rule
//! Depends on `maisonci-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod quote_form;
pub mod services;
