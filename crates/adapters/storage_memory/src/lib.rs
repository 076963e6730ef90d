//! # maisonci-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the storage port traits defined in `maisonci-app::ports::storage`
//! - Build the catalog once at startup, from the built-in seed or a JSON file
//! - Keep the append-only quote-request log for the lifetime of the process
//!
//! Nothing is written to disk: quote requests are lost on restart.
//!
//! ## Dependency rule
//! Depends on `maisonci-app` (for port traits) and `maisonci-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod catalog_repo;
pub mod error;
pub mod quote_request_repo;
pub mod seed;
pub mod store;

pub use catalog_repo::{MemoryAgencyCatalog, MemoryServiceCatalog};
pub use error::StorageError;
pub use quote_request_repo::MemoryQuoteRequestRepository;
pub use store::{Config, Store};
