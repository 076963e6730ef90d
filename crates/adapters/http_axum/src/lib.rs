//! # maisonci-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API consumed by the marketplace front-end
//!   (`/api/services`, `/api/agencies`, `/api/quote-requests`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `maisonci-app` (for port traits and services) and `maisonci-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
