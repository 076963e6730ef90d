//! # maisonci-domain
//!
//! Pure domain model for the maisonci home-services marketplace.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Services** (categories of home-service offering)
//! - Define **Agencies** (partner providers offering services in a city)
//! - Define **Quote requests** (customer leads) and their validation rules
//! - Define the **Catalog** (the read-only collection of services and agencies)
//! - Define the **agency filter** used to search the partner directory
//! - Define **Events** emitted when quote requests are recorded
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod agency;
pub mod agency_filter;
pub mod catalog;
pub mod event;
pub mod quote_request;
pub mod service;
