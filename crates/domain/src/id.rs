//! Typed identifier newtypes.
//!
//! Catalog records carry stable integer keys; records created at runtime
//! get random UUIDs.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInputError, MaisonError, NotFoundError};

macro_rules! define_int_id {
    ($(#[doc = $doc:expr])* $name:ident, $entity:literal, $record:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer key.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Parse a key received from a caller (path segment, query value).
            ///
            /// Only an optional sign followed by decimal digits is accepted.
            ///
            /// # Errors
            ///
            /// Returns [`MaisonError::NotFound`] for an integer outside the
            /// key range, and
            /// [`InvalidInputError::MalformedId`] for anything that is not
            /// an integer.
            pub fn parse(raw: &str) -> Result<Self, MaisonError> {
                raw.parse().map_err(|err: ParseIntError| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NotFoundError {
                        entity: $record,
                        id: raw.to_string(),
                    }
                    .into(),
                    _ => InvalidInputError::MalformedId {
                        entity: $entity,
                        value: raw.to_string(),
                    }
                    .into(),
                })
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

macro_rules! define_uuid_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_int_id!(
    /// Primary key of a [`Service`](crate::service::Service).
    ServiceId,
    "service",
    "Service"
);

define_int_id!(
    /// Primary key of an [`Agency`](crate::agency::Agency).
    AgencyId,
    "agency",
    "Agency"
);

define_uuid_id!(
    /// Unique identifier for a [`QuoteRequest`](crate::quote_request::QuoteRequest).
    QuoteRequestId
);

define_uuid_id!(
    /// Unique identifier for an [`Event`](crate::event::Event).
    EventId
);
