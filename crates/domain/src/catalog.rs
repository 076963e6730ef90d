//! Catalog: the read-only collection of services and agencies.
//!
//! A catalog is built once at startup and never mutated afterwards.
//! Construction checks that ids are unique and every record is valid.

use std::collections::HashSet;

use serde::Deserialize;

use crate::agency::Agency;
use crate::error::MaisonError;
use crate::id::{AgencyId, ServiceId};
use crate::service::Service;

/// Reasons a catalog is refused at load time.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate service id {0}")]
    DuplicateServiceId(ServiceId),

    #[error("duplicate agency id {0}")]
    DuplicateAgencyId(AgencyId),

    #[error("invalid service {id}")]
    InvalidService {
        id: ServiceId,
        #[source]
        source: MaisonError,
    },

    #[error("invalid agency {id}")]
    InvalidAgency {
        id: AgencyId,
        #[source]
        source: MaisonError,
    },
}

/// Validated services and agencies, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<Service>,
    agencies: Vec<Agency>,
}

impl Catalog {
    /// Build a catalog, refusing duplicate ids and invalid records.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] encountered, services first.
    pub fn new(services: Vec<Service>, agencies: Vec<Agency>) -> Result<Self, CatalogError> {
        let mut service_ids = HashSet::with_capacity(services.len());
        for service in &services {
            if !service_ids.insert(service.id) {
                return Err(CatalogError::DuplicateServiceId(service.id));
            }
            service
                .validate()
                .map_err(|source| CatalogError::InvalidService {
                    id: service.id,
                    source,
                })?;
        }

        let mut agency_ids = HashSet::with_capacity(agencies.len());
        for agency in &agencies {
            if !agency_ids.insert(agency.id) {
                return Err(CatalogError::DuplicateAgencyId(agency.id));
            }
            agency
                .validate()
                .map_err(|source| CatalogError::InvalidAgency {
                    id: agency.id,
                    source,
                })?;
        }

        Ok(Self { services, agencies })
    }

    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    #[must_use]
    pub fn agencies(&self) -> &[Agency] {
        &self.agencies
    }

    #[must_use]
    pub fn service(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn agency(&self, id: AgencyId) -> Option<&Agency> {
        self.agencies.iter().find(|a| a.id == id)
    }
}

/// Serialized catalog layout, as found in seed files.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSeed {
    pub services: Vec<Service>,
    pub agencies: Vec<Agency>,
}

impl TryFrom<CatalogSeed> for Catalog {
    type Error = CatalogError;

    fn try_from(seed: CatalogSeed) -> Result<Self, Self::Error> {
        Self::new(seed.services, seed.agencies)
    }
}
