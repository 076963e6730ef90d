//! Agency filter: the search/filter contract of the partner directory.
//!
//! An agency is kept when all three criteria hold:
//! - the search term is empty, or is contained case-insensitively in the
//!   agency's `nom` or `description`;
//! - the selected city is [`Selection::All`] or equals `ville` exactly;
//! - the selected service is [`Selection::All`] or is an element of
//!   `services` (exact match).
//!
//! Filtering preserves input order and has no side effects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::agency::Agency;

/// Sentinel used by UI controls to mean "no restriction".
pub const ALL: &str = "all";

/// Either every value or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a UI control value: only [`ALL`] means [`Selection::All`].
    ///
    /// Any other value, the empty string included, selects exactly that value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    fn admits(&self, predicate: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => predicate(value),
        }
    }
}

impl From<Option<&str>> for Selection {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::All, Self::parse)
    }
}

/// Criteria applied to the agency list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgencyFilter {
    search_term: String,
    city: Selection,
    service: Selection,
}

impl AgencyFilter {
    /// A filter that keeps every agency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over `nom` and `description`.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn city(mut self, city: Selection) -> Self {
        self.city = city;
        self
    }

    #[must_use]
    pub fn service(mut self, service: Selection) -> Self {
        self.service = service;
        self
    }

    /// Whether no criterion restricts the result.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty() && self.city == Selection::All && self.service == Selection::All
    }

    /// Evaluate the criteria against one agency.
    #[must_use]
    pub fn matches(&self, agency: &Agency) -> bool {
        self.matches_search(agency)
            && self.city.admits(|city| agency.ville == city)
            && self.service.admits(|service| agency.offers(service))
    }

    fn matches_search(&self, agency: &Agency) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        agency.nom.to_lowercase().contains(&needle)
            || agency.description.to_lowercase().contains(&needle)
    }

    /// Borrowing form: the matching agencies, in input order.
    #[must_use]
    pub fn apply<'a>(&self, agencies: &'a [Agency]) -> Vec<&'a Agency> {
        agencies.iter().filter(|agency| self.matches(agency)).collect()
    }

    /// Owning form: keep the matching agencies, in input order.
    #[must_use]
    pub fn retain(&self, mut agencies: Vec<Agency>) -> Vec<Agency> {
        agencies.retain(|agency| self.matches(agency));
        agencies
    }
}

/// Values available to populate the city and service filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyFacets {
    /// Distinct cities, sorted.
    pub villes: Vec<String>,
    /// Distinct offered service names, sorted.
    pub services: Vec<String>,
}

impl AgencyFacets {
    /// Project the full agency list onto its distinct cities and services.
    #[must_use]
    pub fn from_agencies(agencies: &[Agency]) -> Self {
        let villes: BTreeSet<&str> = agencies.iter().map(|a| a.ville.as_str()).collect();
        let services: BTreeSet<&str> = agencies
            .iter()
            .flat_map(|a| a.services.iter().map(String::as_str))
            .collect();
        Self {
            villes: villes.into_iter().map(str::to_string).collect(),
            services: services.into_iter().map(str::to_string).collect(),
        }
    }
}
