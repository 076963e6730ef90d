//! Agency: a partner provider offering one or more services in a city.

use serde::{Deserialize, Serialize};

use crate::error::{MaisonError, ValidationError, ValidationErrors};
use crate::id::AgencyId;

/// A partner agency listed in the directory.
///
/// `services` holds free-text service names. They share a vocabulary with
/// [`Service::nom`](crate::service::Service) but are not foreign keys: an
/// agency may list a name that has no matching catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    pub id: AgencyId,
    pub nom: String,
    pub ville: String,
    pub services: Vec<String>,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horaires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Agency {
    /// Create a builder for constructing an [`Agency`].
    #[must_use]
    pub fn builder() -> AgencyBuilder {
        AgencyBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::Validation`] listing every blank required
    /// field (`nom`, `ville`).
    pub fn validate(&self) -> Result<(), MaisonError> {
        let mut errors = ValidationErrors::new();
        if self.nom.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
        }
        if self.ville.trim().is_empty() {
            errors.push(ValidationError::EmptyCity);
        }
        errors.into_result()?;
        Ok(())
    }

    /// Whether `service` is listed verbatim in [`Agency::services`].
    #[must_use]
    pub fn offers(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }
}

/// Step-by-step builder for [`Agency`].
#[derive(Debug, Default)]
pub struct AgencyBuilder {
    id: Option<AgencyId>,
    nom: Option<String>,
    ville: Option<String>,
    services: Vec<String>,
    description: Option<String>,
    image: Option<String>,
    horaires: Option<String>,
    telephone: Option<String>,
    email: Option<String>,
}

impl AgencyBuilder {
    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(AgencyId::new(id));
        self
    }

    #[must_use]
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = Some(nom.into());
        self
    }

    #[must_use]
    pub fn ville(mut self, ville: impl Into<String>) -> Self {
        self.ville = Some(ville.into());
        self
    }

    /// Append one offered service name.
    #[must_use]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.services.push(service.into());
        self
    }

    /// Replace the offered service names.
    #[must_use]
    pub fn services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn horaires(mut self, horaires: impl Into<String>) -> Self {
        self.horaires = Some(horaires.into());
        self
    }

    #[must_use]
    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = Some(telephone.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Consume the builder, validate, and return an [`Agency`].
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::Validation`] if `nom` or `ville` is missing.
    pub fn build(self) -> Result<Agency, MaisonError> {
        let agency = Agency {
            id: self.id.unwrap_or(AgencyId::new(0)),
            nom: self.nom.unwrap_or_default(),
            ville: self.ville.unwrap_or_default(),
            services: self.services,
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            horaires: self.horaires,
            telephone: self.telephone,
            email: self.email,
        };
        agency.validate()?;
        Ok(agency)
    }
}
