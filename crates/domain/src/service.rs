//! Service: a category of home-service offering (cleaning, childcare, …).

use serde::{Deserialize, Serialize};

use crate::error::{MaisonError, ValidationError};
use crate::id::ServiceId;

/// A home-service category listed in the catalog.
///
/// `icone` is a symbolic tag naming the icon a UI should display
/// (e.g. `Sparkles`, `Baby`); it carries no rendering logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub nom: String,
    pub description: String,
    pub icone: String,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::Validation`] when `nom` is blank.
    pub fn validate(&self) -> Result<(), MaisonError> {
        if self.nom.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    nom: Option<String>,
    description: Option<String>,
    icone: Option<String>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(ServiceId::new(id));
        self
    }

    #[must_use]
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = Some(nom.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn icone(mut self, icone: impl Into<String>) -> Self {
        self.icone = Some(icone.into());
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// A missing `id` defaults to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::Validation`] if `nom` is missing or blank.
    pub fn build(self) -> Result<Service, MaisonError> {
        let service = Service {
            id: self.id.unwrap_or(ServiceId::new(0)),
            nom: self.nom.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            icone: self.icone.unwrap_or_default(),
        };
        service.validate()?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_service_when_name_provided() {
        let service = Service::builder()
            .id(3)
            .nom("Jardinage")
            .icone("TreeDeciduous")
            .build()
            .unwrap();
        assert_eq!(service.id, ServiceId::new(3));
        assert_eq!(service.nom, "Jardinage");
        assert!(service.description.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = Service::builder().id(1).nom("   ").build();
        assert!(matches!(result, Err(MaisonError::Validation(_))));
    }

    #[test]
    fn should_serialize_with_catalog_field_names() {
        let service = Service::builder()
            .id(1)
            .nom("Ménage à domicile")
            .description("Service complet")
            .icone("Sparkles")
            .build()
            .unwrap();
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "nom": "Ménage à domicile",
                "description": "Service complet",
                "icone": "Sparkles",
            })
        );
    }
}
