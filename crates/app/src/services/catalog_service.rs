//! Catalog service: read use-cases over services and agencies.

use maisonci_domain::agency::Agency;
use maisonci_domain::agency_filter::{AgencyFacets, AgencyFilter};
use maisonci_domain::error::{MaisonError, NotFoundError};
use maisonci_domain::id::{AgencyId, ServiceId};
use maisonci_domain::service::Service;

use crate::ports::{AgencyCatalog, ServiceCatalog};

/// Application service for the read-only catalog.
pub struct CatalogService<S, A> {
    services: S,
    agencies: A,
}

impl<S: ServiceCatalog, A: AgencyCatalog> CatalogService<S, A> {
    /// Create a new service backed by the given catalogs.
    pub fn new(services: S, agencies: A) -> Self {
        Self { services, agencies }
    }

    /// List every service, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the catalog.
    pub async fn list_services(&self) -> Result<Vec<Service>, MaisonError> {
        let services = self.services.get_all().await?;
        tracing::debug!(count = services.len(), "listed services");
        Ok(services)
    }

    /// Look up a service by key.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::NotFound`] when no service has `id`,
    /// or a storage error from the catalog.
    pub async fn get_service(&self, id: ServiceId) -> Result<Service, MaisonError> {
        self.services.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a service by its textual key.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::InvalidInput`] when `raw` is not an integer,
    /// [`MaisonError::NotFound`] when it overflows the key range,
    /// otherwise the errors of [`CatalogService::get_service`].
    pub async fn get_service_by_key(&self, raw: &str) -> Result<Service, MaisonError> {
        let id = ServiceId::parse(raw)?;
        self.get_service(id).await
    }

    /// List every agency, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the catalog.
    pub async fn list_agencies(&self) -> Result<Vec<Agency>, MaisonError> {
        let agencies = self.agencies.get_all().await?;
        tracing::debug!(count = agencies.len(), "listed agencies");
        Ok(agencies)
    }

    /// Look up an agency by key.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::NotFound`] when no agency has `id`,
    /// or a storage error from the catalog.
    pub async fn get_agency(&self, id: AgencyId) -> Result<Agency, MaisonError> {
        self.agencies.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Agency",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up an agency by its textual key.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::InvalidInput`] when `raw` is not an integer,
    /// [`MaisonError::NotFound`] when it overflows the key range,
    /// otherwise the errors of [`CatalogService::get_agency`].
    pub async fn get_agency_by_key(&self, raw: &str) -> Result<Agency, MaisonError> {
        let id = AgencyId::parse(raw)?;
        self.get_agency(id).await
    }

    /// Agencies matching `filter`, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the catalog.
    pub async fn search_agencies(&self, filter: &AgencyFilter) -> Result<Vec<Agency>, MaisonError> {
        let agencies = self.agencies.get_all().await?;
        if filter.is_unrestricted() {
            return Ok(agencies);
        }
        let total = agencies.len();
        let kept = filter.retain(agencies);
        tracing::debug!(total, kept = kept.len(), ?filter, "filtered agencies");
        Ok(kept)
    }

    /// Distinct cities and service names across the whole directory.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the catalog.
    pub async fn agency_facets(&self) -> Result<AgencyFacets, MaisonError> {
        let agencies = self.agencies.get_all().await?;
        Ok(AgencyFacets::from_agencies(&agencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maisonci_domain::agency_filter::Selection;
    use maisonci_domain::error::InvalidInputError;
    use std::future::Future;

    struct StaticServices(Vec<Service>);
    struct StaticAgencies(Vec<Agency>);

    impl ServiceCatalog for StaticServices {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, MaisonError>> + Send {
            let all = self.0.clone();
            async { Ok(all) }
        }

        fn get_by_id(
            &self,
            id: ServiceId,
        ) -> impl Future<Output = Result<Option<Service>, MaisonError>> + Send {
            let found = self.0.iter().find(|s| s.id == id).cloned();
            async { Ok(found) }
        }
    }

    impl AgencyCatalog for StaticAgencies {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Agency>, MaisonError>> + Send {
            let all = self.0.clone();
            async { Ok(all) }
        }

        fn get_by_id(
            &self,
            id: AgencyId,
        ) -> impl Future<Output = Result<Option<Agency>, MaisonError>> + Send {
            let found = self.0.iter().find(|a| a.id == id).cloned();
            async { Ok(found) }
        }
    }

    fn make_service() -> CatalogService<StaticServices, StaticAgencies> {
        let services = vec![
            Service::builder().id(1).nom("Ménage à domicile").icone("Sparkles").build().unwrap(),
            Service::builder().id(3).nom("Jardinage").icone("TreeDeciduous").build().unwrap(),
        ];
        let agencies = vec![
            Agency::builder()
                .id(1)
                .nom("ProNet Abidjan")
                .ville("Abidjan")
                .services(["Ménage", "Repassage"])
                .description("Experts du nettoyage à domicile.")
                .build()
                .unwrap(),
            Agency::builder()
                .id(2)
                .nom("Maison Plus Bouaké")
                .ville("Bouaké")
                .services(["Ménage", "Jardinage"])
                .build()
                .unwrap(),
            Agency::builder()
                .id(5)
                .nom("Jardin Vert Bouaké")
                .ville("Bouaké")
                .services(["Jardinage"])
                .build()
                .unwrap(),
        ];
        CatalogService::new(StaticServices(services), StaticAgencies(agencies))
    }

    #[tokio::test]
    async fn should_return_same_services_on_repeated_calls() {
        let svc = make_service();
        let first = svc.list_services().await.unwrap();
        let second = svc.list_services().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_list_agencies_in_catalog_order() {
        let svc = make_service();
        let ids: Vec<i64> = svc
            .list_agencies()
            .await
            .unwrap()
            .iter()
            .map(|a| a.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn should_get_agency_when_present() {
        let svc = make_service();
        let agency = svc.get_agency(AgencyId::new(2)).await.unwrap();
        assert_eq!(agency.nom, "Maison Plus Bouaké");
    }

    #[tokio::test]
    async fn should_return_not_found_when_agency_missing() {
        let svc = make_service();
        let result = svc.get_agency(AgencyId::new(42)).await;
        assert!(matches!(result, Err(MaisonError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_invalid_input_when_key_is_not_an_integer() {
        let svc = make_service();
        let result = svc.get_agency_by_key("abc").await;
        assert!(matches!(
            result,
            Err(MaisonError::InvalidInput(InvalidInputError::MalformedId { entity: "agency", .. }))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_key_overflows_integer_range() {
        let svc = make_service();
        let result = svc.get_agency_by_key("99999999999999999999").await;
        match result {
            Err(MaisonError::NotFound(err)) => assert_eq!(err.to_string(), "Agency not found"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_get_agency_by_textual_key() {
        let svc = make_service();
        let agency = svc.get_agency_by_key("5").await.unwrap();
        assert_eq!(agency.id, AgencyId::new(5));
    }

    #[tokio::test]
    async fn should_get_service_by_key_or_report_not_found() {
        let svc = make_service();
        assert_eq!(svc.get_service_by_key("3").await.unwrap().nom, "Jardinage");
        assert!(matches!(
            svc.get_service_by_key("2").await,
            Err(MaisonError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_search_agencies_with_filter() {
        let svc = make_service();
        let filter = AgencyFilter::new()
            .city(Selection::parse("Bouaké"))
            .service(Selection::parse("Ménage"));
        let found = svc.search_agencies(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, AgencyId::new(2));
    }

    #[tokio::test]
    async fn should_return_full_directory_when_filter_unrestricted() {
        let svc = make_service();
        let found = svc.search_agencies(&AgencyFilter::new()).await.unwrap();
        assert_eq!(found, svc.list_agencies().await.unwrap());
    }

    #[tokio::test]
    async fn should_compute_facets_over_whole_directory() {
        let svc = make_service();
        let facets = svc.agency_facets().await.unwrap();
        assert_eq!(facets.villes, vec!["Abidjan", "Bouaké"]);
        assert_eq!(facets.services, vec!["Jardinage", "Ménage", "Repassage"]);
    }
}
