//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use maisonci_app::ports::{AgencyCatalog, EventPublisher, QuoteRequestRepository, ServiceCatalog};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts API routes under `/api` next to a plain `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SC, AC, QR, EP>(state: AppState<SC, AC, QR, EP>) -> Router
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use maisonci_app::services::catalog_service::CatalogService;
    use maisonci_app::services::quote_request_service::QuoteRequestService;
    use maisonci_domain::agency::Agency;
    use maisonci_domain::error::MaisonError;
    use maisonci_domain::event::Event;
    use maisonci_domain::id::{AgencyId, ServiceId};
    use maisonci_domain::quote_request::QuoteRequest;
    use maisonci_domain::service::Service;
    use std::future::Future;
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct StubServices;
    struct StubAgencies(Vec<Agency>);
    #[derive(Default)]
    struct StubQuoteRequests(Mutex<Vec<QuoteRequest>>);
    struct StubPublisher;

    impl ServiceCatalog for StubServices {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, MaisonError>> + Send {
            async { Ok(vec![]) }
        }
        fn get_by_id(
            &self,
            _id: ServiceId,
        ) -> impl Future<Output = Result<Option<Service>, MaisonError>> + Send {
            async { Ok(None) }
        }
    }

    impl AgencyCatalog for StubAgencies {
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

    impl QuoteRequestRepository for StubQuoteRequests {
        fn create(
            &self,
            request: QuoteRequest,
        ) -> impl Future<Output = Result<QuoteRequest, MaisonError>> + Send {
            self.0.lock().unwrap().push(request.clone());
            async { Ok(request) }
        }
        fn get_all(&self) -> impl Future<Output = Result<Vec<QuoteRequest>, MaisonError>> + Send {
            let all = self.0.lock().unwrap().clone();
            async { Ok(all) }
        }
    }

    impl EventPublisher for StubPublisher {
        fn publish(&self, _event: Event) -> impl Future<Output = Result<(), MaisonError>> + Send {
            async { Ok(()) }
        }
    }

    fn test_app() -> Router {
        let agencies = vec![
            Agency::builder()
                .id(1)
                .nom("Service Pro Abidjan")
                .ville("Abidjan")
                .services(["Ménage", "Repassage"])
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
        build(AppState::new(
            CatalogService::new(StubServices, StubAgencies(agencies)),
            QuoteRequestService::new(StubQuoteRequests::default(), StubPublisher),
        ))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_array_when_no_services() {
        let (status, body) = get_json(test_app(), "/api/services").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_not_found_when_service_missing() {
        let (status, body) = get_json(test_app(), "/api/services/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Service not found");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_agency_id_not_integer() {
        let (status, body) = get_json(test_app(), "/api/agencies/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Invalid agency ID" }));
    }

    #[tokio::test]
    async fn should_return_not_found_when_agency_id_overflows() {
        let (status, body) = get_json(test_app(), "/api/agencies/99999999999999999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Agency not found" }));
    }

    #[tokio::test]
    async fn should_return_json_bad_request_when_query_parameter_repeated() {
        let (status, body) = get_json(test_app(), "/api/agencies?ville=Abidjan&ville=Bouak%C3%A9").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_list_every_agency_when_selections_are_empty() {
        let (status, body) = get_json(test_app(), "/api/agencies?ville=&service=&search=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_route_facets_before_agency_id() {
        let (status, body) = get_json(test_app(), "/api/agencies/facets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["villes"], serde_json::json!(["Abidjan", "Bouaké"]));
    }

    #[tokio::test]
    async fn should_filter_agencies_from_query() {
        let (status, body) = get_json(test_app(), "/api/agencies?service=Jardinage&ville=all").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![5]);
    }

    #[tokio::test]
    async fn should_create_quote_request_with_201() {
        let (status, body) = post_json(
            test_app(),
            "/api/quote-requests",
            r#"{"nom":"Yao","email":"yao@example.ci","service":"Jardinage","message":"Entretien du jardin chaque semaine."}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["nom"], "Yao");
        assert!(body["id"].is_string());
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn should_report_missing_fields_as_validation_details() {
        let (status, body) = post_json(test_app(), "/api/quote-requests", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request data");
        assert_eq!(body["details"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn should_reject_body_that_is_not_a_json_object() {
        let (status, body) = post_json(test_app(), "/api/quote-requests", "[1, 2]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn should_reject_field_with_wrong_json_type() {
        let (status, body) =
            post_json(test_app(), "/api/quote-requests", r#"{"nom": 42}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }
}
