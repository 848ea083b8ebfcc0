use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use casa_catalog::catalog::{
    property_router, PropertyCatalogService, PropertyClassifier, PropertyRepository,
};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_catalog_routes<R, C>(service: Arc<PropertyCatalogService<R, C>>) -> Router
where
    R: PropertyRepository + 'static,
    C: PropertyClassifier + 'static,
{
    property_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::CatalogService;
    use axum::body::Body;
    use axum::http::Request;
    use casa_catalog::catalog::{InMemoryPropertyRepository, PropertyRuler};
    use casa_catalog::config::BusinessRules;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> Router {
        let service: CatalogService = PropertyCatalogService::new(
            Arc::new(InMemoryPropertyRepository::default()),
            Arc::new(PropertyRuler::new(&BusinessRules::reference())),
        );
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_catalog_routes(Arc::new(service)).layer(Extension(state))
    }

    async fn status_of(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("route executes")
            .status()
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        assert_eq!(
            status_of(app(false), "/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status_of(app(true), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn catalog_and_metrics_routes_are_mounted() {
        assert_eq!(status_of(app(true), "/metrics").await, StatusCode::OK);
        assert_eq!(status_of(app(true), "/v1/properties").await, StatusCode::OK);
        assert_eq!(
            status_of(app(true), "/v1/properties?status=SOLD").await,
            StatusCode::BAD_REQUEST
        );
    }
}
