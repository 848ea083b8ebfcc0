use crate::cli::ServeArgs;
use crate::infra::{AppState, CatalogService};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use casa_catalog::catalog::{InMemoryPropertyRepository, PropertyRuler};
use casa_catalog::config::AppConfig;
use casa_catalog::error::AppError;
use casa_catalog::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(rules) = args.rules.take() {
        config.rules.path = Some(rules);
    }

    telemetry::init(&config.telemetry)?;

    let rules = config.rules.load()?;
    info!(
        source = config
            .rules
            .path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "business rules loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryPropertyRepository::default());
    let ruler = Arc::new(PropertyRuler::new(&rules));
    let catalog_service: Arc<CatalogService> =
        Arc::new(CatalogService::new(repository, ruler));

    let app = with_catalog_routes(catalog_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "listing catalog ready");

    axum::serve(listener, app).await?;
    Ok(())
}
