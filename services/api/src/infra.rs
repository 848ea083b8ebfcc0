use casa_catalog::catalog::{InMemoryPropertyRepository, PropertyCatalogService, PropertyRuler};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Catalog service as wired by the binary: in-process storage and the configured rule chain.
pub(crate) type CatalogService = PropertyCatalogService<InMemoryPropertyRepository, PropertyRuler>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}
