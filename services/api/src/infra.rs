use metrics_exporter_prometheus::PrometheusHandle;
use property_schema::catalog::CatalogError;
use property_schema::config::CatalogConfig;
use property_schema::CatalogService;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the configured catalog once; the service shares it read-only afterwards.
pub(crate) fn build_catalog_service(config: &CatalogConfig) -> Result<CatalogService, CatalogError> {
    let registry = config.registry()?;
    Ok(CatalogService::new(registry, config.unknown_fields))
}
