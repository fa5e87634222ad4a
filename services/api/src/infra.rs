use chrono::{DateTime, Utc};
use cities::catalog::{Catalog, CatalogImporter};
use cities::error::AppError;
use cities::ranking::Criterion;
use cities::views::PageRenderer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Shared by every handler. The catalog is read-only; handlers rank copies of it.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) renderer: Arc<dyn PageRenderer>,
    pub(crate) version: Arc<str>,
    pub(crate) started_at: DateTime<Utc>,
}

pub(crate) fn load_catalog(seed_path: Option<&Path>) -> Result<Catalog, AppError> {
    match seed_path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), cities = catalog.len(), "catalog seeded from file");
            Ok(catalog)
        }
        None => Ok(Catalog::seed()),
    }
}

pub(crate) fn parse_criterion(raw: &str) -> Result<Criterion, String> {
    raw.trim().parse::<Criterion>().map_err(|err| err.to_string())
}
