use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::render::HtmlPageRenderer;
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use cities::config::AppConfig;
use cities::error::AppError;
use cities::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.catalog.take() {
        config.catalog.seed_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;
    info!(version = %config.version, "starting cities service");

    let catalog = load_catalog(config.catalog.seed_path.as_deref())?;
    if catalog.is_empty() {
        warn!("catalog is empty, every page will list no cities");
    } else {
        info!(count = catalog.len(), names = %catalog.names(), "catalog loaded");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: Arc::new(catalog),
        renderer: Arc::new(HtmlPageRenderer),
        version: Arc::from(config.version.as_str()),
        started_at: Utc::now(),
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cities service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
