use crate::cli::ServeArgs;
use crate::infra::{bootstrap_registry, AppState};
use crate::routes::with_valuation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rcn_engine::catalog::CatalogRegistry;
use rcn_engine::config::AppConfig;
use rcn_engine::costing::CostingEngine;
use rcn_engine::error::AppError;
use rcn_engine::telemetry;
use std::sync::atomic::Ordering;
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

    telemetry::init(&config.telemetry)?;

    let registry = Arc::new(CatalogRegistry::new());
    let active_version = bootstrap_registry(&registry, &config.catalog)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        registry: registry.clone(),
        catalog_path: config.catalog.path.clone(),
    };

    let engine = Arc::new(CostingEngine::new(registry));

    let app = with_valuation_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, %active_version, "replacement cost engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
