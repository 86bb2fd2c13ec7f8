use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryHandoffStore};
use crate::routes::with_scan_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use privacy_risk_scanner::config::AppConfig;
use privacy_risk_scanner::error::AppError;
use privacy_risk_scanner::scan::ScanService;
use privacy_risk_scanner::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryHandoffStore::default());
    let scan_service = Arc::new(ScanService::new(store, config.session.ttl_seconds));

    let app = with_scan_routes(scan_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        session_ttl_secs = config.session.ttl_seconds,
        "privacy risk scanner ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
