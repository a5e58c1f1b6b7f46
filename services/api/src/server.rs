use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use delivery_fee::config::AppConfig;
use delivery_fee::error::AppError;
use delivery_fee::telemetry;
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
    let state = AppState::new(prometheus_handle);

    let app = router(state.clone()).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    state.mark_ready();

    info!(?config.environment, %addr, "delivery fee service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
