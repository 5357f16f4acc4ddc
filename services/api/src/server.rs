use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryRecruitmentRepository};
use crate::routes::with_recruitment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_flow::config::AppConfig;
use talent_flow::error::AppError;
use talent_flow::telemetry;
use talent_flow::workflows::recruitment::{CascadePolicy, RecruitmentService};
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

    let repository = Arc::new(InMemoryRecruitmentRepository::default());
    let policy = CascadePolicy::new(config.recruitment.final_round_marker.clone());
    let recruitment_service = Arc::new(RecruitmentService::new(repository, policy));

    let app = with_recruitment_routes(recruitment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recruitment pipeline service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
