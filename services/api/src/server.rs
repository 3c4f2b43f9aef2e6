use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository, InMemoryNotificationPublisher};
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cra_readiness::assessment::AssessmentSubmissionService;
use cra_readiness::config::AppConfig;
use cra_readiness::error::AppError;
use cra_readiness::telemetry;
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

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let notifier = Arc::new(InMemoryNotificationPublisher::default());
    let client_notices = config.notifications.client_template.is_some();
    let assessment_service = Arc::new(AssessmentSubmissionService::new(
        repository,
        notifier,
        config.notifications.clone(),
    ));

    let app = with_application_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, client_notices, "cra readiness service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
