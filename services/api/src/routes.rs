use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use cra_readiness::assessment::submission::{
    assessment_router, AssessmentRepository, AssessmentSubmissionService, NotificationPublisher,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_application_routes<R, N>(
    service: Arc<AssessmentSubmissionService<R, N>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryAssessmentRepository, InMemoryNotificationPublisher};
    use axum::body::Body;
    use axum::http::Request;
    use cra_readiness::config::NotificationConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn app(
        notifier: Arc<InMemoryNotificationPublisher>,
        ready: bool,
    ) -> axum::Router {
        let service = Arc::new(AssessmentSubmissionService::new(
            Arc::new(InMemoryAssessmentRepository::default()),
            notifier,
            NotificationConfig::default(),
        ));
        with_application_routes(service).layer(Extension(app_state(ready)))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = app(Arc::default(), false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["status"], "initializing");

        let response = app(Arc::default(), true)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_endpoint_serves_prometheus_text() {
        let response = metrics_endpoint(Extension(app_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn submission_flows_through_in_memory_adapters() {
        let notifier = Arc::new(InMemoryNotificationPublisher::default());
        let payload = json!({
            "sector": "financial",
            "architecture": "cloud",
            "answers": { "ratings": { "b4": 5 } },
            "contact": {
                "name": "Lin",
                "email": "lin@fintech.example",
                "company": "Ledgerly",
            },
        });

        let response = app(notifier.clone(), true)
            .oneshot(
                Request::post("/api/v1/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::CREATED);
        let receipt = json_body(response).await;
        assert_eq!(receipt["summary"]["overall_score"], 100);
        assert_eq!(receipt["notifications"]["client"]["state"], "delivered");

        let events = notifier.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].recipient, "leads@localhost");
        assert_eq!(events[0].fields["role"], "Not provided");
        assert_eq!(events[1].fields["to_name"], "Lin");
    }
}
