use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::repository::{
    AssessmentRepository, NotificationKind, NotificationPublisher, RepositoryError,
};
use super::service::{AssessmentSubmissionService, SubmissionError};
use super::snapshot::{AssessmentId, AssessmentSubmission};
use crate::assessment::answers::AnswerSet;
use crate::assessment::catalog::{Question, QuestionCatalog};
use crate::assessment::domain::{ClassificationFacts, FacetSelection};
use crate::assessment::report::{build_report, ClassGuidanceView};

/// Router builder exposing catalog, live scoring, and submission endpoints.
pub fn assessment_router<R, N>(service: Arc<AssessmentSubmissionService<R, N>>) -> Router
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/assessments/catalog", post(catalog_handler))
        .route("/api/v1/assessments/report", post(report_handler))
        .route("/api/v1/assessments", post(submit_handler::<R, N>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/notifications/:kind",
            post(retry_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogRequest {
    pub(crate) sector: String,
    pub(crate) architecture: String,
    #[serde(default)]
    pub(crate) classification: ClassificationFacts,
}

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    facets: FacetSelection,
    questions: &'a [Question],
    sub_criteria: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    class_guidance: Vec<ClassGuidanceView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) sector: String,
    pub(crate) architecture: String,
    #[serde(default)]
    pub(crate) classification: ClassificationFacts,
    #[serde(default)]
    pub(crate) answers: AnswerSet,
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
    let payload = json!({
        "error": message.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn catalog_handler(axum::Json(request): axum::Json<CatalogRequest>) -> Response {
    let facets = match FacetSelection::parse(&request.sector, &request.architecture) {
        Ok(facets) => facets,
        Err(error) => return error_response(StatusCode::BAD_REQUEST, error),
    };

    let catalog = QuestionCatalog::build(facets);
    let view = CatalogView {
        facets,
        questions: catalog.questions(),
        sub_criteria: catalog.sub_criteria_count(),
        class_guidance: catalog
            .class_guidance(&request.classification)
            .into_iter()
            .map(|(question_id, guidance)| ClassGuidanceView {
                question_id,
                guidance,
            })
            .collect(),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn report_handler(axum::Json(request): axum::Json<ReportRequest>) -> Response {
    match FacetSelection::parse(&request.sector, &request.architecture) {
        Ok(facets) => {
            let report = build_report(
                &QuestionCatalog::build(facets),
                &request.answers,
                &request.classification,
            );
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(error) => error_response(StatusCode::BAD_REQUEST, error),
    }
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<AssessmentSubmissionService<R, N>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(SubmissionError::Facet(error)) => error_response(StatusCode::BAD_REQUEST, error),
        Err(SubmissionError::Repository(RepositoryError::Conflict)) => {
            error_response(StatusCode::CONFLICT, "assessment already exists")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<AssessmentSubmissionService<R, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            let payload = json!({
                "assessment_id": record.id,
                "submitted_at": record.snapshot.submitted_at,
                "version": record.snapshot.version,
                "notifications": record.notifications,
                "report_link": service.report_link(&record.id),
                "report": record.snapshot.rescore(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "assessment_id": id.0,
                "error": "assessment not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn retry_handler<R, N>(
    State(service): State<Arc<AssessmentSubmissionService<R, N>>>,
    Path((assessment_id, kind)): Path<(String, String)>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let kind = match kind.parse::<NotificationKind>() {
        Ok(kind) => kind,
        Err(error) => return error_response(StatusCode::BAD_REQUEST, error),
    };

    let id = AssessmentId(assessment_id);
    match service.retry_notification(&id, kind) {
        Ok(status) => {
            let payload = json!({
                "assessment_id": id.0,
                "kind": kind,
                "status": status,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Repository(RepositoryError::NotFound)) => {
            error_response(StatusCode::NOT_FOUND, "assessment not found")
        }
        Err(error @ SubmissionError::NotificationDisabled(_)) => {
            error_response(StatusCode::CONFLICT, error)
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}
