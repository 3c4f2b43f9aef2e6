use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::AnswerSet;
use crate::assessment::domain::{ClassificationFacts, CriticalFunction, Rating};
use crate::assessment::submission::repository::{
    AssessmentRecord, AssessmentRepository, NotificationError, NotificationKind,
    NotificationPayload, NotificationPublisher, RepositoryError,
};
use crate::assessment::submission::{
    assessment_router, AssessmentId, AssessmentSubmission, AssessmentSubmissionService,
    ContactDetails,
};
use crate::config::NotificationConfig;

pub(super) fn contact() -> ContactDetails {
    ContactDetails {
        name: "Grace Hopper".to_string(),
        email: "grace@medtronix.example".to_string(),
        company: "Medtronix".to_string(),
        role: Some("Product Security Lead".to_string()),
        product: None,
    }
}

pub(super) fn answers() -> AnswerSet {
    let mut answers = AnswerSet::new();
    answers.set_main("a1", Rating::Established);
    answers
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        sector: "healthcare".to_string(),
        architecture: "embedded".to_string(),
        classification: ClassificationFacts::default(),
        answers: answers(),
        contact: contact(),
        send_client_copy: true,
    }
}

pub(super) fn class_ii_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        classification: ClassificationFacts {
            in_scope: Some(true),
            critical_functions: vec![CriticalFunction::Firewall],
        },
        ..submission()
    }
}

pub(super) fn notification_config() -> NotificationConfig {
    NotificationConfig {
        admin_email: "leads@cra.example".to_string(),
        admin_template: "template_cra_lead".to_string(),
        client_template: Some("template_client_results".to_string()),
        report_base_url: "https://cra.example/report/".to_string(),
    }
}

pub(super) fn build_service() -> (
    AssessmentSubmissionService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    build_service_with(notification_config())
}

pub(super) fn build_service_with(
    config: NotificationConfig,
) -> (
    AssessmentSubmissionService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentSubmissionService::new(repository.clone(), notifier.clone(), config);
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Records every payload; fails whichever kind is currently marked failing.
#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<NotificationPayload>>>,
    failing: Arc<Mutex<Option<NotificationKind>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<NotificationPayload> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }

    pub(super) fn fail(&self, kind: Option<NotificationKind>) {
        *self.failing.lock().expect("notifier mutex poisoned") = kind;
    }
}

impl NotificationPublisher for MemoryNotifier {
    fn publish(&self, notification: NotificationPayload) -> Result<(), NotificationError> {
        if *self.failing.lock().expect("notifier mutex poisoned") == Some(notification.kind) {
            return Err(NotificationError::Transport("relay refused".to_string()));
        }
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

/// Accepts inserts but rejects every later write.
#[derive(Default, Clone)]
pub(super) struct InsertOnlyRepository {
    pub(super) inner: MemoryRepository,
}

impl AssessmentRepository for InsertOnlyRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("replica lagging".to_string()))
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        self.inner.fetch(id)
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(
    service: AssessmentSubmissionService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
