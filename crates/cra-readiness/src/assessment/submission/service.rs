use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::repository::{
    AssessmentRecord, AssessmentRepository, NotificationKind, NotificationLog,
    NotificationPayload, NotificationPublisher, NotificationStatus, RepositoryError,
};
use super::snapshot::{AssessmentId, AssessmentSnapshot, AssessmentSubmission};
use crate::assessment::domain::{FacetError, FacetSelection};
use crate::assessment::report::{AnswerWarnings, AssessmentReport, ReportSummary};
use crate::config::NotificationConfig;

const NOT_PROVIDED: &str = "Not provided";

/// Service composing snapshot capture, storage, and the two outbound notices.
pub struct AssessmentSubmissionService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    config: NotificationConfig,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("cra-{id:06}"))
}

/// What the submitter gets back once the snapshot is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub assessment_id: AssessmentId,
    pub report_link: String,
    pub summary: ReportSummary,
    pub notifications: NotificationLog,
    /// False when the delivery outcome could not be written back; the stored
    /// log then still reads pending.
    pub notifications_persisted: bool,
    #[serde(skip_serializing_if = "AnswerWarnings::is_empty")]
    pub warnings: AnswerWarnings,
}

impl<R, N> AssessmentSubmissionService<R, N>
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, config: NotificationConfig) -> Self {
        Self {
            repository,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Score and store a submission, then attempt both notices.
    ///
    /// The record is persisted before any notice goes out; a failed notice is
    /// recorded on the log and never fails the submission.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let facets = FacetSelection::parse(&submission.sector, &submission.architecture)?;
        let send_client_copy = submission.send_client_copy;

        let (snapshot, report) = AssessmentSnapshot::capture(
            facets,
            submission.classification,
            submission.answers,
            submission.contact,
            Utc::now(),
        );

        if !report.warnings.stale_ids.is_empty() {
            warn!(
                ids = ?report.warnings.stale_ids,
                sector = %facets.sector,
                architecture = %facets.architecture,
                "ignoring answers outside the current catalog"
            );
        }
        if !report.warnings.orphaned_sub_ratings.is_empty() {
            warn!(
                ids = ?report.warnings.orphaned_sub_ratings,
                "ignoring sub-ratings without a rated parent question"
            );
        }

        let mut record = self.repository.insert(AssessmentRecord {
            id: next_assessment_id(),
            snapshot,
            notifications: NotificationLog::pending(),
        })?;

        info!(
            assessment_id = %record.id,
            overall = ?record.snapshot.summary.overall_score,
            answered = record.snapshot.summary.questions_answered,
            "assessment stored"
        );

        let admin = self.deliver(&record, NotificationKind::Admin);
        record.notifications.record(NotificationKind::Admin, admin);

        let client = if send_client_copy {
            self.deliver(&record, NotificationKind::Client)
        } else {
            NotificationStatus::Skipped
        };
        record.notifications.record(NotificationKind::Client, client);

        let notifications_persisted = match self.repository.update(record.clone()) {
            Ok(()) => true,
            Err(error) => {
                warn!(assessment_id = %record.id, %error, "failed to persist notification log");
                false
            }
        };

        Ok(SubmissionReceipt {
            report_link: self.report_link(&record.id),
            assessment_id: record.id,
            summary: record.snapshot.summary,
            notifications: record.notifications,
            notifications_persisted,
            warnings: report.warnings,
        })
    }

    /// Fetch a stored record with its notification log.
    pub fn get(&self, assessment_id: &AssessmentId) -> Result<AssessmentRecord, SubmissionError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Re-score a stored snapshot against the current catalog.
    pub fn report(&self, assessment_id: &AssessmentId) -> Result<AssessmentReport, SubmissionError> {
        Ok(self.get(assessment_id)?.snapshot.rescore())
    }

    /// Re-attempt one notice. Delivered and declined notices are returned as
    /// stored and never re-sent.
    pub fn retry_notification(
        &self,
        assessment_id: &AssessmentId,
        kind: NotificationKind,
    ) -> Result<NotificationStatus, SubmissionError> {
        if kind == NotificationKind::Client && self.config.client_template.is_none() {
            return Err(SubmissionError::NotificationDisabled(kind));
        }

        let mut record = self.get(assessment_id)?;
        let current = record.notifications.status(kind);
        if current.is_settled() {
            return Ok(current.clone());
        }

        let status = self.deliver(&record, kind);
        record.notifications.record(kind, status.clone());
        self.repository.update(record)?;
        Ok(status)
    }

    pub fn report_link(&self, assessment_id: &AssessmentId) -> String {
        format!(
            "{}/{}",
            self.config.report_base_url.trim_end_matches('/'),
            assessment_id
        )
    }

    fn deliver(&self, record: &AssessmentRecord, kind: NotificationKind) -> NotificationStatus {
        let Some(payload) = self.payload(record, kind) else {
            return NotificationStatus::Skipped;
        };

        match self.notifier.publish(payload) {
            Ok(()) => {
                info!(assessment_id = %record.id, %kind, "notification sent");
                NotificationStatus::Delivered {
                    delivered_at: Utc::now(),
                }
            }
            Err(error) => {
                warn!(assessment_id = %record.id, %kind, %error, "notification failed");
                NotificationStatus::Failed {
                    reason: error.to_string(),
                }
            }
        }
    }

    fn payload(&self, record: &AssessmentRecord, kind: NotificationKind) -> Option<NotificationPayload> {
        let snapshot = &record.snapshot;
        let contact = &snapshot.contact;
        let summary = &snapshot.summary;

        let mut fields = BTreeMap::new();
        fields.insert("company".to_string(), contact.company.clone());
        fields.insert("sector".to_string(), summary.sector_label.clone());
        fields.insert("product_type".to_string(), summary.architecture_label.clone());
        fields.insert(
            "overall_score".to_string(),
            summary
                .overall_score
                .map(|score| format!("{score}%"))
                .unwrap_or_else(|| "N/A".to_string()),
        );
        fields.insert(
            "questions_answered".to_string(),
            format!("{}/{}", summary.questions_answered, summary.total_questions),
        );
        fields.insert(
            "assessment_date".to_string(),
            snapshot.submitted_at.format("%B %-d, %Y").to_string(),
        );
        fields.insert("report_link".to_string(), self.report_link(&record.id));
        for category in &summary.categories {
            fields.insert(
                format!("category_{}", category.code.to_ascii_lowercase()),
                category
                    .score
                    .map(|score| format!("{score}%"))
                    .unwrap_or_else(|| "N/A".to_string()),
            );
        }

        let (template, recipient) = match kind {
            NotificationKind::Admin => {
                fields.insert("to_email".to_string(), self.config.admin_email.clone());
                fields.insert("from_name".to_string(), contact.name.clone());
                fields.insert("from_email".to_string(), contact.email.clone());
                fields.insert(
                    "role".to_string(),
                    contact.role.clone().unwrap_or_else(|| NOT_PROVIDED.to_string()),
                );
                fields.insert(
                    "product".to_string(),
                    contact
                        .product
                        .clone()
                        .unwrap_or_else(|| NOT_PROVIDED.to_string()),
                );
                (
                    self.config.admin_template.clone(),
                    self.config.admin_email.clone(),
                )
            }
            NotificationKind::Client => {
                let template = self.config.client_template.clone()?;
                fields.insert("to_email".to_string(), contact.email.clone());
                fields.insert("to_name".to_string(), contact.name.clone());
                (template, contact.email.clone())
            }
        };

        Some(NotificationPayload {
            kind,
            template,
            assessment_id: record.id.clone(),
            recipient,
            fields,
        })
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Facet(#[from] FacetError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{0} notifications are disabled")]
    NotificationDisabled(NotificationKind),
}
