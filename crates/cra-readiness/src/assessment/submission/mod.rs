//! Submission pipeline: snapshot capture, storage, and the admin/client notices.
//!
//! Scoring stays pure; this module is the only place that assigns ids, reads the
//! clock, or talks to a repository or notification transport.

pub mod repository;
pub mod router;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use repository::{
    AssessmentRecord, AssessmentRepository, NotificationError, NotificationKind, NotificationLog,
    NotificationPayload, NotificationPublisher, NotificationStatus, RepositoryError,
    UnknownNotificationKind,
};
pub use router::assessment_router;
pub use service::{AssessmentSubmissionService, SubmissionError, SubmissionReceipt};
pub use snapshot::{
    AssessmentId, AssessmentSnapshot, AssessmentSubmission, ContactDetails, SNAPSHOT_VERSION,
};
