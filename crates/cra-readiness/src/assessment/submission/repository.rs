use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::snapshot::{AssessmentId, AssessmentSnapshot};

/// The two independent notices sent after a submission is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Lead notice to the administrator inbox.
    Admin,
    /// Results notice to the submitting contact.
    Client,
}

impl NotificationKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = UnknownNotificationKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            other => Err(UnknownNotificationKind(other.to_string())),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification kind '{0}'")]
pub struct UnknownNotificationKind(pub String);

/// Delivery state of one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NotificationStatus {
    Pending,
    Delivered { delivered_at: DateTime<Utc> },
    Failed { reason: String },
    Skipped,
}

impl NotificationStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Delivered { .. } => "delivered",
            Self::Failed { .. } => "failed",
            Self::Skipped => "skipped",
        }
    }

    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Delivered, or declined by the submitter. Retries leave these alone.
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Delivered { .. } | Self::Skipped)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationLog {
    pub admin: NotificationStatus,
    pub client: NotificationStatus,
}

impl NotificationLog {
    pub fn pending() -> Self {
        Self {
            admin: NotificationStatus::Pending,
            client: NotificationStatus::Pending,
        }
    }

    pub fn status(&self, kind: NotificationKind) -> &NotificationStatus {
        match kind {
            NotificationKind::Admin => &self.admin,
            NotificationKind::Client => &self.client,
        }
    }

    pub fn record(&mut self, kind: NotificationKind, status: NotificationStatus) {
        match kind {
            NotificationKind::Admin => self.admin = status,
            NotificationKind::Client => self.client = status,
        }
    }
}

/// Repository record: the verbatim snapshot plus delivery bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub snapshot: AssessmentSnapshot,
    pub notifications: NotificationLog,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hook (e-mail relay, CRM webhook).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: NotificationPayload) -> Result<(), NotificationError>;
}

/// Flat key/value payload; templating happens on the receiving side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub kind: NotificationKind,
    pub template: String,
    pub assessment_id: AssessmentId,
    pub recipient: String,
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
