use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::answers::AnswerSet;
use super::super::catalog::QuestionCatalog;
use super::super::domain::{ClassificationFacts, FacetSelection};
use super::super::report::{build_report, AssessmentReport, ReportSummary};

/// Schema version written into every stored snapshot.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Opaque identifier assigned by the submission service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who to notify about a submission. Never used for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
}

/// Inbound payload for a completed questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub sector: String,
    pub architecture: String,
    #[serde(default)]
    pub classification: ClassificationFacts,
    #[serde(default)]
    pub answers: AnswerSet,
    pub contact: ContactDetails,
    /// Also send the results notice to the contact.
    #[serde(default = "default_client_copy")]
    pub send_client_copy: bool,
}

fn default_client_copy() -> bool {
    true
}

/// Everything needed to re-score a submission later, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub version: String,
    pub submitted_at: DateTime<Utc>,
    pub facets: FacetSelection,
    pub classification: ClassificationFacts,
    pub answers: AnswerSet,
    pub summary: ReportSummary,
    pub contact: ContactDetails,
}

impl AssessmentSnapshot {
    pub fn capture(
        facets: FacetSelection,
        classification: ClassificationFacts,
        answers: AnswerSet,
        contact: ContactDetails,
        submitted_at: DateTime<Utc>,
    ) -> (Self, AssessmentReport) {
        let report = build_report(&QuestionCatalog::build(facets), &answers, &classification);
        let snapshot = Self {
            version: SNAPSHOT_VERSION.to_string(),
            submitted_at,
            facets,
            classification,
            answers,
            summary: report.summary(),
            contact,
        };
        (snapshot, report)
    }

    /// Rebuild the full report from the stored inputs.
    pub fn rescore(&self) -> AssessmentReport {
        build_report(
            &QuestionCatalog::build(self.facets),
            &self.answers,
            &self.classification,
        )
    }
}
