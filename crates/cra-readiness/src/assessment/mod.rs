//! CRA readiness self-assessment: facet-adapted catalog, maturity scoring,
//! regulatory crosswalk, and rule-based insights.
//!
//! Everything up to [`report::build_report`] is pure and deterministic. The
//! [`submission`] module adds storage and notifications around it.

pub mod answers;
pub mod catalog;
pub mod crosswalk;
pub mod domain;
pub mod insights;
pub mod report;
pub mod scoring;
pub mod submission;

pub use answers::AnswerSet;
pub use catalog::{build_catalog, Question, QuestionCatalog, SubCriterion};
pub use crosswalk::{article_coverage, crosswalk, ArticleCoverage, OverlayEntry, RegulatoryOverlay};
pub use domain::{
    ArchitectureType, Category, ClassificationFacts, CriticalFunction, FacetError,
    FacetSelection, ProductClass, Rating, RatingOutOfRange, Sector, Severity,
};
pub use insights::{derive_insights, Finding, FindingSource, Insights, QuestionHighlight};
pub use report::{build_report, AssessmentReport, ReportSummary};
pub use scoring::{
    score, CategoryScore, ConfidenceBand, Deadline, DeadlineReadiness, QuestionScore,
    ScoreBand, ScoredReport,
};
pub use submission::{
    assessment_router, AssessmentId, AssessmentSnapshot, AssessmentSubmission,
    AssessmentSubmissionService, ContactDetails, SubmissionError, SubmissionReceipt,
};
