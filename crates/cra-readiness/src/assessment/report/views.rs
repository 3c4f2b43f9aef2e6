use serde::{Deserialize, Serialize};

use super::super::crosswalk::{ArticleCoverage, RegulatoryOverlay};
use super::super::domain::{ArchitectureType, ProductClass, Sector};
use super::super::insights::Insights;
use super::super::scoring::ScoredReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassGuidanceView {
    pub question_id: &'static str,
    pub guidance: &'static str,
}

/// Answers that scoring ignored, so a caller can prompt for cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerWarnings {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stale_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orphaned_sub_ratings: Vec<String>,
}

impl AnswerWarnings {
    pub fn is_empty(&self) -> bool {
        self.stale_ids.is_empty() && self.orphaned_sub_ratings.is_empty()
    }
}

/// Full report view-model for one facet selection, answer set and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub sector: Sector,
    pub sector_label: &'static str,
    pub architecture: ArchitectureType,
    pub architecture_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_class: Option<ProductClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_class_label: Option<&'static str>,
    pub scores: ScoredReport,
    pub overlay: RegulatoryOverlay,
    pub articles: Vec<ArticleCoverage>,
    pub insights: Insights,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_guidance: Vec<ClassGuidanceView>,
    #[serde(skip_serializing_if = "AnswerWarnings::is_empty")]
    pub warnings: AnswerWarnings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHighlight {
    pub code: String,
    pub title: String,
    pub score: Option<u8>,
}

/// Flattened subset of a report, stored with snapshots and used to address notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub sector_label: String,
    pub architecture_label: String,
    #[serde(default)]
    pub product_class: Option<ProductClass>,
    pub overall_score: Option<u8>,
    #[serde(default)]
    pub overall_band: Option<String>,
    #[serde(default)]
    pub confidence: Option<u8>,
    pub questions_answered: usize,
    pub total_questions: usize,
    #[serde(default)]
    pub early_obligations_score: Option<u8>,
    #[serde(default)]
    pub full_compliance_score: Option<u8>,
    #[serde(default)]
    pub categories: Vec<CategoryHighlight>,
    #[serde(default)]
    pub top_gaps: Vec<String>,
}
