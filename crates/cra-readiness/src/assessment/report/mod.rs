mod views;

pub use views::{
    AnswerWarnings, AssessmentReport, CategoryHighlight, ClassGuidanceView, ReportSummary,
};

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::crosswalk::{article_coverage, crosswalk};
use super::domain::ClassificationFacts;
use super::insights::derive_insights;
use super::scoring::{score, Deadline};

/// Gaps listed in the summary payload.
const SUMMARY_GAP_LIMIT: usize = 3;

/// Run the full pipeline: score, crosswalk, article map, insights.
pub fn build_report(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
    classification: &ClassificationFacts,
) -> AssessmentReport {
    let facets = catalog.facets();
    let scores = score(catalog, answers);
    let overlay = crosswalk(facets.sector, &scores);
    let articles = article_coverage(&scores);
    let insights = derive_insights(&scores, classification);
    let product_class = classification.product_class();

    let class_guidance = catalog
        .class_guidance(classification)
        .into_iter()
        .map(|(question_id, guidance)| ClassGuidanceView {
            question_id,
            guidance,
        })
        .collect();

    let warnings = AnswerWarnings {
        stale_ids: answers
            .stale_ids(catalog)
            .into_iter()
            .map(str::to_string)
            .collect(),
        orphaned_sub_ratings: answers
            .orphaned_sub_ratings(catalog)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    AssessmentReport {
        sector: facets.sector,
        sector_label: facets.sector.label(),
        architecture: facets.architecture,
        architecture_label: facets.architecture.label(),
        product_class,
        product_class_label: product_class.map(|class| class.label()),
        scores,
        overlay,
        articles,
        insights,
        class_guidance,
        warnings,
    }
}

impl AssessmentReport {
    pub fn summary(&self) -> ReportSummary {
        let categories = self
            .scores
            .categories
            .iter()
            .map(|entry| CategoryHighlight {
                code: entry.code.to_string(),
                title: entry.title.to_string(),
                score: entry.score,
            })
            .collect();

        let deadline_score = |deadline: Deadline| {
            self.scores
                .deadline(deadline)
                .and_then(|entry| entry.score)
        };

        ReportSummary {
            sector_label: self.sector_label.to_string(),
            architecture_label: self.architecture_label.to_string(),
            product_class: self.product_class,
            overall_score: self.scores.overall,
            overall_band: self
                .scores
                .overall_band
                .map(|band| band.label().to_string()),
            confidence: self.scores.confidence,
            questions_answered: self.scores.answered,
            total_questions: self.scores.total_questions,
            early_obligations_score: deadline_score(Deadline::EarlyObligations),
            full_compliance_score: deadline_score(Deadline::FullCompliance),
            categories,
            top_gaps: self
                .insights
                .gaps
                .iter()
                .take(SUMMARY_GAP_LIMIT)
                .map(|gap| gap.title.to_string())
                .collect(),
        }
    }
}
