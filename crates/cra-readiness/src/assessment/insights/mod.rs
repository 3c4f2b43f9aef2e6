mod rules;

use serde::Serialize;

use super::domain::{Category, ClassificationFacts, ProductClass, Rating, Severity};
use super::scoring::{QuestionScore, ScoreBand, ScoredReport};
use rules::InsightRule;

/// Score at or above which a question counts as a strength.
pub const STRENGTH_THRESHOLD: u8 = 70;
/// Score below which a question counts as a gap.
pub const GAP_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingSource {
    Classification,
    Sector,
    CrossCutting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub source: FindingSource,
    pub message: String,
}

/// A qualifying question surfaced as a gap or strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionHighlight {
    pub question_id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub citation: &'static str,
    pub score: u8,
    pub band: ScoreBand,
}

impl QuestionHighlight {
    fn from_score(question: &QuestionScore) -> Self {
        Self {
            question_id: question.question_id,
            title: question.title,
            category: question.category,
            citation: question.citation,
            score: question.score,
            band: question.band,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeakSubCriterion {
    pub id: &'static str,
    pub text: &'static str,
    pub question_id: &'static str,
    pub question_title: &'static str,
    pub category: Category,
    pub citation: &'static str,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub findings: Vec<Finding>,
    pub gaps: Vec<QuestionHighlight>,
    pub strengths: Vec<QuestionHighlight>,
    pub weak_sub_criteria: Vec<WeakSubCriterion>,
}

/// Evaluate every rule table in priority order: classification, sector, then
/// cross-cutting correlations.
pub fn derive_insights(report: &ScoredReport, classification: &ClassificationFacts) -> Insights {
    let classification_rules: &[InsightRule] = match classification.product_class() {
        Some(ProductClass::ClassII) => rules::CLASS_II_RULES,
        Some(ProductClass::ClassI) => rules::CLASS_I_RULES,
        None => &[],
    };

    let tables = [
        (FindingSource::Classification, classification_rules),
        (
            FindingSource::Sector,
            rules::sector_rules(report.facets.sector),
        ),
        (FindingSource::CrossCutting, rules::CROSS_CUTTING_RULES),
    ];

    let mut findings: Vec<Finding> = Vec::new();
    let mut messages: Vec<String> = Vec::new();
    for (source, table) in tables {
        for rule in table {
            if rule.applies(report, &messages) {
                let message = rule.message.render(report);
                messages.push(message.clone());
                findings.push(Finding {
                    severity: rule.severity,
                    source,
                    message,
                });
            }
        }
    }

    Insights {
        findings,
        gaps: gaps(report),
        strengths: strengths(report),
        weak_sub_criteria: weak_sub_criteria(report),
    }
}

fn gaps(report: &ScoredReport) -> Vec<QuestionHighlight> {
    let mut gaps: Vec<QuestionHighlight> = report
        .questions
        .iter()
        .filter(|question| question.score < GAP_THRESHOLD)
        .map(QuestionHighlight::from_score)
        .collect();
    gaps.sort_by_key(|gap| gap.score);
    gaps
}

fn strengths(report: &ScoredReport) -> Vec<QuestionHighlight> {
    let mut strengths: Vec<QuestionHighlight> = report
        .questions
        .iter()
        .filter(|question| question.score >= STRENGTH_THRESHOLD)
        .map(QuestionHighlight::from_score)
        .collect();
    strengths.sort_by(|left, right| right.score.cmp(&left.score));
    strengths
}

fn weak_sub_criteria(report: &ScoredReport) -> Vec<WeakSubCriterion> {
    let mut weak: Vec<WeakSubCriterion> = report
        .questions
        .iter()
        .flat_map(|question| {
            question
                .sub_ratings
                .iter()
                .filter(|sub| sub.rating.is_weak())
                .map(move |sub| WeakSubCriterion {
                    id: sub.id,
                    text: sub.text,
                    question_id: question.question_id,
                    question_title: question.title,
                    category: question.category,
                    citation: question.citation,
                    rating: sub.rating,
                })
        })
        .collect();
    weak.sort_by_key(|sub| sub.rating);
    weak
}
