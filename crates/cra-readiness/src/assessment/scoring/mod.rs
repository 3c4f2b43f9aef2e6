mod rules;

use chrono::NaiveDate;
use serde::Serialize;

use super::answers::AnswerSet;
use super::catalog::{Question, QuestionCatalog};
use super::domain::{Category, FacetSelection, Rating};

pub(crate) use rules::rounded_mean;

/// Questions whose obligations apply from the first enforcement date.
pub const EARLY_OBLIGATION_QUESTIONS: [&str; 6] = ["d1", "d2", "d3", "d4", "c2", "c5"];

/// Qualitative band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Critical,
    Initial,
    Developing,
    Strong,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::Strong,
            50..=74 => Self::Developing,
            25..=49 => Self::Initial,
            _ => Self::Critical,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Strong => "Strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Low,
    Moderate,
    High,
}

impl ConfidenceBand {
    pub const fn from_confidence(confidence: u8) -> Self {
        match confidence {
            60.. => Self::High,
            30..=59 => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// The two CRA enforcement milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deadline {
    EarlyObligations,
    FullCompliance,
}

impl Deadline {
    pub const fn ordered() -> [Self; 2] {
        [Self::EarlyObligations, Self::FullCompliance]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EarlyObligations => "Sep 11, 2026: vulnerability reporting",
            Self::FullCompliance => "Dec 11, 2027: full compliance",
        }
    }

    pub const fn article(self) -> &'static str {
        match self {
            Self::EarlyObligations => "Art. 14",
            Self::FullCompliance => "Art. 71",
        }
    }

    pub fn due_date(self) -> Option<NaiveDate> {
        match self {
            Self::EarlyObligations => NaiveDate::from_ymd_opt(2026, 9, 11),
            Self::FullCompliance => NaiveDate::from_ymd_opt(2027, 12, 11),
        }
    }

    pub fn covers(self, question_id: &str) -> bool {
        let early = EARLY_OBLIGATION_QUESTIONS.contains(&question_id);
        match self {
            Self::EarlyObligations => early,
            Self::FullCompliance => !early,
        }
    }
}

/// A sub-criterion that received a positive rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedSubCriterion {
    pub id: &'static str,
    pub text: &'static str,
    pub rating: Rating,
}

/// Score for one qualifying question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionScore {
    pub question_id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub citation: &'static str,
    pub main_rating: Rating,
    pub score: u8,
    pub band: ScoreBand,
    pub rated_sub_criteria: usize,
    pub applicable_sub_criteria: usize,
    pub confidence: Option<u8>,
    /// Positively rated sub-criteria in catalog order.
    pub sub_ratings: Vec<RatedSubCriterion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub code: &'static str,
    pub title: &'static str,
    pub score: Option<u8>,
    pub band: Option<ScoreBand>,
    pub answered: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineReadiness {
    pub deadline: Deadline,
    pub label: &'static str,
    pub article: &'static str,
    pub due_date: Option<NaiveDate>,
    pub score: Option<u8>,
    pub band: Option<ScoreBand>,
    pub answered: usize,
}

/// Aggregates derived from one catalog and answer set. `None` means no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReport {
    pub facets: FacetSelection,
    /// Qualifying questions only, in catalog order.
    pub questions: Vec<QuestionScore>,
    pub categories: Vec<CategoryScore>,
    pub overall: Option<u8>,
    pub overall_band: Option<ScoreBand>,
    pub confidence: Option<u8>,
    pub confidence_band: Option<ConfidenceBand>,
    pub deadlines: Vec<DeadlineReadiness>,
    pub answered: usize,
    pub not_applicable: usize,
    /// Questions not marked N/A.
    pub applicable_total: usize,
    pub total_questions: usize,
    pub rated_sub_criteria: usize,
    pub applicable_sub_criteria: usize,
}

impl ScoredReport {
    pub fn question(&self, id: &str) -> Option<&QuestionScore> {
        self.questions.iter().find(|question| question.question_id == id)
    }

    /// Score for a question, `None` when it did not qualify.
    pub fn question_score(&self, id: &str) -> Option<u8> {
        self.question(id).map(|question| question.score)
    }

    pub fn category_score(&self, category: Category) -> Option<u8> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .and_then(|entry| entry.score)
    }

    pub fn deadline(&self, deadline: Deadline) -> Option<&DeadlineReadiness> {
        self.deadlines.iter().find(|entry| entry.deadline == deadline)
    }
}

/// Score an answer set against a catalog. Pure: identical inputs give identical output.
pub fn score(catalog: &QuestionCatalog, answers: &AnswerSet) -> ScoredReport {
    let questions: Vec<QuestionScore> = catalog
        .questions()
        .iter()
        .filter_map(|question| score_question(question, answers))
        .collect();

    let not_applicable = catalog
        .questions()
        .iter()
        .filter(|question| answers.main_rating(question.id) == Some(Rating::NotApplicable))
        .count();

    let categories = Category::ordered()
        .into_iter()
        .map(|category| {
            let scores: Vec<u8> = questions
                .iter()
                .filter(|question| question.category == category)
                .map(|question| question.score)
                .collect();
            let score = rounded_mean(scores.iter().copied());
            CategoryScore {
                category,
                code: category.code(),
                title: category.title(),
                score,
                band: score.map(ScoreBand::from_score),
                answered: scores.len(),
                total: catalog.questions_in(category).len(),
            }
        })
        .collect();

    let deadlines = Deadline::ordered()
        .into_iter()
        .map(|deadline| {
            let scores: Vec<u8> = questions
                .iter()
                .filter(|question| deadline.covers(question.question_id))
                .map(|question| question.score)
                .collect();
            let score = rounded_mean(scores.iter().copied());
            DeadlineReadiness {
                deadline,
                label: deadline.label(),
                article: deadline.article(),
                due_date: deadline.due_date(),
                score,
                band: score.map(ScoreBand::from_score),
                answered: scores.len(),
            }
        })
        .collect();

    let overall = rounded_mean(questions.iter().map(|question| question.score));
    let rated_sub_criteria = questions
        .iter()
        .map(|question| question.rated_sub_criteria)
        .sum();
    let applicable_sub_criteria = questions
        .iter()
        .map(|question| question.applicable_sub_criteria)
        .sum();
    let confidence = rules::percentage(rated_sub_criteria, applicable_sub_criteria);

    ScoredReport {
        facets: catalog.facets(),
        answered: questions.len(),
        not_applicable,
        applicable_total: catalog.len() - not_applicable,
        total_questions: catalog.len(),
        categories,
        overall,
        overall_band: overall.map(ScoreBand::from_score),
        confidence,
        confidence_band: confidence.map(ConfidenceBand::from_confidence),
        deadlines,
        rated_sub_criteria,
        applicable_sub_criteria,
        questions,
    }
}

fn score_question(question: &Question, answers: &AnswerSet) -> Option<QuestionScore> {
    let main_rating = answers.qualifying_rating(question.id)?;

    let mut sub_ratings = Vec::new();
    let mut not_applicable = 0;
    for sub in &question.sub_criteria {
        match answers.sub_rating(sub.id) {
            Some(Rating::NotApplicable) => not_applicable += 1,
            Some(rating) => sub_ratings.push(RatedSubCriterion {
                id: sub.id,
                text: sub.text,
                rating,
            }),
            None => {}
        }
    }

    let rated: Vec<Rating> = sub_ratings.iter().map(|sub| sub.rating).collect();
    let score = rules::question_score(main_rating, &rated);
    let applicable_sub_criteria = question.sub_criteria.len() - not_applicable;

    Some(QuestionScore {
        question_id: question.id,
        title: question.title,
        category: question.category,
        citation: question.citation,
        main_rating,
        score,
        band: ScoreBand::from_score(score),
        rated_sub_criteria: rated.len(),
        applicable_sub_criteria,
        confidence: rules::percentage(rated.len(), applicable_sub_criteria),
        sub_ratings,
    })
}
