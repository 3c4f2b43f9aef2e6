use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::Rating;

/// Ratings and notes captured during a questionnaire session.
///
/// Keyed by question or sub-criterion id. Entries are overwritten in place and only
/// removed by [`AnswerSet::reset`]; scoring always recomputes from the full set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default)]
    pub ratings: BTreeMap<String, Rating>,
    #[serde(default)]
    pub sub_ratings: BTreeMap<String, Rating>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_main(&mut self, question_id: impl Into<String>, rating: Rating) -> &mut Self {
        self.ratings.insert(question_id.into(), rating);
        self
    }

    pub fn set_sub(&mut self, sub_criterion_id: impl Into<String>, rating: Rating) -> &mut Self {
        self.sub_ratings.insert(sub_criterion_id.into(), rating);
        self
    }

    pub fn set_note(&mut self, question_id: impl Into<String>, note: impl Into<String>) -> &mut Self {
        self.notes.insert(question_id.into(), note.into());
        self
    }

    pub fn reset(&mut self) {
        self.ratings.clear();
        self.sub_ratings.clear();
        self.notes.clear();
    }

    pub fn main_rating(&self, question_id: &str) -> Option<Rating> {
        self.ratings.get(question_id).copied()
    }

    pub fn sub_rating(&self, sub_criterion_id: &str) -> Option<Rating> {
        self.sub_ratings.get(sub_criterion_id).copied()
    }

    pub fn note(&self, question_id: &str) -> Option<&str> {
        self.notes.get(question_id).map(String::as_str)
    }

    /// Main rating when it makes the question count toward aggregates.
    pub fn qualifying_rating(&self, question_id: &str) -> Option<Rating> {
        self.main_rating(question_id)
            .filter(|rating| rating.is_applicable())
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() && self.sub_ratings.is_empty() && self.notes.is_empty()
    }

    /// Sub-ratings whose parent question has no positive main rating. They are kept
    /// but ignored by scoring until the main rating is set again.
    pub fn orphaned_sub_ratings<'a>(&'a self, catalog: &QuestionCatalog) -> Vec<&'a str> {
        catalog
            .questions()
            .iter()
            .filter(|question| self.qualifying_rating(question.id).is_none())
            .flat_map(|question| question.sub_criteria.iter())
            .filter_map(|sub| {
                self.sub_ratings
                    .get_key_value(sub.id)
                    .map(|(id, _)| id.as_str())
            })
            .collect()
    }

    /// Answer ids that the catalog does not define, typically left over from a
    /// different facet selection.
    pub fn stale_ids<'a>(&'a self, catalog: &QuestionCatalog) -> Vec<&'a str> {
        let ids: BTreeSet<&str> = self
            .ratings
            .keys()
            .chain(self.sub_ratings.keys())
            .chain(self.notes.keys())
            .map(String::as_str)
            .filter(|id| !catalog.contains_id(id))
            .collect();

        ids.into_iter().collect()
    }
}
