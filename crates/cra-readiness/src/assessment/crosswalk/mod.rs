//! Re-projection of a scored report onto external frameworks and CRA clauses.
//!
//! The framework overlay is a coverage estimate: it averages the authoring-time
//! framework percentages of the questions that were answered, and never looks at
//! the rating values themselves. It is not a compliance score.

mod frameworks;

use serde::Serialize;

use super::domain::Sector;
use super::scoring::{rounded_mean, ScoreBand, ScoredReport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayEntry {
    pub question_id: &'static str,
    pub framework_coverage: u8,
}

/// Sector framework overlay for the answered question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegulatoryOverlay {
    pub sector: Sector,
    pub framework: &'static str,
    pub summary: &'static str,
    pub score: Option<u8>,
    pub entries: Vec<OverlayEntry>,
}

/// Readiness for one CRA clause, from the questions that evidence it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCoverage {
    pub clause: &'static str,
    pub label: &'static str,
    pub question_ids: &'static [&'static str],
    pub score: Option<u8>,
    pub band: Option<ScoreBand>,
}

pub fn crosswalk(sector: Sector, report: &ScoredReport) -> RegulatoryOverlay {
    let table = frameworks::table_for(sector);

    let entries: Vec<OverlayEntry> = report
        .questions
        .iter()
        .map(|question| OverlayEntry {
            question_id: question.question_id,
            framework_coverage: table.coverage_for(question.question_id),
        })
        .collect();

    RegulatoryOverlay {
        sector: table.sector,
        framework: table.framework,
        summary: table.summary,
        score: rounded_mean(entries.iter().map(|entry| entry.framework_coverage)),
        entries,
    }
}

pub fn article_coverage(report: &ScoredReport) -> Vec<ArticleCoverage> {
    frameworks::ARTICLE_CLAUSES
        .iter()
        .map(|clause| {
            let score = rounded_mean(
                clause
                    .question_ids
                    .iter()
                    .filter_map(|id| report.question_score(id)),
            );
            ArticleCoverage {
                clause: clause.clause,
                label: clause.label,
                question_ids: clause.question_ids,
                score,
                band: score.map(ScoreBand::from_score),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::answers::AnswerSet;
    use crate::assessment::catalog::QuestionCatalog;
    use crate::assessment::domain::{ArchitectureType, FacetSelection, Rating};
    use crate::assessment::scoring::score;

    fn report(sector: Sector, answers: &AnswerSet) -> ScoredReport {
        let catalog =
            QuestionCatalog::build(FacetSelection::new(sector, ArchitectureType::Embedded));
        score(&catalog, answers)
    }

    #[test]
    fn overlay_ignores_rating_values() {
        let mut low = AnswerSet::new();
        low.set_main("a1", Rating::None).set_main("e3", Rating::None);
        let mut high = AnswerSet::new();
        high.set_main("a1", Rating::Optimized)
            .set_main("e3", Rating::Optimized);

        let low = crosswalk(Sector::Healthcare, &report(Sector::Healthcare, &low));
        let high = crosswalk(Sector::Healthcare, &report(Sector::Healthcare, &high));

        // (85 + 10) / 2 = 47.5
        assert_eq!(low.score, Some(48));
        assert_eq!(low.score, high.score);
        assert_eq!(low.framework, "FDA Section 524B");
    }

    #[test]
    fn overlay_without_answers_has_no_data() {
        let overlay = crosswalk(Sector::Iot, &report(Sector::Iot, &AnswerSet::new()));
        assert_eq!(overlay.score, None);
        assert!(overlay.entries.is_empty());
        assert!(overlay.summary.starts_with("Radio Equipment Directive"));
    }

    #[test]
    fn every_table_covers_every_question() {
        let catalog =
            QuestionCatalog::build(FacetSelection::new(Sector::Generic, ArchitectureType::Hybrid));
        for sector in Sector::ordered() {
            let table = frameworks::table_for(sector);
            assert_eq!(table.sector, sector);
            assert_eq!(table.coverage.len(), catalog.len());
            for question in catalog.questions() {
                assert!(table.coverage.iter().any(|(id, _)| *id == question.id));
            }
        }
    }

    #[test]
    fn article_clauses_average_their_questions() {
        let mut answers = AnswerSet::new();
        answers
            .set_main("e1", Rating::Optimized)
            .set_main("a4", Rating::Initial);

        let coverage = article_coverage(&report(Sector::Generic, &answers));
        assert_eq!(coverage.len(), 23);

        let tech_docs = coverage
            .iter()
            .find(|entry| entry.clause == "AnnexVII")
            .expect("tech docs clause");
        assert_eq!(tech_docs.score, Some(70));
        assert_eq!(tech_docs.band, Some(ScoreBand::Developing));

        let sbom = coverage
            .iter()
            .find(|entry| entry.clause == "PtII§1")
            .expect("sbom clause");
        assert_eq!(sbom.score, None);
    }
}
