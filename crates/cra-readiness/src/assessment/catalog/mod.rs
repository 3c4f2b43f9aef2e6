mod questions;

use super::domain::{
    ArchitectureType, Category, ClassificationFacts, FacetSelection, ProductClass, Sector,
};
use serde::Serialize;

/// A single checklist item beneath a question, rated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubCriterion {
    pub id: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub body: &'static str,
    pub citation: &'static str,
    pub guidance: &'static str,
    pub sub_criteria: Vec<SubCriterion>,
}

impl Question {
    pub fn sub_criterion(&self, id: &str) -> Option<&SubCriterion> {
        self.sub_criteria.iter().find(|sub| sub.id == id)
    }
}

/// Architecture-conditioned text. Entries are checked in declared order, so
/// hybrid reads the first entry and a type without an entry reads `otherwise`.
#[derive(Debug)]
pub(crate) struct Variants {
    pub by_architecture: &'static [(ArchitectureType, &'static str)],
    pub otherwise: &'static str,
}

impl Variants {
    pub(crate) const fn fixed(text: &'static str) -> Self {
        Self {
            by_architecture: &[],
            otherwise: text,
        }
    }

    fn resolve(&self, architecture: ArchitectureType) -> &'static str {
        self.by_architecture
            .iter()
            .find(|(variant, _)| architecture.satisfies(*variant))
            .map(|(_, text)| *text)
            .unwrap_or(self.otherwise)
    }
}

/// Two-tier guidance: a sector override when one exists, else the generic text.
#[derive(Debug)]
pub(crate) struct Guidance {
    pub generic: Variants,
    pub sector_overrides: &'static [(Sector, Variants)],
}

impl Guidance {
    pub(crate) fn resolve(&self, facets: FacetSelection) -> &'static str {
        self.sector_overrides
            .iter()
            .find(|(sector, _)| *sector == facets.sector)
            .map(|(_, variants)| variants)
            .unwrap_or(&self.generic)
            .resolve(facets.architecture)
    }
}

/// Sub-criteria appended when the architecture satisfies `when`.
#[derive(Debug)]
pub(crate) struct ExtraRule {
    pub when: ArchitectureType,
    pub sub_criteria: &'static [SubCriterion],
}

#[derive(Debug)]
pub(crate) struct QuestionTemplate {
    pub id: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub body: &'static str,
    pub citation: &'static str,
    pub guidance: Guidance,
    pub base: &'static [SubCriterion],
    pub extras: &'static [ExtraRule],
    /// Used only when no extra rule matched.
    pub fallback: &'static [SubCriterion],
    pub class_ii_guidance: Option<&'static str>,
}

impl QuestionTemplate {
    fn sub_criteria_for(&self, architecture: ArchitectureType) -> Vec<SubCriterion> {
        let mut sub_criteria = self.base.to_vec();
        let mut matched = false;
        for rule in self.extras {
            if architecture.satisfies(rule.when) {
                matched = true;
                sub_criteria.extend_from_slice(rule.sub_criteria);
            }
        }
        if !matched {
            sub_criteria.extend_from_slice(self.fallback);
        }
        sub_criteria
    }

    fn instantiate(&self, facets: FacetSelection) -> Question {
        Question {
            id: self.id,
            category: self.category,
            title: self.title,
            body: self.body,
            citation: self.citation,
            guidance: self.guidance.resolve(facets),
            sub_criteria: self.sub_criteria_for(facets.architecture),
        }
    }
}

/// Ordered question set adapted to one facet selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    facets: FacetSelection,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn build(facets: FacetSelection) -> Self {
        let questions = questions::templates()
            .iter()
            .map(|template| template.instantiate(facets))
            .collect();

        Self { facets, questions }
    }

    pub fn facets(&self) -> FacetSelection {
        self.facets
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_in(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn sub_criteria_count(&self) -> usize {
        self.questions
            .iter()
            .map(|question| question.sub_criteria.len())
            .sum()
    }

    /// Whether `id` names a question or sub-criterion in this catalog.
    pub fn contains_id(&self, id: &str) -> bool {
        self.questions
            .iter()
            .any(|question| question.id == id || question.sub_criterion(id).is_some())
    }

    /// Notified Body guidance shown alongside specific questions for Class II products.
    pub fn class_guidance(
        &self,
        classification: &ClassificationFacts,
    ) -> Vec<(&'static str, &'static str)> {
        if classification.product_class() != Some(ProductClass::ClassII) {
            return Vec::new();
        }

        questions::templates()
            .iter()
            .filter_map(|template| template.class_ii_guidance.map(|text| (template.id, text)))
            .collect()
    }
}

/// Build the catalog for a facet pair given as raw strings.
pub fn build_catalog(
    sector: &str,
    architecture: &str,
) -> Result<QuestionCatalog, super::domain::FacetError> {
    let facets = FacetSelection::parse(sector, architecture)?;
    Ok(QuestionCatalog::build(facets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::CriticalFunction;

    fn catalog(sector: Sector, architecture: ArchitectureType) -> QuestionCatalog {
        QuestionCatalog::build(FacetSelection::new(sector, architecture))
    }

    #[test]
    fn guidance_prefers_sector_override() {
        let healthcare = catalog(Sector::Healthcare, ArchitectureType::Embedded);
        let generic = catalog(Sector::Generic, ArchitectureType::Embedded);

        let a1_healthcare = healthcare.question("a1").expect("a1 present");
        let a1_generic = generic.question("a1").expect("a1 present");

        assert!(a1_healthcare.guidance.starts_with("Medical firmware"));
        assert!(a1_generic.guidance.starts_with("Physical and software threats"));
    }

    #[test]
    fn guidance_falls_back_to_generic_without_override() {
        let financial = catalog(Sector::Financial, ArchitectureType::Cloud);
        let generic = catalog(Sector::Generic, ArchitectureType::Cloud);

        assert_eq!(
            financial.question("b2").expect("b2 present").guidance,
            generic.question("b2").expect("b2 present").guidance
        );
    }

    #[test]
    fn hybrid_collects_every_gated_extra() {
        let hybrid = catalog(Sector::Generic, ArchitectureType::Hybrid);
        let a2 = hybrid.question("a2").expect("a2 present");
        let ids: Vec<&str> = a2.sub_criteria.iter().map(|sub| sub.id).collect();

        assert!(ids.contains(&"a2_s6"), "embedded extra present");
        assert!(ids.contains(&"a2_s7"), "cloud extra present");
        assert!(ids.contains(&"a2_s8"), "hybrid extra present");
        assert!(!ids.contains(&"a2_s9"), "fallback skipped once a rule matched");
    }

    #[test]
    fn fallback_extra_applies_when_no_rule_matches() {
        let samd = catalog(Sector::Generic, ArchitectureType::Samd);
        let b3 = samd.question("b3").expect("b3 present");
        assert_eq!(b3.sub_criteria.len(), 6);
        assert_eq!(b3.sub_criteria.last().map(|sub| sub.id), Some("b3_s10"));
    }

    #[test]
    fn class_guidance_only_for_class_ii() {
        let catalog = catalog(Sector::Generic, ArchitectureType::Cloud);
        let mut facts = ClassificationFacts {
            in_scope: Some(true),
            critical_functions: Vec::new(),
        };
        assert!(catalog.class_guidance(&facts).is_empty());

        facts.critical_functions.push(CriticalFunction::Firewall);
        let ids: Vec<&str> = catalog
            .class_guidance(&facts)
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["a1", "a2", "e1", "e3"]);
    }

    #[test]
    fn build_catalog_rejects_invalid_facets() {
        assert!(build_catalog("generic", "quantum").is_err());
        assert_eq!(
            build_catalog("iot", "embedded").expect("valid facets").len(),
            22
        );
    }
}
