use std::collections::BTreeSet;

use cra_readiness::assessment::{
    build_catalog, ArchitectureType, Category, ClassificationFacts, CriticalFunction, FacetError,
    FacetSelection, QuestionCatalog, Sector,
};

fn sub_ids(catalog: &QuestionCatalog, question_id: &str) -> BTreeSet<&'static str> {
    catalog
        .question(question_id)
        .expect("question present")
        .sub_criteria
        .iter()
        .map(|sub| sub.id)
        .collect()
}

#[test]
fn every_facet_pair_yields_the_full_ordered_question_set() {
    let facets = FacetSelection::all();
    assert_eq!(facets.len(), 24);

    for selection in facets {
        let catalog = QuestionCatalog::build(selection);
        assert_eq!(catalog.len(), 22, "{selection:?} should have 22 questions");

        let categories: Vec<Category> = catalog
            .questions()
            .iter()
            .map(|question| question.category)
            .collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted, "{selection:?} questions grouped by category");

        let counts: Vec<usize> = Category::ordered()
            .into_iter()
            .map(|category| catalog.questions_in(category).len())
            .collect();
        assert_eq!(counts, vec![4, 5, 6, 4, 3]);

        let mut seen = BTreeSet::new();
        for question in catalog.questions() {
            assert!(!question.guidance.is_empty());
            assert!(!question.sub_criteria.is_empty(), "{} has sub-criteria", question.id);
            for sub in &question.sub_criteria {
                assert!(
                    sub.id.starts_with(&format!("{}_s", question.id)),
                    "{} belongs to {}",
                    sub.id,
                    question.id
                );
                assert!(seen.insert(sub.id), "{} is unique", sub.id);
            }
        }
    }
}

#[test]
fn catalog_construction_is_deterministic() {
    for selection in FacetSelection::all() {
        assert_eq!(QuestionCatalog::build(selection), QuestionCatalog::build(selection));
    }
}

#[test]
fn hybrid_collects_every_architecture_gated_sub_criterion() {
    for sector in Sector::ordered() {
        let build = |architecture| QuestionCatalog::build(FacetSelection::new(sector, architecture));
        let hybrid = build(ArchitectureType::Hybrid);
        let samd = build(ArchitectureType::Samd);

        for architecture in [ArchitectureType::Embedded, ArchitectureType::Cloud] {
            let single = build(architecture);
            for question in single.questions() {
                let gated: BTreeSet<&str> = sub_ids(&single, question.id)
                    .difference(&sub_ids(&samd, question.id))
                    .copied()
                    .collect();
                assert!(
                    gated.is_subset(&sub_ids(&hybrid, question.id)),
                    "{} {:?} extras missing from hybrid",
                    question.id,
                    architecture
                );
            }
        }
    }

    let hybrid = build_catalog("generic", "hybrid").expect("valid facets");
    let a1 = sub_ids(&hybrid, "a1");
    assert!(a1.contains("a1_s5") && a1.contains("a1_s6"));
    assert!(!a1.contains("a1_s7"), "fallback only applies when nothing matched");
}

#[test]
fn gated_sub_criteria_follow_the_architecture() {
    let embedded = build_catalog("generic", "embedded").expect("valid facets");
    let cloud = build_catalog("generic", "cloud").expect("valid facets");
    let samd = build_catalog("generic", "samd").expect("valid facets");

    assert!(sub_ids(&embedded, "a1").contains("a1_s5"));
    assert!(!sub_ids(&embedded, "a1").contains("a1_s6"));
    assert!(sub_ids(&cloud, "a1").contains("a1_s6"));
    assert!(!sub_ids(&cloud, "a1").contains("a1_s7"));
    assert_eq!(
        sub_ids(&samd, "a1"),
        BTreeSet::from(["a1_s1", "a1_s2", "a1_s3", "a1_s4", "a1_s7"])
    );
}

#[test]
fn guidance_prefers_sector_then_first_satisfied_architecture() {
    let healthcare_cloud = build_catalog("healthcare", "cloud").expect("valid facets");
    assert!(healthcare_cloud
        .question("a1")
        .expect("a1")
        .guidance
        .contains("ePHI"));

    let generic_hybrid = build_catalog("generic", "hybrid").expect("valid facets");
    assert_eq!(
        generic_hybrid.question("a1").expect("a1").guidance,
        "Physical and software threats must be systematically identified and assessed."
    );

    let generic_samd = build_catalog("generic", "samd").expect("valid facets");
    assert_eq!(
        generic_samd.question("a1").expect("a1").guidance,
        "Risk assessment must cover your product's full attack surface and operational context."
    );

    let healthcare_hybrid = build_catalog("healthcare", "hybrid").expect("valid facets");
    assert!(healthcare_hybrid
        .question("e3")
        .expect("e3")
        .guidance
        .starts_with("SaMD under MDR"));
}

#[test]
fn facet_parsing_rejects_unknown_values() {
    assert_eq!(
        build_catalog("retail", "cloud"),
        Err(FacetError::UnknownSector("retail".to_string()))
    );
    assert_eq!(
        build_catalog("iot", "quantum"),
        Err(FacetError::UnknownArchitecture("quantum".to_string()))
    );
}

#[test]
fn class_guidance_only_for_class_ii() {
    let catalog = build_catalog("industrial", "embedded").expect("valid facets");

    let class_i = ClassificationFacts {
        in_scope: Some(true),
        critical_functions: Vec::new(),
    };
    assert!(catalog.class_guidance(&class_i).is_empty());

    let class_ii = ClassificationFacts {
        in_scope: Some(true),
        critical_functions: vec![CriticalFunction::Ics],
    };
    let ids: Vec<&str> = catalog
        .class_guidance(&class_ii)
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, vec!["a1", "a2", "e1", "e3"]);
}
