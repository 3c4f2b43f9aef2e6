use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use cra_readiness::assessment::{build_catalog, AssessmentReport, AssessmentSnapshot, QuestionCatalog};
use cra_readiness::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Industry sector (generic, healthcare, iot, industrial, automotive, financial)
    #[arg(long)]
    pub(crate) sector: String,
    /// Product architecture (samd, embedded, cloud, hybrid)
    #[arg(long)]
    pub(crate) architecture: String,
    /// Print JSON instead of the text outline
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Stored assessment snapshot (JSON)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Date used for deadline countdowns (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = build_catalog(&args.sector, &args.architecture)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", render_catalog(&catalog));
    }
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let snapshot: AssessmentSnapshot = serde_json::from_str(&raw)?;
    let report = snapshot.rescore();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
        print!("{}", render_report(&report, as_of));
    }
    Ok(())
}

pub(crate) fn render_catalog(catalog: &QuestionCatalog) -> String {
    let facets = catalog.facets();
    let mut out = format!(
        "{} / {}: {} questions, {} sub-criteria\n",
        facets.sector.label(),
        facets.architecture.label(),
        catalog.len(),
        catalog.sub_criteria_count()
    );

    let mut current = None;
    for question in catalog.questions() {
        if current != Some(question.category) {
            current = Some(question.category);
            out.push_str(&format!(
                "\n[{}] {}\n",
                question.category.code(),
                question.category.title()
            ));
        }
        out.push_str(&format!(
            "- {} {} ({})\n",
            question.id, question.title, question.citation
        ));
        for sub in &question.sub_criteria {
            out.push_str(&format!("    {} {}\n", sub.id, sub.text));
        }
    }
    out
}

fn score_label(score: Option<u8>) -> String {
    score
        .map(|score| format!("{score}%"))
        .unwrap_or_else(|| "no data".to_string())
}

pub(crate) fn render_report(report: &AssessmentReport, as_of: NaiveDate) -> String {
    let scores = &report.scores;
    let mut out = format!(
        "CRA readiness: {} / {}\n",
        report.sector_label, report.architecture_label
    );
    if let Some(label) = report.product_class_label {
        out.push_str(&format!("Classification: {label}\n"));
    }
    out.push_str(&format!(
        "Overall {} ({}) | confidence {} | {}/{} answered, {} N/A\n",
        score_label(scores.overall),
        scores
            .overall_band
            .map(|band| band.label())
            .unwrap_or("unscored"),
        score_label(scores.confidence),
        scores.answered,
        scores.total_questions,
        scores.not_applicable
    ));

    out.push_str("\nDeadlines:\n");
    for deadline in &scores.deadlines {
        let countdown = deadline
            .due_date
            .map(|due| format!("{} days left", (due - as_of).num_days()))
            .unwrap_or_default();
        out.push_str(&format!(
            "- {} ({}): {} [{}]\n",
            deadline.label,
            deadline.article,
            score_label(deadline.score),
            countdown
        ));
    }

    out.push_str("\nCategories:\n");
    for category in &scores.categories {
        out.push_str(&format!(
            "- {} {}: {} ({}/{})\n",
            category.code,
            category.title,
            score_label(category.score),
            category.answered,
            category.total
        ));
    }

    out.push_str(&format!(
        "\n{} overlay: {}\n",
        report.overlay.framework,
        score_label(report.overlay.score)
    ));

    if !report.insights.findings.is_empty() {
        out.push_str("\nFindings:\n");
        for finding in &report.insights.findings {
            out.push_str(&format!(
                "- [{}] {}\n",
                finding.severity.label(),
                finding.message
            ));
        }
    }

    if !report.insights.gaps.is_empty() {
        out.push_str("\nPriority gaps:\n");
        for gap in &report.insights.gaps {
            out.push_str(&format!(
                "- {} {}: {}%\n",
                gap.question_id, gap.title, gap.score
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cra_readiness::assessment::{
        build_report, AnswerSet, ArchitectureType, ClassificationFacts, CriticalFunction,
        FacetSelection, Rating, Sector,
    };

    #[test]
    fn catalog_outline_groups_by_category() {
        let catalog = build_catalog("automotive", "embedded").expect("valid facets");
        let text = render_catalog(&catalog);

        assert!(text.starts_with("Automotive / Mobility / Embedded"));
        assert!(text.contains("\n[A] "));
        assert!(text.contains("- a1 Cybersecurity Risk Assessment"));
        assert!(text.contains("    a1_s5 "));
    }

    #[test]
    fn report_outline_lists_deadlines_and_findings() {
        let catalog = QuestionCatalog::build(FacetSelection::new(
            Sector::Industrial,
            ArchitectureType::Hybrid,
        ));
        let mut answers = AnswerSet::new();
        answers
            .set_main("d3", Rating::None)
            .set_main("a2", Rating::Established);
        let classification = ClassificationFacts {
            in_scope: Some(true),
            critical_functions: vec![CriticalFunction::Ics],
        };
        let report = build_report(&catalog, &answers, &classification);
        let as_of = NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date");

        let text = render_report(&report, as_of);

        assert!(text.contains("Classification: Class II (Critical)"));
        assert!(text.contains("Overall 50% (Developing)"));
        assert!(text.contains("[10 days left]"));
        assert!(text.contains("- [Critical] Critical infrastructure: ENISA"));
        assert!(text.contains("- d3 Disclosure & ENISA Reporting: 20%"));
    }
}
