use super::super::domain::{Category, Sector, Severity};
use super::super::scoring::ScoredReport;

/// A score the rules can inspect.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Metric {
    Question(&'static str),
    Category(Category),
    Overall,
    Confidence,
}

impl Metric {
    fn value(self, report: &ScoredReport) -> Option<u8> {
        match self {
            Self::Question(id) => report.question_score(id),
            Self::Category(category) => report.category_score(category),
            Self::Overall => report.overall,
            // Answered questions with every sub-criterion N/A read as 0% rated.
            Self::Confidence => Some(report.confidence.unwrap_or(0)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Threshold {
    AtLeast(u8),
    Below(u8),
}

/// A threshold check on one metric. Missing data never satisfies it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Condition {
    pub metric: Metric,
    pub threshold: Threshold,
}

impl Condition {
    fn holds(&self, report: &ScoredReport) -> bool {
        match (self.metric.value(report), self.threshold) {
            (Some(value), Threshold::AtLeast(limit)) => value >= limit,
            (Some(value), Threshold::Below(limit)) => value < limit,
            (None, _) => false,
        }
    }
}

const fn at_least(metric: Metric, limit: u8) -> Condition {
    Condition {
        metric,
        threshold: Threshold::AtLeast(limit),
    }
}

const fn below(metric: Metric, limit: u8) -> Condition {
    Condition {
        metric,
        threshold: Threshold::Below(limit),
    }
}

const fn q(id: &'static str) -> Metric {
    Metric::Question(id)
}

#[derive(Debug)]
pub(crate) enum Predicate {
    Always,
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

impl Predicate {
    fn holds(&self, report: &ScoredReport) -> bool {
        match self {
            Self::Always => true,
            Self::All(conditions) => conditions.iter().all(|condition| condition.holds(report)),
            Self::Any(conditions) => conditions.iter().any(|condition| condition.holds(report)),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Message {
    Text(&'static str),
    /// Mentions the confidence percentage.
    LowConfidence,
}

impl Message {
    pub(crate) fn render(&self, report: &ScoredReport) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::LowConfidence => format!(
                "Score looks reasonable but only {}% criteria rated. Complete more drill-downs for reliability.",
                report.confidence.unwrap_or(0)
            ),
        }
    }
}

#[derive(Debug)]
pub(crate) struct InsightRule {
    pub predicate: Predicate,
    pub severity: Severity,
    pub message: Message,
    /// Suppressed when an earlier finding already contains this text.
    pub unless_mentioned: Option<&'static str>,
}

impl InsightRule {
    pub(crate) fn applies(&self, report: &ScoredReport, earlier: &[String]) -> bool {
        let already_covered = self
            .unless_mentioned
            .map(|needle| earlier.iter().any(|message| message.contains(needle)))
            .unwrap_or(false);

        !already_covered && self.predicate.holds(report)
    }
}

const fn rule(predicate: Predicate, severity: Severity, text: &'static str) -> InsightRule {
    InsightRule {
        predicate,
        severity,
        message: Message::Text(text),
        unless_mentioned: None,
    }
}

pub(crate) static CLASS_II_RULES: &[InsightRule] = &[
    rule(
        Predicate::Always,
        Severity::Warning,
        "Class II (Critical): Third-party Notified Body conformity assessment required before CE marking (Art. 30). Budget 6-12 months for assessment process.",
    ),
    rule(
        Predicate::All(&[below(q("e1"), 70)]),
        Severity::Critical,
        "Class II: Notified Body will audit technical documentation comprehensively. Gaps in Annex VII documentation will delay conformity.",
    ),
    rule(
        Predicate::Any(&[below(q("a1"), 70), below(q("a2"), 70)]),
        Severity::Critical,
        "Class II: Rigorous risk assessment and threat modeling required for Notified Body review. Current maturity insufficient.",
    ),
    rule(
        Predicate::All(&[at_least(Metric::Overall, 70)]),
        Severity::Positive,
        "Strong overall readiness. Focus on completing technical documentation to Notified Body standards.",
    ),
];

pub(crate) static CLASS_I_RULES: &[InsightRule] = &[rule(
    Predicate::Always,
    Severity::Positive,
    "Class I (Important): Self-assessment conformity via EU Declaration (Art. 28). No third-party audit required.",
)];

static HEALTHCARE_RULES: &[InsightRule] = &[
    rule(
        Predicate::All(&[at_least(Metric::Overall, 50)]),
        Severity::Info,
        "Healthcare: FDA 524B + CRA dual compliance achievable. Focus SBOM and ENISA workflows.",
    ),
    rule(
        Predicate::All(&[below(q("d3"), 40)]),
        Severity::Critical,
        "Healthcare: CRA ENISA + CISA ICS-CERT + FDA triple reporting required. Pre-configure now.",
    ),
    rule(
        Predicate::All(&[at_least(q("e3"), 60)]),
        Severity::Positive,
        "Strong conformity process. Leverage MDR documentation for CRA technical file overlap.",
    ),
];

static IOT_RULES: &[InsightRule] = &[
    rule(
        Predicate::All(&[below(q("b2"), 50)]),
        Severity::Critical,
        "IoT: Consumer devices frequently ship insecure-by-default. CRA enforcement will be strict here.",
    ),
    rule(
        Predicate::All(&[at_least(q("c1"), 60)]),
        Severity::Positive,
        "Strong OTA update capability. Critical for IoT where physical access for patching is impractical.",
    ),
    rule(
        Predicate::All(&[below(Metric::Overall, 50)]),
        Severity::Warning,
        "Consumer IoT faces high CRA scrutiny. Establish SBOM + vuln management immediately.",
    ),
];

static INDUSTRIAL_RULES: &[InsightRule] = &[
    rule(
        Predicate::All(&[below(q("c2"), 50)]),
        Severity::Warning,
        "ICS: 10-20 year operational life common. Ensure support period meets CRA minimum + realistic usage.",
    ),
    rule(
        Predicate::All(&[at_least(q("a2"), 60)]),
        Severity::Positive,
        "Strong threat modeling. ICS requires both IT and OT threat coverage — maintain this rigor.",
    ),
    rule(
        Predicate::All(&[below(q("d3"), 40)]),
        Severity::Critical,
        "Critical infrastructure: ENISA + national CERT + sector regulator. Triple reporting workflows needed.",
    ),
];

static AUTOMOTIVE_RULES: &[InsightRule] = &[
    rule(
        Predicate::All(&[at_least(q("b1"), 60)]),
        Severity::Positive,
        "Automotive: ISO 21434 + CRA alignment is working. Maintain integrated cybersecurity approach.",
    ),
    rule(
        Predicate::All(&[below(q("c1"), 50)]),
        Severity::Warning,
        "Vehicle OTA update gaps. CRA + UNECE R155 both require field update capability with rollback.",
    ),
    rule(
        Predicate::All(&[at_least(q("d3"), 60)]),
        Severity::Positive,
        "Good disclosure readiness. Align CRA ENISA with type-approval authority notifications.",
    ),
];

static FINANCIAL_RULES: &[InsightRule] = &[
    rule(
        Predicate::All(&[at_least(q("b1"), 60)]),
        Severity::Positive,
        "PCI-DSS scanning foundation strong. CRA adds exploitability assessment beyond vulnerability discovery.",
    ),
    rule(
        Predicate::All(&[below(q("d3"), 40)]),
        Severity::Critical,
        "FinTech: CRA + DORA dual reporting. ENISA for product vulns, national authority for operational incidents.",
    ),
    rule(
        Predicate::All(&[at_least(q("b4"), 70)]),
        Severity::Positive,
        "Strong cryptographic posture. Maintain CBOM and prepare for post-quantum migration planning.",
    ),
];

static GENERIC_RULES: &[InsightRule] = &[
    rule(
        Predicate::All(&[at_least(Metric::Overall, 60)]),
        Severity::Positive,
        "Solid foundation across CRA requirements. Focus on sector-specific regulations next.",
    ),
    rule(
        Predicate::All(&[below(q("d3"), 40)]),
        Severity::Warning,
        "ENISA reporting capability essential. First enforced obligation (Sep 2026) — build workflows now.",
    ),
];

pub(crate) fn sector_rules(sector: Sector) -> &'static [InsightRule] {
    match sector {
        Sector::Healthcare => HEALTHCARE_RULES,
        Sector::Iot => IOT_RULES,
        Sector::Industrial => INDUSTRIAL_RULES,
        Sector::Automotive => AUTOMOTIVE_RULES,
        Sector::Financial => FINANCIAL_RULES,
        Sector::Generic => GENERIC_RULES,
    }
}

pub(crate) static CROSS_CUTTING_RULES: &[InsightRule] = &[
    rule(
        Predicate::All(&[at_least(q("d1"), 60), below(q("d2"), 40)]),
        Severity::Warning,
        "SBOM generated but no continuous vulnerability monitoring — the inventory isn't driving ongoing security.",
    ),
    rule(
        Predicate::All(&[at_least(q("b1"), 60), below(q("c1"), 40)]),
        Severity::Warning,
        "Strong scanning but weak update mechanism — you find vulns but can't ship fixes efficiently.",
    ),
    rule(
        Predicate::All(&[at_least(q("b3"), 60), below(q("c3"), 40)]),
        Severity::Warning,
        "Good authentication but poor logging — unauthorized access attempts may go undetected.",
    ),
    rule(
        Predicate::All(&[at_least(q("a1"), 60), below(q("e1"), 40)]),
        Severity::Warning,
        "Risk assessment done but not in technical documentation — evidence unavailable for conformity.",
    ),
    InsightRule {
        predicate: Predicate::All(&[below(q("d3"), 30)]),
        severity: Severity::Critical,
        message: Message::Text(
            "Vulnerability disclosure and ENISA reporting are the first enforced obligations (Sep 2026). Critical gap.",
        ),
        unless_mentioned: Some("ENISA"),
    },
    rule(
        Predicate::All(&[at_least(q("d2"), 60), below(q("d4"), 30)]),
        Severity::Warning,
        "Vulns handled internally but no public advisories. Part II §(4) requires disclosure of fixes.",
    ),
    rule(
        Predicate::All(&[below(q("a4"), 30)]),
        Severity::Critical,
        "Build pipeline security gap. Annex VII §2(c) requires documented, secured production processes.",
    ),
    rule(
        Predicate::All(&[below(q("c6"), 30), at_least(Metric::Overall, 40)]),
        Severity::Warning,
        "No recall procedures. Art. 13(10) requires ability to withdraw non-conformant products.",
    ),
    InsightRule {
        predicate: Predicate::All(&[
            at_least(Metric::Overall, 60),
            below(Metric::Confidence, 40),
        ]),
        severity: Severity::Info,
        message: Message::LowConfidence,
        unless_mentioned: None,
    },
    rule(
        Predicate::All(&[
            at_least(Metric::Category(Category::VulnerabilityManagement), 70),
            at_least(Metric::Category(Category::RiskAndDesign), 60),
        ]),
        Severity::Positive,
        "Strong vuln management + risk governance = solid compliance foundation.",
    ),
];
