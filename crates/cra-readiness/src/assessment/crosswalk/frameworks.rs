use super::super::domain::Sector;

/// Authoring-time estimate of how far an external framework already covers each question.
#[derive(Debug)]
pub(crate) struct FrameworkTable {
    pub sector: Sector,
    pub framework: &'static str,
    pub summary: &'static str,
    pub coverage: &'static [(&'static str, u8)],
}

impl FrameworkTable {
    pub(crate) fn coverage_for(&self, question_id: &str) -> u8 {
        self.coverage
            .iter()
            .find(|(id, _)| *id == question_id)
            .map(|(_, value)| *value)
            .unwrap_or(0)
    }
}

pub(crate) fn table_for(sector: Sector) -> &'static FrameworkTable {
    match sector {
        Sector::Healthcare => &HEALTHCARE,
        Sector::Iot => &IOT,
        Sector::Industrial => &INDUSTRIAL,
        Sector::Automotive => &AUTOMOTIVE,
        Sector::Financial => &FINANCIAL,
        Sector::Generic => &GENERIC,
    }
}

static HEALTHCARE: FrameworkTable = FrameworkTable {
    sector: Sector::Healthcare,
    framework: "FDA Section 524B",
    summary: "Existing FDA 524B work provides strong CRA foundation. Focus gaps: ENISA reporting, public disclosure.",
    coverage: &[
        ("a1", 85), ("a2", 90), ("a3", 70), ("a4", 60),
        ("b1", 80), ("b2", 50), ("b3", 65), ("b4", 75), ("b5", 40),
        ("c1", 70), ("c2", 30), ("c3", 55), ("c4", 25), ("c5", 75), ("c6", 50),
        ("d1", 95), ("d2", 80), ("d3", 45), ("d4", 40),
        ("e1", 60), ("e2", 35), ("e3", 10),
    ],
};

static IOT: FrameworkTable = FrameworkTable {
    sector: Sector::Iot,
    framework: "RED (2014/53/EU) Art. 3.3",
    summary: "Radio Equipment Directive (RED) cybersecurity requirements now align with CRA. Leverage for dual compliance.",
    coverage: &[
        ("a1", 40), ("a2", 50), ("a3", 30), ("a4", 20),
        ("b1", 60), ("b2", 70), ("b3", 50), ("b4", 55), ("b5", 30),
        ("c1", 40), ("c2", 20), ("c3", 35), ("c4", 60), ("c5", 25), ("c6", 30),
        ("d1", 50), ("d2", 40), ("d3", 30), ("d4", 25),
        ("e1", 35), ("e2", 45), ("e3", 50),
    ],
};

static INDUSTRIAL: FrameworkTable = FrameworkTable {
    sector: Sector::Industrial,
    framework: "IEC 62443",
    summary: "IEC 62443 industrial security standards overlap significantly. CRA adds SBOM and disclosure requirements.",
    coverage: &[
        ("a1", 90), ("a2", 85), ("a3", 60), ("a4", 50),
        ("b1", 70), ("b2", 80), ("b3", 90), ("b4", 85), ("b5", 75),
        ("c1", 60), ("c2", 40), ("c3", 80), ("c4", 45), ("c5", 70), ("c6", 55),
        ("d1", 65), ("d2", 75), ("d3", 50), ("d4", 45),
        ("e1", 70), ("e2", 50), ("e3", 40),
    ],
};

static AUTOMOTIVE: FrameworkTable = FrameworkTable {
    sector: Sector::Automotive,
    framework: "ISO 21434 / UNECE R155",
    summary: "ISO 21434 + UNECE R155 provide strong cybersecurity base. CRA adds EU market surveillance layer.",
    coverage: &[
        ("a1", 95), ("a2", 90), ("a3", 75), ("a4", 65),
        ("b1", 85), ("b2", 70), ("b3", 75), ("b4", 80), ("b5", 60),
        ("c1", 80), ("c2", 50), ("c3", 70), ("c4", 40), ("c5", 85), ("c6", 70),
        ("d1", 75), ("d2", 85), ("d3", 60), ("d4", 55),
        ("e1", 80), ("e2", 60), ("e3", 70),
    ],
};

static FINANCIAL: FrameworkTable = FrameworkTable {
    sector: Sector::Financial,
    framework: "PCI-DSS v4.0",
    summary: "PCI-DSS already covers many product security controls. CRA adds SBOM, ENISA reporting, support period.",
    coverage: &[
        ("a1", 70), ("a2", 75), ("a3", 80), ("a4", 70),
        ("b1", 90), ("b2", 85), ("b3", 95), ("b4", 90), ("b5", 65),
        ("c1", 75), ("c2", 50), ("c3", 85), ("c4", 70), ("c5", 60), ("c6", 55),
        ("d1", 80), ("d2", 85), ("d3", 50), ("d4", 60),
        ("e1", 65), ("e2", 50), ("e3", 45),
    ],
};

static GENERIC: FrameworkTable = FrameworkTable {
    sector: Sector::Generic,
    framework: "ISO 27001",
    summary: "ISO 27001 ISMS provides process foundation. CRA requires product-specific attestation and vulnerability management.",
    coverage: &[
        ("a1", 75), ("a2", 70), ("a3", 65), ("a4", 60),
        ("b1", 70), ("b2", 65), ("b3", 80), ("b4", 75), ("b5", 55),
        ("c1", 60), ("c2", 40), ("c3", 75), ("c4", 65), ("c5", 70), ("c6", 50),
        ("d1", 70), ("d2", 75), ("d3", 45), ("d4", 50),
        ("e1", 65), ("e2", 50), ("e3", 55),
    ],
};

/// A CRA clause and the questions that evidence it.
#[derive(Debug)]
pub(crate) struct ArticleClause {
    pub clause: &'static str,
    pub label: &'static str,
    pub question_ids: &'static [&'static str],
}

const fn clause(
    clause: &'static str,
    label: &'static str,
    question_ids: &'static [&'static str],
) -> ArticleClause {
    ArticleClause {
        clause,
        label,
        question_ids,
    }
}

pub(crate) static ARTICLE_CLAUSES: &[ArticleClause] = &[
    clause("§(1)", "Risk-based design", &["a1", "a2"]),
    clause("§(2)(a)", "No known vulns", &["b1", "d2"]),
    clause("§(2)(b)", "Secure defaults", &["b2"]),
    clause("§(2)(c)", "Security updates", &["c1", "c2"]),
    clause("§(2)(d)", "Auth & access", &["b3"]),
    clause("§(2)(e)", "Confidentiality", &["b4"]),
    clause("§(2)(f)", "Integrity", &["b4"]),
    clause("§(2)(g)", "Data minimization", &["c4"]),
    clause("§(2)(h-i)", "Availability", &["b5"]),
    clause("§(2)(j-k)", "Attack surface", &["a2", "b5"]),
    clause("§(2)(l)", "Monitoring", &["c3"]),
    clause("§(2)(m)", "Data removal", &["c4"]),
    clause("PtII§1", "SBOM", &["d1"]),
    clause("PtII§2-3", "Vuln handling", &["d2"]),
    clause("PtII§4", "Public advisory", &["d4"]),
    clause("PtII§5-8", "CVD & updates", &["d3", "c1"]),
    clause("Art.13(5)", "Supply chain", &["a3"]),
    clause("Art.13(7)", "Post-market", &["c5"]),
    clause("Art.13(10)", "Recall", &["c6"]),
    clause("Art.14", "ENISA reporting", &["d3"]),
    clause("AnnexII", "User info", &["e2"]),
    clause("AnnexVII", "Tech docs", &["e1", "a4"]),
    clause("AnnexV/VIII", "Conformity", &["e3"]),
];
