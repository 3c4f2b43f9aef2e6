use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Generic,
    Healthcare,
    Iot,
    Industrial,
    Automotive,
    Financial,
}

impl Sector {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Generic,
            Self::Healthcare,
            Self::Iot,
            Self::Industrial,
            Self::Automotive,
            Self::Financial,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Healthcare => "healthcare",
            Self::Iot => "iot",
            Self::Industrial => "industrial",
            Self::Automotive => "automotive",
            Self::Financial => "financial",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "General / Cross-Sector",
            Self::Healthcare => "Healthcare / MedTech",
            Self::Iot => "IoT / Consumer Electronics",
            Self::Industrial => "Industrial / ICS",
            Self::Automotive => "Automotive / Mobility",
            Self::Financial => "Financial / FinTech",
        }
    }
}

impl FromStr for Sector {
    type Err = FacetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|sector| sector.key() == normalized)
            .ok_or_else(|| FacetError::UnknownSector(value.to_string()))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How the assessed product is built and deployed.
///
/// `Hybrid` describes a connected ecosystem and satisfies every single-type
/// predicate at once; see [`ArchitectureType::satisfies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchitectureType {
    Samd,
    Embedded,
    Cloud,
    Hybrid,
}

impl ArchitectureType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Samd, Self::Embedded, Self::Cloud, Self::Hybrid]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Samd => "samd",
            Self::Embedded => "embedded",
            Self::Cloud => "cloud",
            Self::Hybrid => "hybrid",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Samd => "Pure Software",
            Self::Embedded => "Embedded / Firmware",
            Self::Cloud => "Cloud / SaaS",
            Self::Hybrid => "Multi-Component",
        }
    }

    /// Whether this architecture matches a catalog predicate gated on `required`.
    pub const fn satisfies(self, required: ArchitectureType) -> bool {
        matches!(self, Self::Hybrid) || self as u8 == required as u8
    }
}

impl FromStr for ArchitectureType {
    type Err = FacetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|architecture| architecture.key() == normalized)
            .ok_or_else(|| FacetError::UnknownArchitecture(value.to_string()))
    }
}

impl fmt::Display for ArchitectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The (sector, architecture) pair that parameterizes the question catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetSelection {
    pub sector: Sector,
    pub architecture: ArchitectureType,
}

impl FacetSelection {
    pub const fn new(sector: Sector, architecture: ArchitectureType) -> Self {
        Self {
            sector,
            architecture,
        }
    }

    /// Parse raw facet values, failing on anything unrecognized.
    pub fn parse(sector: &str, architecture: &str) -> Result<Self, FacetError> {
        Ok(Self::new(sector.parse()?, architecture.parse()?))
    }

    pub fn all() -> Vec<Self> {
        Sector::ordered()
            .into_iter()
            .flat_map(|sector| {
                ArchitectureType::ordered()
                    .into_iter()
                    .map(move |architecture| Self::new(sector, architecture))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FacetError {
    #[error("unknown sector '{0}'")]
    UnknownSector(String),
    #[error("unknown architecture type '{0}'")]
    UnknownArchitecture(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "A")]
    RiskAndDesign,
    #[serde(rename = "B")]
    ProductSecurity,
    #[serde(rename = "C")]
    Operational,
    #[serde(rename = "D")]
    VulnerabilityManagement,
    #[serde(rename = "E")]
    Documentation,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::RiskAndDesign,
            Self::ProductSecurity,
            Self::Operational,
            Self::VulnerabilityManagement,
            Self::Documentation,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::RiskAndDesign => "A",
            Self::ProductSecurity => "B",
            Self::Operational => "C",
            Self::VulnerabilityManagement => "D",
            Self::Documentation => "E",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RiskAndDesign => "Risk & Design",
            Self::ProductSecurity => "Product Security",
            Self::Operational => "Operational",
            Self::VulnerabilityManagement => "Vulnerability Mgmt",
            Self::Documentation => "Documentation",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::RiskAndDesign => "Risk & Design Governance",
            Self::ProductSecurity => "Product Security Properties",
            Self::Operational => "Operational & Lifecycle Security",
            Self::VulnerabilityManagement => "Vulnerability Management & Disclosure",
            Self::Documentation => "Documentation & Conformity",
        }
    }
}

/// Six-point maturity scale. `NotApplicable` removes an item from aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    NotApplicable = 0,
    None = 1,
    Initial = 2,
    Developing = 3,
    Established = 4,
    Optimized = 5,
}

impl Rating {
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::None => "None",
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Optimized => "Optimized",
        }
    }

    pub const fn is_applicable(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }

    /// Rated `None` or `Initial`.
    pub const fn is_weak(self) -> bool {
        matches!(self, Self::None | Self::Initial)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotApplicable),
            1 => Ok(Self::None),
            2 => Ok(Self::Initial),
            3 => Ok(Self::Developing),
            4 => Ok(Self::Established),
            5 => Ok(Self::Optimized),
            other => Err(RatingOutOfRange(other)),
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating {0} is outside the 0-5 maturity scale")]
pub struct RatingOutOfRange(pub u8);

/// Annex III functions that push an in-scope product into Class II.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalFunction {
    Iam,
    Browser,
    Password,
    Vpn,
    Firewall,
    Crypto,
    Ics,
    Smartmeter,
}

impl CriticalFunction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iam => "Identity & Access Management",
            Self::Browser => "Web Browser",
            Self::Password => "Password Manager",
            Self::Vpn => "VPN (Virtual Private Network)",
            Self::Firewall => "Firewall / Network Security",
            Self::Crypto => "Cryptographic Hardware",
            Self::Ics => "ICS/SCADA",
            Self::Smartmeter => "Smart Meter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductClass {
    #[serde(rename = "I")]
    ClassI,
    #[serde(rename = "II")]
    ClassII,
}

impl ProductClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClassI => "Class I (Important)",
            Self::ClassII => "Class II (Critical)",
        }
    }
}

/// Scope and criticality answers collected before the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationFacts {
    #[serde(default)]
    pub in_scope: Option<bool>,
    #[serde(default)]
    pub critical_functions: Vec<CriticalFunction>,
}

impl ClassificationFacts {
    pub fn product_class(&self) -> Option<ProductClass> {
        match self.in_scope {
            Some(true) if self.critical_functions.is_empty() => Some(ProductClass::ClassI),
            Some(true) => Some(ProductClass::ClassII),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Positive,
    Info,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Positive => "Positive",
            Self::Info => "Info",
        }
    }
}
