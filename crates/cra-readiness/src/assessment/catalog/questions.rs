use super::{ExtraRule, Guidance, QuestionTemplate, SubCriterion, Variants};
use crate::assessment::domain::ArchitectureType::{Cloud, Embedded, Hybrid, Samd};
use crate::assessment::domain::Category::{
    Documentation, Operational, ProductSecurity, RiskAndDesign, VulnerabilityManagement,
};
use crate::assessment::domain::Sector::{Automotive, Financial, Healthcare, Industrial, Iot};

const fn item(id: &'static str, text: &'static str) -> SubCriterion {
    SubCriterion { id, text }
}

const fn plain(generic: Variants) -> Guidance {
    Guidance {
        generic,
        sector_overrides: &[],
    }
}

pub(super) fn templates() -> &'static [QuestionTemplate] {
    QUESTION_TEMPLATES
}

static QUESTION_TEMPLATES: &[QuestionTemplate] = &[
    // Risk & Design Governance
    QuestionTemplate {
        id: "a1",
        category: RiskAndDesign,
        title: "Cybersecurity Risk Assessment",
        body: "How mature is your process for assessing cybersecurity risks across the product lifecycle?",
        citation: "Annex I §(1) · Art. 13(2)",
        guidance: Guidance {
            generic: Variants {
                by_architecture: &[
                    (Embedded, "Physical and software threats must be systematically identified and assessed."),
                    (Cloud, "Cloud environments require assessment of service isolation, provider dependencies, and data residency."),
                ],
                otherwise: "Risk assessment must cover your product's full attack surface and operational context.",
            },
            sector_overrides: &[
                (Healthcare, Variants {
                    by_architecture: &[
                        (Embedded, "Medical firmware must assess physical vectors (side-channel, fault injection), physiological impact, and safety-security tradeoffs."),
                        (Cloud, "Assess multi-tenancy isolation, ePHI protection, clinical workflow disruption, and provider compromise scenarios."),
                    ],
                    otherwise: "Clinical decision support requires assessing algorithmic risks, training data integrity, and deployment environment variability.",
                }),
                (Iot, Variants {
                    by_architecture: &[
                        (Embedded, "Consumer devices must assess physical access scenarios, factory reset attacks, and local network compromise."),
                    ],
                    otherwise: "Smart devices require assessment of privacy invasion, physical safety (locks, cameras), and botnet recruitment risks.",
                }),
                (Industrial, Variants {
                    by_architecture: &[
                        (Embedded, "ICS/SCADA must assess operational technology threats, safety system bypass, and process integrity attacks."),
                    ],
                    otherwise: "Critical infrastructure requires assessment of catastrophic failure scenarios, cascading impacts, and nation-state threats.",
                }),
                (Automotive, Variants {
                    by_architecture: &[
                        (Embedded, "Vehicle systems must assess CAN bus attacks, physical tampering, safety-critical function compromise."),
                    ],
                    otherwise: "Connected vehicles require assessment of V2X threats, remote control scenarios, and crash-inducing attacks.",
                }),
                (Financial, Variants {
                    by_architecture: &[
                        (Embedded, "Payment hardware must assess physical tampering, side-channel attacks on cryptographic operations."),
                    ],
                    otherwise: "Financial systems require assessment of transaction integrity, fund theft scenarios, and regulatory compliance gaps.",
                }),
            ],
        },
        base: &[
            item("a1_s1", "A documented cybersecurity risk assessment methodology exists and is followed"),
            item("a1_s2", "Risk assessment performed before initial release and updated at each lifecycle phase"),
            item("a1_s3", "Identified risks are scored, prioritized, and linked to mitigations"),
            item("a1_s4", "Residual risks documented with justification for acceptance"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[item("a1_s5", "Physical and hardware-level vectors (glitching, side-channel, bus probing) included")],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[item("a1_s6", "Cloud-specific risks (tenant isolation, provider compromise, region failover) assessed")],
            },
        ],
        fallback: &[item("a1_s7", "Deployment environment variability factored into risk analysis")],
        class_ii_guidance: Some("Notified Body will rigorously audit risk assessment methodology, completeness, and traceability. Document all residual risks and mitigation measures."),
    },
    QuestionTemplate {
        id: "a2",
        category: RiskAndDesign,
        title: "Threat Modeling & Attack Surface",
        body: "Do you perform systematic threat modeling tied to your architecture, with results feeding into security requirements?",
        citation: "Annex I §(2)(j-k) · Art. 13(2)",
        guidance: Guidance {
            generic: Variants {
                by_architecture: &[
                    (Embedded, "Model threats against debug interfaces, firmware extraction, and bootloader attacks."),
                    (Cloud, "Include API abuse, container escape, and management plane compromise."),
                ],
                otherwise: "Map trust boundaries and model attack paths through all interfaces.",
            },
            sector_overrides: &[
                (Healthcare, Variants {
                    by_architecture: &[
                        (Embedded, "Medical devices: model JTAG/SWD attacks, drug library tampering, alarm suppression, infusion rate manipulation."),
                        (Cloud, "Healthcare cloud: model ePHI exfiltration, clinical workflow disruption, EHR integration attacks, FHIR API abuse."),
                    ],
                    otherwise: "Model clinical impact scenarios: diagnosis manipulation, false alerts, therapy interruption.",
                }),
                (Iot, Variants {
                    by_architecture: &[
                        (Embedded, "Consumer IoT: model local network attacks, device takeover, privacy invasion (cameras/mics), physical safety (locks/thermostats)."),
                    ],
                    otherwise: "Smart home: model hub compromise, cloud disconnect scenarios, voice assistant abuse, automation manipulation.",
                }),
                (Industrial, Variants {
                    by_architecture: &[
                        (Embedded, "ICS/SCADA: model Modbus/DNP3 attacks, PLC logic injection, HMI manipulation, safety system bypass."),
                    ],
                    otherwise: "Industrial: model process disruption, setpoint manipulation, sensor spoofing, cascading failures to physical plant.",
                }),
                (Automotive, Variants {
                    by_architecture: &[
                        (Embedded, "Vehicle systems: model CAN bus injection, ECU spoofing, infotainment-to-CAN bridging, OBD port attacks."),
                    ],
                    otherwise: "Connected vehicle: model V2X message spoofing, remote control scenarios, fleet management compromise, charging station attacks.",
                }),
                (Financial, Variants {
                    by_architecture: &[
                        (Embedded, "Payment terminals: model side-channel attacks on PIN entry, card skimming, firmware tampering."),
                    ],
                    otherwise: "FinTech: model transaction manipulation, account takeover, fund exfiltration, regulatory reporting tampering.",
                }),
            ],
        },
        base: &[
            item("a2_s1", "A recognized methodology (STRIDE, PASTA, LINDDUN, attack trees) is applied"),
            item("a2_s2", "Threat models tied to architecture diagrams with trust boundaries and data flows"),
            item("a2_s3", "All external interfaces (network, physical, API, debug) enumerated"),
            item("a2_s4", "Findings result in traceable security requirements or design changes"),
            item("a2_s5", "Threat models updated when architecture changes or new intelligence emerges"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[item("a2_s6", "Physical interfaces (JTAG, SWD, UART, USB) assessed for unauthorized access")],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[item("a2_s7", "Cloud management APIs and CI/CD interfaces included in attack surface")],
            },
            ExtraRule {
                when: Hybrid,
                sub_criteria: &[item("a2_s8", "Inter-component channels modeled as separate trust boundaries")],
            },
        ],
        fallback: &[item("a2_s9", "Third-party integrations included in attack surface model")],
        class_ii_guidance: Some("Threat modeling must cover both IT and product-specific attack vectors. Notified Body expects STRIDE/PASTA or equivalent formal methodology with documented assumptions."),
    },
    QuestionTemplate {
        id: "a3",
        category: RiskAndDesign,
        title: "Third-Party Due Diligence",
        body: "When integrating third-party components, do you assess their cybersecurity posture and maintain due diligence evidence?",
        citation: "Annex I Part II §(1) · Art. 13(5)",
        guidance: Guidance {
            generic: Variants {
                by_architecture: &[
                    (Embedded, "Supply chains include RTOSes, BSPs, HALs, and binary components with varying transparency."),
                    (Cloud, "Cloud dependencies span container images, OSS libraries, managed services, and IaC modules."),
                ],
                otherwise: "Evaluate component maintenance health, license compliance, and vulnerability response track records.",
            },
            sector_overrides: &[
                (Healthcare, Variants::fixed("Medical devices: FDA 524B requires SBOM + vulnerability management. CRA adds EU enforcement. Assess supplier MDR compliance.")),
                (Iot, Variants::fixed("Consumer IoT: High OSS dependency, often with weak supplier vetting. Assess IoT-specific components (Zigbee stacks, voice SDKs).")),
                (Industrial, Variants::fixed("ICS: Legacy components with minimal updates, proprietary protocols. Assess OT vendor security posture, not just IT.")),
                (Automotive, Variants::fixed("Automotive: Tier supplier chains, ECU software stacks, AUTOSAR components. Assess functional safety + cybersecurity integration.")),
                (Financial, Variants::fixed("FinTech: Payment SDKs, crypto libraries, KYC/AML services. Assess PCI-DSS compliance, SOC 2 attestations.")),
            ],
        },
        base: &[
            item("a3_s1", "Security assessment criteria exist for evaluating components before integration"),
            item("a3_s2", "Suppliers provide SBOMs or equivalent component transparency"),
            item("a3_s3", "Third-party versions tracked and monitored for new vulnerabilities"),
            item("a3_s4", "Due diligence evidence maintained for audit"),
            item("a3_s5", "Contracts include vulnerability notification and patching commitments"),
            item("a3_s6", "FOSS components assessed for maintenance health before adoption"),
            item("a3_s7", "FOSS license compliance tracked with no patching conflicts"),
        ],
        extras: &[ExtraRule {
            when: Embedded,
            sub_criteria: &[item("a3_s8", "Binary blobs assessed despite lack of source access")],
        }],
        fallback: &[item("a3_s9", "Transitive/indirect dependencies assessed, not just direct imports")],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "a4",
        category: RiskAndDesign,
        title: "Secure Build Pipeline",
        body: "Is your build and production process secured against supply chain attacks?",
        citation: "Annex VII §2(c) · Art. 13(4)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Firmware build chains are high-value targets. Compromised toolchain can inject backdoors."),
                (Cloud, "CI/CD pipelines, container registries, IaC repos are all attack surfaces."),
                (Samd, "ML training pipelines need integrity verification of data, models, and deployments."),
            ],
            otherwise: "Each component's build chain is an independent vector.",
        }),
        base: &[
            item("a4_s1", "Build pipelines protected: access controls, audit logs, integrity verification"),
            item("a4_s2", "Repos enforce branch protection, signed commits, code review"),
            item("a4_s3", "Build artifacts signed and verified before deployment"),
            item("a4_s4", "Build environments hardened, ephemeral, reproducible"),
            item("a4_s5", "Dependencies pinned to specific versions from verified sources"),
            item("a4_s6", "Production processes documented per Annex VII §2(c)"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[item("a4_s7", "Firmware toolchains verified against known-good versions")],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[item("a4_s8", "Container images from trusted registries, scanned, rebuilt for updates")],
            },
        ],
        fallback: &[],
        class_ii_guidance: None,
    },
    // Product Security Properties
    QuestionTemplate {
        id: "b1",
        category: ProductSecurity,
        title: "Vulnerability-Free Release",
        body: "Can you demonstrate your product ships without known exploitable vulnerabilities?",
        citation: "Annex I §(2)(a) · Art. 13(1)",
        guidance: Guidance {
            generic: Variants::fixed("The CRA's most binary requirement: known exploitable vulnerabilities at release = non-compliant. Attestation required."),
            sector_overrides: &[
                (Healthcare, Variants {
                    by_architecture: &[
                        (Embedded, "FDA 524B + CRA both require vuln-free release. Binary-level firmware analysis beyond source SCA essential."),
                    ],
                    otherwise: "Healthcare cloud must gate ePHI-touching deployments. Document HIPAA + CRA dual compliance.",
                }),
                (Iot, Variants::fixed("Consumer IoT frequently ships with known CVEs. CRA changes the game: no more 'update later' approach. Pre-release gates mandatory.")),
                (Industrial, Variants::fixed("ICS often runs legacy components with unfixable CVEs. CRA requires risk acceptance documentation, not just ignoring them.")),
                (Automotive, Variants::fixed("Vehicle software: functional safety + cybersecurity. ISO 21434 + CRA alignment. Long validation cycles demand early vuln prevention.")),
                (Financial, Variants::fixed("Payment systems: PCI-DSS already requires vuln scanning. CRA adds exploitability assessment and formal attestation requirements.")),
            ],
        },
        base: &[
            item("b1_s1", "Automated scanning (SCA, SAST, container) runs on every build"),
            item("b1_s2", "Release gate blocks deployment on critical exploitable vulnerabilities"),
            item("b1_s3", "Exploitability assessed (EPSS, KEV), not just CVSS"),
            item("b1_s4", "Scan results preserved with timestamps and commit references"),
            item("b1_s5", "Formal attestation: no known exploitable vulns at release"),
            item("b1_s6", "False positives documented rather than silently suppressed"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "b2",
        category: ProductSecurity,
        title: "Secure-by-Default Configuration",
        body: "Is your product shipped hardened: no default credentials, minimal services, encryption on?",
        citation: "Annex I §(2)(b) · Art. 13(1)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Devices routinely ship with factory credentials and open debug ports. Each is a violation."),
                (Cloud, "Default IAM policies, storage permissions, logging must be secure from first deploy."),
            ],
            otherwise: "CRA requires both a secure default AND ability to reset to it.",
        }),
        base: &[
            item("b2_s1", "No default, shared, or hardcoded credentials in shipping config"),
            item("b2_s2", "Unnecessary services, ports, protocols disabled by default"),
            item("b2_s3", "Encryption at rest and in transit enabled by default"),
            item("b2_s4", "Documented hardened baseline defines the secure state"),
            item("b2_s5", "Factory reset returns to documented baseline"),
            item("b2_s6", "Deployment hardening guide provided to customers"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[item("b2_s7", "Debug interfaces disabled or locked in production firmware")],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[item("b2_s8", "Cloud defaults enforce least-privilege IAM, private networking, audit logs")],
            },
        ],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "b3",
        category: ProductSecurity,
        title: "Authentication & Access Control",
        body: "Does your product enforce proportionate auth, RBAC, and unauthorized access detection?",
        citation: "Annex I §(2)(d) · Art. 13(1)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Clinical devices need break-glass procedures: audited, time-limited."),
                (Cloud, "Multi-tenancy demands tenant isolation, OAuth/OIDC rigor, cross-tenant prevention."),
            ],
            otherwise: "CRA requires both prevention (auth) and detection (reporting unauthorized access).",
        }),
        base: &[
            item("b3_s1", "Authentication proportionate to risk (MFA for admin, risk-based for clinical)"),
            item("b3_s2", "Role-based access control segregates permissions"),
            item("b3_s3", "Sessions enforce timeouts and re-auth for sensitive ops"),
            item("b3_s4", "Failed auth and unauthorized access logged with alerting"),
            item("b3_s5", "Password policies: complexity, rotation, breach-list checking"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[
                    item("b3_s6", "Break-glass access is time-limited, auditable, non-persistent"),
                    item("b3_s7", "Physical interface access requires auth, not just presence"),
                ],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[
                    item("b3_s8", "Tenant isolation verified: no cross-tenant leakage"),
                    item("b3_s9", "API keys/service accounts: scoped permissions, rotation, monitoring"),
                ],
            },
        ],
        fallback: &[item("b3_s10", "Credential storage uses modern hashing (bcrypt, Argon2)")],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "b4",
        category: ProductSecurity,
        title: "Cryptographic Protection",
        body: "Does your product protect confidentiality and integrity with current-generation cryptography?",
        citation: "Annex I §(2)(e-f) · Art. 13(1)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Constrained devices may lack hardware crypto. TPM/secure element essential."),
                (Cloud, "TLS 1.2+ on all channels including internal. HSM/KMS for keys."),
            ],
            otherwise: "State of the art per CRA: deprecated algorithms are explicit violations.",
        }),
        base: &[
            item("b4_s1", "Data at rest encrypted (AES-256, ChaCha20)"),
            item("b4_s2", "All transit uses TLS 1.2+ including internal service-to-service"),
            item("b4_s3", "No deprecated algorithms (MD5, SHA-1, DES, RC4, RSA <2048)"),
            item("b4_s4", "Key lifecycle documented: generation, storage, rotation, revocation, destruction"),
            item("b4_s5", "Integrity mechanisms detect unauthorized modification"),
            item("b4_s6", "Cryptographic inventory (CBOM) identifies all algorithms and key lengths"),
            item("b4_s7", "Integrity violations reported to users per §(2)(f)"),
        ],
        extras: &[ExtraRule {
            when: Embedded,
            sub_criteria: &[item("b4_s8", "Keys in hardware-backed storage (TPM, secure element)")],
        }],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "b5",
        category: ProductSecurity,
        title: "Availability & Resilience",
        body: "Does your product maintain essential functions during incidents and avoid impacting connected networks?",
        citation: "Annex I §(2)(h-i-k) · Art. 13(1)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Bedside monitor under DoS must display vitals. Graceful degradation is safety-critical."),
                (Cloud, "Multi-region failover, autoscaling, DDoS mitigation, defined RTOs/RPOs."),
            ],
            otherwise: "CRA requires self-resilience §(2)(h) and not harming others §(2)(i).",
        }),
        base: &[
            item("b5_s1", "Essential functions continue during incidents or connectivity loss"),
            item("b5_s2", "Graceful degradation defined and tested: fails safe, not open"),
            item("b5_s3", "DoS/DDoS mitigation in architecture"),
            item("b5_s4", "Recovery restores to secure state"),
            item("b5_s5", "Product doesn't negatively impact other network devices"),
            item("b5_s6", "Exploitation mitigation (ASLR, stack canaries, sandboxing)"),
        ],
        extras: &[ExtraRule {
            when: Hybrid,
            sub_criteria: &[item("b5_s7", "Cascading failures across components mapped and mitigated")],
        }],
        fallback: &[],
        class_ii_guidance: None,
    },
    // Operational & Lifecycle Security
    QuestionTemplate {
        id: "c1",
        category: Operational,
        title: "Security Update Mechanism",
        body: "Can you deliver security patches independently with integrity verification and auto-update?",
        citation: "Annex I §(2)(c) · Art. 13(8)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "OTA needs dual-bank flash, A/B partitioning, signature verification, power-fail resilience."),
                (Cloud, "Cloud enables rapid patching: zero-downtime, canary releases, automated rollback."),
            ],
            otherwise: "CRA §(2)(c) requires: auto updates default, opt-out, notification, postponement, separate from features.",
        }),
        base: &[
            item("c1_s1", "Security updates delivered independently from feature updates"),
            item("c1_s2", "Updates cryptographically signed and verified"),
            item("c1_s3", "Automatic updates enabled by default with opt-out"),
            item("c1_s4", "Users notified of updates and can temporarily postpone"),
            item("c1_s5", "Rollback to previous version"),
            item("c1_s6", "Infrastructure handles partial updates, interruptions, power loss"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[
                    item("c1_s7", "Anti-rollback prevents downgrade to vulnerable firmware"),
                    item("c1_s8", "Update process validated under IEC 62304"),
                ],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[item("c1_s9", "Zero-downtime deployment")],
            },
        ],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "c2",
        category: Operational,
        title: "Support Period",
        body: "Have you defined, published, and resourced a cybersecurity support period?",
        citation: "Art. 13(8-9)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Medical hardware: 10-15 year field life. 5-year CRA minimum may not satisfy procurement."),
                (Cloud, "Define what end of support means: feature freeze only, or patch cessation?"),
            ],
            otherwise: "Support period must be communicated at purchase and reflect expected use.",
        }),
        base: &[
            item("c2_s1", "Support period (minimum 5 years) reflects realistic usage"),
            item("c2_s2", "Communicated at or before purchase"),
            item("c2_s3", "Resources committed for entire period"),
            item("c2_s4", "End-of-support plan: notification, migration, decommissioning"),
            item("c2_s5", "Changes communicated proactively"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "c3",
        category: Operational,
        title: "Security Monitoring & Logging",
        body: "Does your product record security events with tamper protection and opt-out capability?",
        citation: "Annex I §(2)(l) · Art. 13(1)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Balance logging against storage/compute constraints. Syslog forwarding with tamper buffer."),
                (Cloud, "Centralized immutable logging. Multi-tenant must prevent cross-tenant log access."),
            ],
            otherwise: "CRA requires recording activity, monitoring, AND opt-out.",
        }),
        base: &[
            item("c3_s1", "Auth attempts, data access, config changes, anomalies logged"),
            item("c3_s2", "Logs include timestamp, actor, action, resource, outcome"),
            item("c3_s3", "Log integrity protected (write-once, chaining, external forward)"),
            item("c3_s4", "Retention meets regulatory requirements"),
            item("c3_s5", "Users can opt out of non-essential telemetry"),
            item("c3_s6", "External monitoring integration (SIEM, hospital SOC)"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[item("c3_s7", "Logging doesn't degrade real-time safety functions")],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[item("c3_s8", "Per-tenant audit log isolation")],
            },
        ],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "c4",
        category: Operational,
        title: "Data Minimization & Removal",
        body: "Does your product collect only necessary data and enable verified secure removal?",
        citation: "Annex I §(2)(g,m) · Art. 13(1)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Flash wear-leveling makes erasure complex. Cryptographic erasure more reliable."),
                (Cloud, "Deletion must cascade through stores, replicas, backups, CDN, logs."),
            ],
            otherwise: "CRA covers data minimization AND user ability to securely remove all data.",
        }),
        base: &[
            item("c4_s1", "Data collection reviewed for necessity"),
            item("c4_s2", "Users can permanently remove all personal data"),
            item("c4_s3", "Removal verified and auditable: actual destruction"),
            item("c4_s4", "Data transfer uses secure mechanisms"),
            item("c4_s5", "Data inventory: what, where, how long, why"),
            item("c4_s6", "Decommissioning procedure documented"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[item("c4_s7", "Cryptographic erasure accounts for wear-leveling and backup partitions")],
            },
            ExtraRule {
                when: Cloud,
                sub_criteria: &[item("c4_s8", "Deletion cascades to replicas, backups, CDN, analytics, logs")],
            },
        ],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "c5",
        category: Operational,
        title: "Post-Market Monitoring",
        body: "Do you systematically monitor deployed products for emerging risks and field incidents?",
        citation: "Art. 13(3), Art. 13(7)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Combine telemetry, field reports, hospital IT data, threat intel feeds."),
                (Cloud, "Balance monitoring depth with data minimization."),
                (Samd, "Monitor for adversarial inputs, model drift, integration failures."),
            ],
            otherwise: "Correlated monitoring: a vuln in one component may only be exploitable through another.",
        }),
        base: &[
            item("c5_s1", "Documented post-market monitoring plan actively executed"),
            item("c5_s2", "Threat intel feeds (CVE/NVD, CISA KEV) monitored"),
            item("c5_s3", "Field incidents reviewed for cybersecurity relevance"),
            item("c5_s4", "Deployed product behavior monitored for anomalies"),
            item("c5_s5", "Results feed back into risk assessment"),
            item("c5_s6", "Monitoring covers entire support period"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "c6",
        category: Operational,
        title: "Corrective Action & Recall",
        body: "Do you have procedures for corrective action including withdrawal or recall of non-conformant products?",
        citation: "Art. 13(10), Art. 13(21-23)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Hardware recall is expensive but CRA requires it when risk exists. Pre-plan escalation."),
                (Cloud, "Cloud can often remediate server-side, but must still notify authorities."),
            ],
            otherwise: "Applies whether non-conformity discovered internally or by market surveillance.",
        }),
        base: &[
            item("c6_s1", "Corrective action procedure for non-conformant products"),
            item("c6_s2", "Escalation paths: patch → update → withdrawal → recall"),
            item("c6_s3", "Authority notification procedures documented"),
            item("c6_s4", "User notification for corrective actions"),
            item("c6_s5", "Documentation available to authorities on request"),
            item("c6_s6", "Cessation planning for manufacturer discontinuation"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    // Vulnerability Management & Disclosure
    QuestionTemplate {
        id: "d1",
        category: VulnerabilityManagement,
        title: "SBOM Generation",
        body: "Do you generate and maintain a machine-readable SBOM covering at minimum top-level dependencies?",
        citation: "Annex I Part II §(1) · Art. 13(5)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Must include RTOS, BSP, vendor libs. C/C++ detection remains a gap."),
                (Cloud, "Per-artifact SBOMs plus system-level aggregate."),
            ],
            otherwise: "CycloneDX and SPDX are accepted machine-readable formats.",
        }),
        base: &[
            item("d1_s1", "SBOMs in CycloneDX or SPDX format"),
            item("d1_s2", "All top-level deps captured: name, version, supplier"),
            item("d1_s3", "Transitive deps included where tooling supports"),
            item("d1_s4", "Generation automated in build pipeline"),
            item("d1_s5", "Maintained through product lifecycle"),
            item("d1_s6", "Available to authorities on request"),
        ],
        extras: &[
            ExtraRule {
                when: Embedded,
                sub_criteria: &[item("d1_s7", "Binary components identified even without full dep trees")],
            },
            ExtraRule {
                when: Hybrid,
                sub_criteria: &[item("d1_s8", "System-level SBOM aggregates component SBOMs")],
            },
        ],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "d2",
        category: VulnerabilityManagement,
        title: "Vulnerability Handling",
        body: "Do you continuously identify, analyze, prioritize, and remediate vulnerabilities through the support period?",
        citation: "Annex I Part II §(2-3) · Art. 13(6)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Longer remediation cycles: balance IEC 62304 with CRA timeliness."),
                (Cloud, "Rapid patching but increased exposure velocity. Automated dep pipelines essential."),
            ],
            otherwise: "Required for entire support period, not just initial release.",
        }),
        base: &[
            item("d2_s1", "New vulns identified through continuous automated monitoring"),
            item("d2_s2", "Each vuln analyzed for applicability, exploitability, impact"),
            item("d2_s3", "Remediation SLAs defined by severity"),
            item("d2_s4", "Security updates delivered without delay"),
            item("d2_s5", "Regular testing through support period"),
            item("d2_s6", "Vuln info shared with supply chain where relevant"),
            item("d2_s7", "Remediation decisions documented and traceable"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "d3",
        category: VulnerabilityManagement,
        title: "Disclosure & ENISA Reporting",
        body: "Have you published a CVD policy and prepared 24-hour ENISA notification capability?",
        citation: "Annex I Part II §(5-8) · Art. 14",
        guidance: Guidance {
            generic: Variants::fixed("First enforced CRA obligation (Sep 2026). 24h early warning → 72h notification → 14d final report. Pre-draft templates now."),
            sector_overrides: &[
                (Healthcare, Variants::fixed("Medical devices: align CRA ENISA + CISA ICS-CERT + FDA reporting. Three parallel workflows. Pre-configure thresholds: clinical impact triggers all three.")),
                (Iot, Variants::fixed("Consumer IoT: High vulnerability volume. Pre-configure triage to avoid false ENISA alarms. Botnet recruitment = reportable incident.")),
                (Industrial, Variants::fixed("ICS/SCADA: Critical infrastructure directive overlaps. ENISA + national CERT + sector regulator. Pre-map escalation paths by asset criticality.")),
                (Automotive, Variants::fixed("Automotive: CRA + UNECE R155 both require coordinated disclosure. Align ENISA reporting with type-approval authority notification.")),
                (Financial, Variants::fixed("FinTech: CRA + DORA (Digital Operational Resilience Act) dual reporting. ENISA for product, national authority for operational incidents.")),
            ],
        },
        base: &[
            item("d3_s1", "CVD policy published and accessible"),
            item("d3_s2", "Vulnerability reporting contact publicly documented"),
            item("d3_s3", "Early warning to ENISA within 24 hours"),
            item("d3_s4", "Technical notification within 72 hours"),
            item("d3_s5", "Final report within 14 days"),
            item("d3_s6", "Users notified with protective guidance"),
            item("d3_s7", "Secure advisory and patch distribution"),
            item("d3_s8", "Pre-drafted templates and designated reporters"),
            item("d3_s9", "Severe incidents reportable through same workflow"),
            item("d3_s10", "Escalation distinguishes vuln discovery from active incident"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "d4",
        category: VulnerabilityManagement,
        title: "Public Advisory",
        body: "Do you publicly disclose fixed vulnerabilities with affected products, severity, and remediation guidance?",
        citation: "Annex I Part II §(4) · Art. 13(6)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Align with ENISA and ICS-CERT advisory formats."),
                (Cloud, "Include API versions, regions, server-side vs. customer action."),
            ],
            otherwise: "CRA requires public disclosure of fixed vulns, separate from ENISA reporting.",
        }),
        base: &[
            item("d4_s1", "Fixed vulns publicly disclosed with description and impact"),
            item("d4_s2", "Affected and remediated versions identified"),
            item("d4_s3", "Severity via recognized system (CVSS, EPSS)"),
            item("d4_s4", "Clear remediation guidance for users"),
            item("d4_s5", "Published in consistent, discoverable location"),
            item("d4_s6", "Timing balances protection with patch availability"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    // Documentation & Conformity
    QuestionTemplate {
        id: "e1",
        category: Documentation,
        title: "Technical Documentation",
        body: "Does your technical file include architecture, risk assessment, test reports, standards, and SBOM?",
        citation: "Annex VII · Art. 31",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Must describe hardware security (secure boot, tamper protection, root of trust)."),
                (Cloud, "Shared responsibility matrix, infra topology, data flows, provider evidence."),
            ],
            otherwise: "510(k)/PMA covers ~60% of CRA technical file: add EU-specific elements.",
        }),
        base: &[
            item("e1_s1", "Product description with intended purpose"),
            item("e1_s2", "System architecture with component interactions"),
            item("e1_s3", "Risk assessment with threat analysis and treatment"),
            item("e1_s4", "Applied standards or certification schemes"),
            item("e1_s5", "Test reports verifying conformity"),
            item("e1_s6", "SBOM included or available on request"),
            item("e1_s7", "Documentation maintained through support period"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: Some("Technical documentation (Annex VII) will be comprehensively audited by Notified Body. Gaps or inconsistencies will delay conformity assessment. Target 90%+ maturity."),
    },
    QuestionTemplate {
        id: "e2",
        category: Documentation,
        title: "User Information (Annex II)",
        body: "Do end users receive information about secure setup, updates, reporting, data collection, and support?",
        citation: "Annex II · Art. 13(15-20)",
        guidance: plain(Variants {
            by_architecture: &[
                (Embedded, "Cover network segmentation, firewall rules, remote maintenance, decommissioning."),
                (Cloud, "Shared responsibility, data export/deletion, integration security, SLA."),
            ],
            otherwise: "Annex II: identity, contact, security properties, updates, support, decommissioning.",
        }),
        base: &[
            item("e2_s1", "Manufacturer identity and contact provided"),
            item("e2_s2", "Single cybersecurity contact accessible"),
            item("e2_s3", "Security properties in accessible language"),
            item("e2_s4", "Secure setup and operation instructions"),
            item("e2_s5", "Update process documented"),
            item("e2_s6", "Support period communicated"),
            item("e2_s7", "Decommissioning and data removal documented"),
            item("e2_s8", "Vulnerability reporting location accessible"),
            item("e2_s9", "Product identification for traceability (§3)"),
            item("e2_s10", "Known cybersecurity risks communicated (§5)"),
            item("e2_s11", "SBOM access info where available (§9)"),
            item("e2_s12", "Integration info for downstream compliance (§8f)"),
        ],
        extras: &[],
        fallback: &[],
        class_ii_guidance: None,
    },
    QuestionTemplate {
        id: "e3",
        category: Documentation,
        title: "Conformity Assessment",
        body: "Have you classified your product, identified the conformity route, and begun preparing the EU DoC?",
        citation: "Annexes III-V, VIII · Art. 6, 28, 32",
        guidance: Guidance {
            generic: Variants::fixed("EU Declaration of Conformity required. Class I uses self-assessment (Art. 28), Class II requires Notified Body (Art. 30). Retain documentation 10 years."),
            sector_overrides: &[
                (Healthcare, Variants {
                    by_architecture: &[
                        (Samd, "SaMD under MDR may be exempt from CRA, only where MDR achieves equivalent cybersecurity protection (Art. 2(2)). Verify applicability."),
                        (Embedded, "Art. 2(2) may exempt MDR devices with equivalent cybersecurity. Verify firmware vs software boundaries."),
                    ],
                    otherwise: "Components under MDR vs CRA must be mapped independently for hybrid medical systems.",
                }),
                (Iot, Variants::fixed("Consumer IoT often falls under Class I. Check Annex III for critical categories (smart meters, etc.).")),
                (Industrial, Variants::fixed("ICS/SCADA may be Class II critical (Annex III). Plan for Notified Body assessment if applicable.")),
                (Automotive, Variants::fixed("Automotive systems may already be covered by UNECE R155. CRA adds market surveillance layer.")),
                (Financial, Variants::fixed("Payment systems and authentication may be Class II. Budget for third-party conformity assessment.")),
            ],
        },
        base: &[
            item("e3_s1", "Product classified: default, important, or critical"),
            item("e3_s2", "Conformity route identified (internal or notified body)"),
            item("e3_s3", "Sector-specific exemptions assessed"),
            item("e3_s4", "EU DoC per Annex V begun or planned"),
            item("e3_s5", "CE marking process understood"),
            item("e3_s6", "Documentation retained 10 years per Annex VIII"),
            item("e3_s7", "CEN/CENELEC/ETSI harmonised standards tracked"),
        ],
        extras: &[ExtraRule {
            when: Hybrid,
            sub_criteria: &[item("e3_s8", "Each component's regulatory path independently mapped")],
        }],
        fallback: &[],
        class_ii_guidance: Some("Class II requires third-party Notified Body conformity assessment (Art. 30) before CE marking. Self-assessment is NOT permitted. Budget 6-12 months for this process."),
    },
];
