//! Static catalog of industry profiles
//!
//! Profiles are declared once as a constant slice. Declaration order is the
//! registry iteration order, which industry detection relies on for stable
//! tie-breaking, so new profiles should be appended rather than inserted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seniority band inferred from level-indicating language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
            Seniority::Lead => "lead",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annual salary range in USD, min <= max.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalaryBands {
    pub junior: SalaryRange,
    pub mid: SalaryRange,
    pub senior: SalaryRange,
    pub lead: SalaryRange,
}

impl SalaryBands {
    pub fn for_level(&self, level: Seniority) -> SalaryRange {
        match level {
            Seniority::Junior => self.junior,
            Seniority::Mid => self.mid,
            Seniority::Senior => self.senior,
            Seniority::Lead => self.lead,
        }
    }
}

/// A named industry's fixed catalog of categorized keywords and salary bands.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryProfile {
    pub name: &'static str,
    pub technical_keywords: &'static [&'static str],
    pub soft_skills: &'static [&'static str],
    pub tool_keywords: &'static [&'static str],
    pub experience_keywords: &'static [&'static str],
    pub education_keywords: &'static [&'static str],
    pub certification_keywords: &'static [&'static str],
    pub salary_ranges: SalaryBands,
}

impl IndustryProfile {
    /// Keyword union used for industry detection: technical, soft, tools,
    /// and experience categories. Education and certification keywords are
    /// intentionally excluded.
    pub fn detection_keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.technical_keywords
            .iter()
            .chain(self.soft_skills)
            .chain(self.tool_keywords)
            .chain(self.experience_keywords)
            .copied()
    }
}

/// The profile catalog. The first entry is the fallback for job descriptions
/// that match nothing.
pub static INDUSTRY_PROFILES: &[IndustryProfile] = &[
    IndustryProfile {
        name: "Software Engineer",
        technical_keywords: &[
            "javascript", "typescript", "python", "java", "golang", "rust",
            "sql", "html", "css", "react", "angular", "vue", "node.js",
            "django", "spring", "microservices", "rest api", "graphql",
            "algorithms", "data structures", "ci/cd", "debugging",
            "unit testing", "agile", "scrum",
        ],
        soft_skills: &[
            "problem solving", "communication", "teamwork", "collaboration",
            "adaptability", "critical thinking", "attention to detail",
            "time management", "mentoring", "creativity",
        ],
        tool_keywords: &[
            "git", "docker", "kubernetes", "aws", "azure", "jenkins", "jira",
            "linux", "postgresql", "mongodb", "redis", "terraform",
        ],
        experience_keywords: &[
            "software development", "programming", "backend", "frontend",
            "full stack", "web development", "code review", "deployment",
            "system design",
        ],
        education_keywords: &[
            "computer science", "software engineering",
            "information technology", "bachelor", "master",
        ],
        certification_keywords: &[
            "aws certified", "azure certified", "kubernetes certified",
            "oracle certified", "certified scrum master",
        ],
        salary_ranges: SalaryBands {
            junior: SalaryRange { min: 65_000, max: 90_000 },
            mid: SalaryRange { min: 90_000, max: 130_000 },
            senior: SalaryRange { min: 130_000, max: 180_000 },
            lead: SalaryRange { min: 160_000, max: 220_000 },
        },
    },
    IndustryProfile {
        name: "Marketing Manager",
        technical_keywords: &[
            "seo", "sem", "ppc", "content marketing", "email marketing",
            "social media", "digital marketing", "brand management",
            "market research", "campaign management", "copywriting",
            "conversion optimization", "marketing automation", "a/b testing",
        ],
        soft_skills: &[
            "creativity", "communication", "leadership", "strategic thinking",
            "collaboration", "storytelling", "negotiation",
            "analytical thinking",
        ],
        tool_keywords: &[
            "google analytics", "hubspot", "mailchimp", "hootsuite",
            "salesforce", "canva", "wordpress", "semrush", "google ads",
            "facebook ads",
        ],
        experience_keywords: &[
            "marketing strategy", "brand awareness", "lead generation",
            "audience growth", "content creation", "campaign launch",
            "engagement",
        ],
        education_keywords: &[
            "marketing", "business administration", "communications", "mba",
        ],
        certification_keywords: &[
            "google ads certified", "hubspot certified", "facebook blueprint",
            "google analytics certified",
        ],
        salary_ranges: SalaryBands {
            junior: SalaryRange { min: 50_000, max: 70_000 },
            mid: SalaryRange { min: 70_000, max: 95_000 },
            senior: SalaryRange { min: 95_000, max: 130_000 },
            lead: SalaryRange { min: 120_000, max: 160_000 },
        },
    },
    IndustryProfile {
        name: "Project Manager",
        technical_keywords: &[
            "project planning", "risk management", "budgeting", "scheduling",
            "resource allocation", "stakeholder management",
            "process improvement", "change management", "kanban",
            "waterfall", "sprint planning",
        ],
        soft_skills: &[
            "leadership", "communication", "organization", "negotiation",
            "conflict resolution", "decision making", "delegation",
            "time management",
        ],
        tool_keywords: &[
            "jira", "asana", "trello", "microsoft project", "confluence",
            "slack", "excel", "smartsheet",
        ],
        experience_keywords: &[
            "project delivery", "cross-functional", "milestones", "roadmap",
            "program management", "vendor management",
        ],
        education_keywords: &[
            "business administration", "project management", "mba",
        ],
        certification_keywords: &["pmp", "capm", "csm", "prince2", "safe"],
        salary_ranges: SalaryBands {
            junior: SalaryRange { min: 55_000, max: 75_000 },
            mid: SalaryRange { min: 75_000, max: 100_000 },
            senior: SalaryRange { min: 100_000, max: 135_000 },
            lead: SalaryRange { min: 125_000, max: 165_000 },
        },
    },
    IndustryProfile {
        name: "Nurse",
        technical_keywords: &[
            "patient care", "clinical", "medication administration",
            "wound care", "iv therapy", "vital signs", "patient assessment",
            "care planning", "infection control", "emergency care", "triage",
            "charting",
        ],
        soft_skills: &[
            "compassion", "communication", "empathy", "attention to detail",
            "teamwork", "stress management", "patience", "adaptability",
        ],
        tool_keywords: &[
            "epic", "cerner", "meditech", "ehr", "emr", "telemetry", "pyxis",
        ],
        experience_keywords: &[
            "registered nurse", "bedside", "acute care", "icu", "med surg",
            "pediatrics", "oncology", "emergency room", "long term care",
        ],
        education_keywords: &["nursing", "bsn", "adn", "msn"],
        certification_keywords: &["rn", "bls", "acls", "pals", "ccrn", "cna"],
        salary_ranges: SalaryBands {
            junior: SalaryRange { min: 55_000, max: 70_000 },
            mid: SalaryRange { min: 70_000, max: 90_000 },
            senior: SalaryRange { min: 90_000, max: 110_000 },
            lead: SalaryRange { min: 105_000, max: 135_000 },
        },
    },
    IndustryProfile {
        name: "Sales Representative",
        technical_keywords: &[
            "lead generation", "prospecting", "cold calling", "closing",
            "account management", "pipeline management",
            "territory management", "upselling", "crm", "forecasting",
            "quota",
        ],
        soft_skills: &[
            "persuasion", "communication", "resilience",
            "relationship building", "active listening", "confidence",
            "self motivated",
        ],
        tool_keywords: &[
            "salesforce", "hubspot", "outreach", "zoominfo",
            "linkedin sales navigator", "excel", "salesloft",
        ],
        experience_keywords: &[
            "b2b", "b2c", "saas sales", "inside sales", "outside sales",
            "quota attainment", "client relationships",
        ],
        education_keywords: &["business", "marketing", "communications"],
        certification_keywords: &[
            "certified sales professional", "challenger sale", "spin selling",
        ],
        salary_ranges: SalaryBands {
            junior: SalaryRange { min: 40_000, max: 60_000 },
            mid: SalaryRange { min: 60_000, max: 85_000 },
            senior: SalaryRange { min: 85_000, max: 120_000 },
            lead: SalaryRange { min: 110_000, max: 150_000 },
        },
    },
];

/// Name of the profile used when a job description matches nothing.
pub const DEFAULT_INDUSTRY: &str = "Software Engineer";

/// Look up a profile by its canonical name. Misses are expected and return
/// `None` rather than an error.
pub fn get_industry_profile(name: &str) -> Option<&'static IndustryProfile> {
    INDUSTRY_PROFILES.iter().find(|p| p.name == name)
}

/// Enumerate industry names in declaration order.
pub fn get_all_industries() -> Vec<&'static str> {
    INDUSTRY_PROFILES.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_populated() {
        assert_eq!(INDUSTRY_PROFILES.len(), 5);
        for profile in INDUSTRY_PROFILES {
            assert!(!profile.technical_keywords.is_empty(), "{}", profile.name);
            assert!(!profile.soft_skills.is_empty(), "{}", profile.name);
            assert!(!profile.tool_keywords.is_empty(), "{}", profile.name);
            assert!(!profile.experience_keywords.is_empty(), "{}", profile.name);
            assert!(!profile.education_keywords.is_empty(), "{}", profile.name);
            assert!(
                !profile.certification_keywords.is_empty(),
                "{}",
                profile.name
            );
        }
    }

    #[test]
    fn test_salary_bands_are_ordered() {
        for profile in INDUSTRY_PROFILES {
            for level in [
                Seniority::Junior,
                Seniority::Mid,
                Seniority::Senior,
                Seniority::Lead,
            ] {
                let range = profile.salary_ranges.for_level(level);
                assert!(range.min <= range.max, "{} {}", profile.name, level);
            }
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert!(get_industry_profile("Nurse").is_some());
        assert!(get_industry_profile("Astronaut").is_none());
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let industries = get_all_industries();
        assert_eq!(industries.first(), Some(&"Software Engineer"));
        assert_eq!(industries.len(), INDUSTRY_PROFILES.len());
        assert_eq!(industries[0], DEFAULT_INDUSTRY);
    }

    #[test]
    fn test_detection_keywords_exclude_education_and_certs() {
        let nurse = get_industry_profile("Nurse").unwrap();
        let detection: Vec<&str> = nurse.detection_keywords().collect();
        assert!(detection.contains(&"patient care"));
        assert!(detection.contains(&"compassion"));
        assert!(detection.contains(&"epic"));
        assert!(detection.contains(&"icu"));
        assert!(!detection.contains(&"bsn"));
        assert!(!detection.contains(&"acls"));
    }
}
