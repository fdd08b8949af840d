//! Regex-driven keyword extraction from raw job description text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The three keyword groupings scored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Technical,
    Soft,
    Tools,
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordCategory::Technical => f.write_str("technical"),
            KeywordCategory::Soft => f.write_str("soft"),
            KeywordCategory::Tools => f.write_str("tools"),
        }
    }
}

/// Keywords extracted from a job description, grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedKeywords {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl ExtractedKeywords {
    /// Flatten into a single list, technical then soft then tools.
    pub fn flatten(&self) -> Vec<String> {
        self.technical
            .iter()
            .chain(&self.soft)
            .chain(&self.tools)
            .cloned()
            .collect()
    }
}

/// Soft skills are matched by direct phrase containment, not regex.
const SOFT_SKILL_PHRASES: &[&str] = &[
    "leadership", "communication", "teamwork", "collaboration",
    "problem solving", "critical thinking", "time management",
    "adaptability", "creativity", "attention to detail",
    "project management", "mentoring", "coaching", "negotiation",
    "presentation", "customer service", "analytical", "strategic thinking",
    "conflict resolution", "decision making",
];

/// Extracts technical and tool keywords with pattern families and soft
/// skills with phrase containment.
pub struct KeywordExtractor {
    patterns: Vec<(Regex, KeywordCategory)>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        // Each pattern matches a family of related terms. Longer
        // alternatives come first so e.g. "javascript" wins over "java".
        let families: &[(&str, KeywordCategory)] = &[
            (
                r"(?i)\b(javascript|typescript|python|java|ruby|php|golang|rust|kotlin|swift|scala|perl|html|css|sql)\b",
                KeywordCategory::Technical,
            ),
            (r"(?i)c\+\+|c#|\.net", KeywordCategory::Technical),
            (
                r"(?i)\b(react|angular|vue|svelte|django|flask|spring|rails|laravel|express|node\.js|next\.js)\b",
                KeywordCategory::Technical,
            ),
            (
                r"(?i)\b(machine learning|deep learning|data analysis|data science|etl|nlp)\b",
                KeywordCategory::Technical,
            ),
            (
                r"(?i)\b(agile|scrum|kanban|devops|microservices|ci/cd|tdd|rest api|restful|graphql|unit testing)\b",
                KeywordCategory::Technical,
            ),
            (
                r"(?i)\b(seo|sem|ppc|content marketing|email marketing|social media|digital marketing|copywriting|a/b testing)\b",
                KeywordCategory::Technical,
            ),
            (
                r"(?i)\b(aws|azure|gcp|google cloud|heroku|digitalocean)\b",
                KeywordCategory::Tools,
            ),
            (
                r"(?i)\b(git|github|gitlab|docker|kubernetes|jenkins|terraform|ansible|linux)\b",
                KeywordCategory::Tools,
            ),
            (
                r"(?i)\b(postgresql|postgres|mysql|mongodb|redis|elasticsearch|sqlite|oracle|dynamodb)\b",
                KeywordCategory::Tools,
            ),
            (
                r"(?i)\b(jira|confluence|slack|trello|asana|salesforce|hubspot|tableau|power bi|excel|google analytics|photoshop|figma|sketch|wordpress|mailchimp)\b",
                KeywordCategory::Tools,
            ),
        ];

        let patterns = families
            .iter()
            .map(|(pattern, category)| {
                (
                    Regex::new(pattern).expect("Invalid keyword family regex"),
                    *category,
                )
            })
            .collect();

        Self { patterns }
    }

    /// Scan raw text (matched case-insensitively) and return deduplicated,
    /// lower-cased keywords per category.
    pub fn extract_by_category(&self, text: &str) -> ExtractedKeywords {
        let mut technical = Vec::new();
        let mut tools = Vec::new();
        let mut seen: HashSet<(KeywordCategory, String)> = HashSet::new();

        for (regex, category) in &self.patterns {
            for mat in regex.find_iter(text) {
                let keyword = mat.as_str().trim().to_lowercase();
                if keyword.is_empty() {
                    continue;
                }
                if seen.insert((*category, keyword.clone())) {
                    match category {
                        KeywordCategory::Technical => technical.push(keyword),
                        KeywordCategory::Tools => tools.push(keyword),
                        KeywordCategory::Soft => {}
                    }
                }
            }
        }

        let lowered = text.to_lowercase();
        let soft = SOFT_SKILL_PHRASES
            .iter()
            .filter(|phrase| lowered.contains(*phrase))
            .map(|phrase| (*phrase).to_string())
            .collect();

        ExtractedKeywords {
            technical,
            soft,
            tools,
        }
    }
}
