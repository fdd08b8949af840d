//! Industry and seniority detection for job description text

use crate::error::{Result, ResumeMatcherError};
use crate::matching::profiles::{IndustryProfile, Seniority, DEFAULT_INDUSTRY, INDUSTRY_PROFILES};
use crate::matching::text::normalize;
use aho_corasick::AhoCorasick;
use log::debug;
use std::collections::HashSet;

/// Detects the best-matching industry profile for a job description by
/// counting how many of each profile's keywords occur in the text.
pub struct IndustryDetector {
    automatons: Vec<(&'static IndustryProfile, AhoCorasick)>,
}

impl IndustryDetector {
    /// Build one substring automaton per profile over its normalized
    /// detection keywords (technical, soft, tools, experience).
    pub fn new() -> Result<Self> {
        let mut automatons = Vec::with_capacity(INDUSTRY_PROFILES.len());

        for profile in INDUSTRY_PROFILES {
            let patterns: Vec<String> =
                profile.detection_keywords().map(normalize).collect();
            let automaton = AhoCorasick::new(&patterns).map_err(|e| {
                ResumeMatcherError::Configuration(format!(
                    "Failed to build keyword automaton for {}: {}",
                    profile.name, e
                ))
            })?;
            automatons.push((profile, automaton));
        }

        Ok(Self { automatons })
    }

    /// Return the name of the profile with the strictly highest keyword hit
    /// count. Ties keep the earlier profile in catalog order; a text that
    /// matches nothing falls back to the default industry.
    pub fn detect_industry(&self, job_description: &str) -> &'static str {
        let normalized = normalize(job_description);

        let mut best: Option<&'static IndustryProfile> = None;
        let mut best_score = 0usize;

        for (profile, automaton) in &self.automatons {
            let score = Self::keyword_hits(automaton, &normalized);
            debug!("industry {} scored {}", profile.name, score);
            if score > best_score {
                best = Some(profile);
                best_score = score;
            }
        }

        best.map(|p| p.name).unwrap_or(DEFAULT_INDUSTRY)
    }

    /// Count distinct patterns occurring anywhere in the text. Overlapping
    /// search is required so one keyword does not shadow another that shares
    /// characters with it.
    fn keyword_hits(automaton: &AhoCorasick, normalized_text: &str) -> usize {
        let mut seen: HashSet<usize> = HashSet::new();
        for mat in automaton.find_overlapping_iter(normalized_text) {
            seen.insert(mat.pattern().as_usize());
        }
        seen.len()
    }
}

/// Infer the seniority band of a posting from level-indicating terms.
///
/// Checks run in a fixed priority order and short-circuit: senior-level
/// terms first, then junior-level, then management, with `mid` as the
/// default. A posting mentioning both "senior" and "junior" therefore
/// resolves to senior.
pub fn detect_seniority(job_description: &str) -> Seniority {
    let normalized = normalize(job_description);

    const SENIOR_TERMS: &[&str] = &["senior", "lead", "principal", "staff"];
    const JUNIOR_TERMS: &[&str] = &["junior", "entry", "associate"];
    const LEAD_TERMS: &[&str] = &["manager", "director"];

    if SENIOR_TERMS.iter().any(|t| normalized.contains(t)) {
        Seniority::Senior
    } else if JUNIOR_TERMS.iter().any(|t| normalized.contains(t)) {
        Seniority::Junior
    } else if LEAD_TERMS.iter().any(|t| normalized.contains(t)) {
        Seniority::Lead
    } else {
        Seniority::Mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_software_engineering() {
        let detector = IndustryDetector::new().unwrap();
        let job = "Looking for a developer with React, TypeScript and \
                   Kubernetes experience. Strong git and code review habits.";
        assert_eq!(detector.detect_industry(job), "Software Engineer");
    }

    #[test]
    fn test_detects_nursing_from_clinical_terms() {
        let detector = IndustryDetector::new().unwrap();
        assert_eq!(
            detector.detect_industry("RN BSN ACLS patient care clinical"),
            "Nurse"
        );
    }

    #[test]
    fn test_detects_marketing() {
        let detector = IndustryDetector::new().unwrap();
        let job = "Own our SEO and content marketing strategy, run PPC \
                   campaigns in Google Ads, and report in Google Analytics.";
        assert_eq!(detector.detect_industry(job), "Marketing Manager");
    }

    #[test]
    fn test_zero_signal_falls_back_to_default() {
        let detector = IndustryDetector::new().unwrap();
        assert_eq!(
            detector.detect_industry("plumbing welding pipefitting wanted"),
            DEFAULT_INDUSTRY
        );
        assert_eq!(detector.detect_industry(""), DEFAULT_INDUSTRY);
    }

    #[test]
    fn test_seniority_priority_order() {
        // Senior-level terms win even when junior terms are present
        assert_eq!(
            detect_seniority("Senior or junior candidates welcome"),
            Seniority::Senior
        );
        assert_eq!(detect_seniority("Entry level analyst"), Seniority::Junior);
        assert_eq!(detect_seniority("Engineering Manager"), Seniority::Lead);
        assert_eq!(detect_seniority("Backend developer"), Seniority::Mid);
    }

    #[test]
    fn test_seniority_matches_after_normalization() {
        assert_eq!(detect_seniority("PRINCIPAL engineer!"), Seniority::Senior);
        assert_eq!(detect_seniority("Associate, Operations"), Seniority::Junior);
    }
}
