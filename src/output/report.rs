//! Match report assembly and metadata

use crate::matching::engine::MatchResult;
use crate::matching::profiles::{get_industry_profile, SalaryRange, Seniority};
use crate::resume::ResumeData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A match result enriched with presentation context: the inferred
/// seniority band, the salary range the detected profile publishes for
/// that band, and generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub result: MatchResult,
    pub seniority: Seniority,
    pub salary_range: Option<SalaryRange>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub job_word_count: usize,
    pub resume_skill_count: usize,
    pub tool_version: String,
}

impl MatchReport {
    pub fn new(
        result: MatchResult,
        seniority: Seniority,
        resume: &ResumeData,
        job_description: &str,
    ) -> Self {
        let salary_range = get_industry_profile(&result.detected_industry)
            .map(|profile| profile.salary_ranges.for_level(seniority));

        let metadata = ReportMetadata {
            generated_at: Utc::now(),
            job_word_count: job_description.unicode_words().count(),
            resume_skill_count: resume.skills.len(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };

        Self {
            result,
            seniority,
            salary_range,
            metadata,
        }
    }

    /// Short verdict for the overall score, used by the console formatter.
    pub fn verdict(&self) -> &'static str {
        match self.result.overall_score {
            80..=u8::MAX => "Excellent match",
            60..=79 => "Good match",
            40..=59 => "Fair match",
            _ => "Poor match",
        }
    }
}
