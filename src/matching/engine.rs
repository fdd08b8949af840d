//! Match engine coordinating detection, extraction, and scoring

use crate::error::{Result, ResumeMatcherError};
use crate::matching::detector::IndustryDetector;
use crate::matching::extractor::{KeywordCategory, KeywordExtractor};
use crate::matching::profiles::get_industry_profile;
use crate::matching::scorer::{
    calculate_category_score, calculate_experience_score, calculate_skills_score,
    combine_category_scores, CategoryScore,
};
use crate::matching::text::TextProcessor;
use crate::resume::ResumeData;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A job keyword absent from the resume, tagged with its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingKeyword {
    pub keyword: String,
    pub category: KeywordCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// An improvement suggestion derived from missing keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub rec_type: KeywordCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// The three keyword universes a match was scored against, for caller
/// display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordUniverses {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
}

/// Result of matching one resume against one job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<MissingKeyword>,
    pub detected_industry: String,
    pub experience_score: u8,
    pub skills_score: u8,
    pub recommendations: Vec<Recommendation>,
    pub keyword_categories: KeywordUniverses,
}

/// Technical gap analysis against an explicitly named industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub missing: Vec<String>,
    pub matched: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Stateless matching engine. Every call is an independent, synchronous
/// computation; the engine only holds prebuilt automatons and regexes and
/// is safe to share across threads.
pub struct MatchEngine {
    processor: TextProcessor,
    extractor: KeywordExtractor,
    detector: IndustryDetector,
}

impl MatchEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            processor: TextProcessor::new(),
            extractor: KeywordExtractor::new(),
            detector: IndustryDetector::new()?,
        })
    }

    /// Match a resume against a job description.
    ///
    /// The only validation failure in the engine: an empty or
    /// whitespace-only job description is rejected.
    pub fn match_resume_to_job(
        &self,
        resume: &ResumeData,
        job_description: &str,
    ) -> Result<MatchResult> {
        if job_description.trim().is_empty() {
            return Err(ResumeMatcherError::InvalidInput(
                "Job description must not be empty".to_string(),
            ));
        }

        let industry = self.detector.detect_industry(job_description);
        let profile = get_industry_profile(industry)
            .ok_or_else(|| ResumeMatcherError::UnknownIndustry(industry.to_string()))?;
        info!("Detected industry: {}", industry);

        let resume_keywords = self
            .processor
            .extract_words_and_phrases(&resume.text_blob());
        debug!("Resume keyword set size: {}", resume_keywords.len());

        let job_keywords = self.extractor.extract_by_category(job_description);

        // Keyword universes: job-description extraction unioned with the
        // detected profile's category lists.
        let technical = union(&job_keywords.technical, profile.technical_keywords);
        let soft = union(&job_keywords.soft, profile.soft_skills);
        let tools = union(&job_keywords.tools, profile.tool_keywords);

        let technical_score = calculate_category_score(&resume_keywords, &technical);
        let soft_score = calculate_category_score(&resume_keywords, &soft);
        let tools_score = calculate_category_score(&resume_keywords, &tools);

        let overall_score = combine_category_scores(
            technical_score.score,
            soft_score.score,
            tools_score.score,
        );

        let matched_keywords = collect_matched(&[
            &technical_score,
            &soft_score,
            &tools_score,
        ]);
        let missing_keywords = collect_missing(&[
            (&technical_score, KeywordCategory::Technical),
            (&soft_score, KeywordCategory::Soft),
            (&tools_score, KeywordCategory::Tools),
        ]);

        let recommendations =
            build_recommendations(&technical_score, &soft_score, &tools_score);

        Ok(MatchResult {
            overall_score,
            matched_keywords,
            missing_keywords,
            detected_industry: industry.to_string(),
            experience_score: calculate_experience_score(resume),
            skills_score: calculate_skills_score(resume),
            recommendations,
            keyword_categories: KeywordUniverses {
                technical,
                soft_skills: soft,
                tools,
            },
        })
    }

    /// Flattened technical, soft, and tool keywords extracted from a job
    /// description, for external display.
    pub fn extract_job_keywords(&self, job_description: &str) -> Vec<String> {
        self.extractor.extract_by_category(job_description).flatten()
    }

    /// Compare a flat list of resume skill names against the technical
    /// keywords of an explicitly named industry profile.
    pub fn analyze_technical_skill_gaps(
        &self,
        resume_skills: &[String],
        industry: &str,
    ) -> Result<GapAnalysis> {
        let profile = get_industry_profile(industry)
            .ok_or_else(|| ResumeMatcherError::UnknownIndustry(industry.to_string()))?;

        let skill_set: HashSet<String> = resume_skills
            .iter()
            .map(|s| crate::matching::text::normalize(s))
            .filter(|s| !s.is_empty())
            .collect();

        let technical: Vec<String> = profile
            .technical_keywords
            .iter()
            .map(|k| (*k).to_string())
            .collect();
        let score = calculate_category_score(&skill_set, &technical);

        let recommendations = score
            .missing
            .iter()
            .take(5)
            .map(|skill| {
                format!(
                    "Consider learning {} - it's commonly required in {} roles.",
                    skill, profile.name
                )
            })
            .collect();

        Ok(GapAnalysis {
            missing: score.missing,
            matched: score.matched,
            recommendations,
        })
    }
}

/// Union two keyword lists, preserving first-seen order.
fn union(job: &[String], profile: &'static [&'static str]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for keyword in job {
        if seen.insert(keyword.clone()) {
            out.push(keyword.clone());
        }
    }
    for keyword in profile {
        if seen.insert((*keyword).to_string()) {
            out.push((*keyword).to_string());
        }
    }
    out
}

fn collect_matched(scores: &[&CategoryScore]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for score in scores {
        for keyword in &score.matched {
            if seen.insert(keyword.clone()) {
                out.push(keyword.clone());
            }
        }
    }
    out
}

fn collect_missing(scores: &[(&CategoryScore, KeywordCategory)]) -> Vec<MissingKeyword> {
    let mut out = Vec::new();
    for (score, category) in scores {
        for keyword in &score.missing {
            out.push(MissingKeyword {
                keyword: keyword.clone(),
                category: *category,
            });
        }
    }
    out
}

/// Build prioritized recommendations from missing keywords, in technical,
/// soft, tools order. Categories with nothing missing are omitted.
fn build_recommendations(
    technical: &CategoryScore,
    soft: &CategoryScore,
    tools: &CategoryScore,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !technical.missing.is_empty() {
        let keywords: Vec<String> =
            technical.missing.iter().take(5).cloned().collect();
        recommendations.push(Recommendation {
            rec_type: KeywordCategory::Technical,
            priority: Priority::High,
            title: "Add missing technical skills".to_string(),
            description: format!(
                "These technical keywords appear in the job posting but not \
                 in your resume: {}",
                keywords.join(", ")
            ),
            keywords,
        });
    }

    if !soft.missing.is_empty() {
        let keywords: Vec<String> = soft.missing.iter().take(3).cloned().collect();
        recommendations.push(Recommendation {
            rec_type: KeywordCategory::Soft,
            priority: Priority::Medium,
            title: "Highlight soft skills".to_string(),
            description: format!(
                "Consider demonstrating these soft skills in your summary or \
                 experience: {}",
                keywords.join(", ")
            ),
            keywords,
        });
    }

    if !tools.missing.is_empty() {
        let keywords: Vec<String> = tools.missing.iter().take(3).cloned().collect();
        recommendations.push(Recommendation {
            rec_type: KeywordCategory::Tools,
            priority: Priority::Medium,
            title: "Mention relevant tools".to_string(),
            description: format!(
                "The posting references tools your resume does not mention: {}",
                keywords.join(", ")
            ),
            keywords,
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::profiles::INDUSTRY_PROFILES;
    use crate::resume::{PersonalInfo, Skill};

    fn resume_with_skills(names: &[&str]) -> ResumeData {
        ResumeData {
            skills: names
                .iter()
                .map(|n| Skill {
                    name: (*n).to_string(),
                    category: None,
                    level: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_job_description_is_rejected() {
        let engine = MatchEngine::new().unwrap();
        let resume = resume_with_skills(&["JavaScript"]);

        assert!(matches!(
            engine.match_resume_to_job(&resume, ""),
            Err(ResumeMatcherError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.match_resume_to_job(&resume, "   \n\t "),
            Err(ResumeMatcherError::InvalidInput(_))
        ));
        assert!(engine.match_resume_to_job(&resume, "valid text").is_ok());
    }

    #[test]
    fn test_full_overlap_keyword_is_matched() {
        let engine = MatchEngine::new().unwrap();
        let resume = resume_with_skills(&["JavaScript"]);
        let job = "We need a JavaScript developer with strong JavaScript skills";

        let result = engine.match_resume_to_job(&resume, job).unwrap();

        assert!(result
            .matched_keywords
            .iter()
            .any(|k| k == "javascript"));
        assert!(!result
            .missing_keywords
            .iter()
            .any(|m| m.keyword == "javascript"));
    }

    #[test]
    fn test_structure_scores_are_independent_of_job_text() {
        let engine = MatchEngine::new().unwrap();
        let mut resume = resume_with_skills(&["Python", "SQL", "Excel"]);
        resume.personal_info = PersonalInfo {
            years_experience: Some("5".to_string()),
            ..Default::default()
        };

        let a = engine
            .match_resume_to_job(&resume, "Looking for a Python engineer")
            .unwrap();
        let b = engine
            .match_resume_to_job(&resume, "Hiring a marketing lead for SEO work")
            .unwrap();

        assert_eq!(a.experience_score, b.experience_score);
        assert_eq!(a.skills_score, b.skills_score);
        assert_eq!(a.skills_score, 40);
    }

    #[test]
    fn test_missing_keywords_are_tagged_and_ordered() {
        let engine = MatchEngine::new().unwrap();
        let resume = resume_with_skills(&["JavaScript"]);
        let result = engine
            .match_resume_to_job(&resume, "JavaScript developer")
            .unwrap();

        // Categories appear in technical, soft, tools order
        let mut last = KeywordCategory::Technical;
        for missing in &result.missing_keywords {
            let rank = |c: KeywordCategory| match c {
                KeywordCategory::Technical => 0,
                KeywordCategory::Soft => 1,
                KeywordCategory::Tools => 2,
            };
            assert!(rank(missing.category) >= rank(last));
            last = missing.category;
        }
        assert!(!result.missing_keywords.is_empty());
    }

    #[test]
    fn test_recommendation_limits_and_priorities() {
        let engine = MatchEngine::new().unwrap();
        let resume = resume_with_skills(&["JavaScript"]);
        let result = engine
            .match_resume_to_job(&resume, "JavaScript developer")
            .unwrap();

        for rec in &result.recommendations {
            assert!(!rec.keywords.is_empty());
            match rec.rec_type {
                KeywordCategory::Technical => {
                    assert_eq!(rec.priority, Priority::High);
                    assert!(rec.keywords.len() <= 5);
                }
                KeywordCategory::Soft | KeywordCategory::Tools => {
                    assert_eq!(rec.priority, Priority::Medium);
                    assert!(rec.keywords.len() <= 3);
                }
            }
        }
    }

    #[test]
    fn test_recommendations_suppressed_at_full_coverage() {
        let engine = MatchEngine::new().unwrap();

        // A resume listing every keyword of the Software Engineer profile
        let profile = &INDUSTRY_PROFILES[0];
        let all_keywords: Vec<&str> = profile
            .technical_keywords
            .iter()
            .chain(profile.soft_skills)
            .chain(profile.tool_keywords)
            .copied()
            .collect();
        let resume = resume_with_skills(&all_keywords);

        let result = engine
            .match_resume_to_job(&resume, "JavaScript developer")
            .unwrap();

        assert_eq!(result.detected_industry, "Software Engineer");
        assert!(
            result.recommendations.is_empty(),
            "missing: {:?}",
            result.missing_keywords
        );
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_extract_job_keywords_flattens_categories() {
        let engine = MatchEngine::new().unwrap();
        let keywords =
            engine.extract_job_keywords("Python developer with leadership and Git");

        assert!(keywords.contains(&"python".to_string()));
        assert!(keywords.contains(&"leadership".to_string()));
        assert!(keywords.contains(&"git".to_string()));
    }

    #[test]
    fn test_gap_analysis_against_named_industry() {
        let engine = MatchEngine::new().unwrap();
        let skills = vec!["JavaScript".to_string(), "React".to_string()];

        let gaps = engine
            .analyze_technical_skill_gaps(&skills, "Software Engineer")
            .unwrap();

        assert!(gaps.matched.contains(&"javascript".to_string()));
        assert!(gaps.matched.contains(&"react".to_string()));
        assert!(!gaps.missing.is_empty());
        assert!(gaps.recommendations.len() <= 5);
        for rec in &gaps.recommendations {
            assert!(rec.contains("Software Engineer"));
        }
    }

    #[test]
    fn test_gap_analysis_unknown_industry_errors() {
        let engine = MatchEngine::new().unwrap();
        let result = engine.analyze_technical_skill_gaps(&[], "Astronaut");
        assert!(matches!(
            result,
            Err(ResumeMatcherError::UnknownIndustry(_))
        ));
    }
}
