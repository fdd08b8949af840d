//! Category, structure, and overall score computation

use crate::matching::text::normalize;
use crate::resume::ResumeData;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Weights for the overall score. They sum to exactly 1.0.
pub const TECHNICAL_WEIGHT: f64 = 0.4;
pub const SOFT_WEIGHT: f64 = 0.2;
pub const TOOLS_WEIGHT: f64 = 0.3;
pub const BASELINE_WEIGHT: f64 = 0.1;

/// Constant credit for having a resume at all, folded in at
/// `BASELINE_WEIGHT`. Not derived from input.
pub const BASELINE_SCORE: f64 = 90.0;

/// Matched/missing breakdown for one keyword category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Score the resume keyword set against one category's keyword universe.
///
/// A job keyword counts as matched when it contains a resume keyword as a
/// substring or a resume keyword contains it, after normalization. The
/// bidirectional test is intentionally lenient so partial phrases still
/// match ("react" vs "react.js"); short keywords can therefore produce
/// false positives.
///
/// An empty universe scores 100 so categories with no keywords never
/// penalize the overall score.
pub fn calculate_category_score(
    resume_keywords: &HashSet<String>,
    job_keywords: &[String],
) -> CategoryScore {
    if job_keywords.is_empty() {
        return CategoryScore {
            score: 100,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for keyword in job_keywords {
        let normalized = normalize(keyword);
        let found = resume_keywords
            .iter()
            .any(|rk| rk.contains(&normalized) || normalized.contains(rk.as_str()));
        if found {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    let score =
        ((matched.len() as f64 / job_keywords.len() as f64) * 100.0).round() as u8;

    CategoryScore {
        score,
        matched,
        missing,
    }
}

/// Combine the three category scores with the fixed weights plus the
/// constant baseline credit.
pub fn combine_category_scores(technical: u8, soft: u8, tools: u8) -> u8 {
    let overall = f64::from(technical) * TECHNICAL_WEIGHT
        + f64::from(soft) * SOFT_WEIGHT
        + f64::from(tools) * TOOLS_WEIGHT
        + BASELINE_SCORE * BASELINE_WEIGHT;
    overall.round().min(100.0) as u8
}

/// Score the depth of the work history section, from resume structure only.
///
/// Base 50, plus 25 for three or more entries (15 for at least one), plus a
/// bonus from the stated years of experience. Clamped to 100.
pub fn calculate_experience_score(resume: &ResumeData) -> u8 {
    let mut score: u32 = 50;

    if resume.experience.len() >= 3 {
        score += 25;
    } else if !resume.experience.is_empty() {
        score += 15;
    }

    let years = resume.years_experience();
    if years >= 5 {
        score += 25;
    } else if years >= 2 {
        score += 15;
    } else if years >= 1 {
        score += 10;
    }

    score.min(100) as u8
}

/// Stepped thresholds on the number of listed skills. The breakpoints are a
/// fixed staircase, not a linear scale.
pub fn calculate_skills_score(resume: &ResumeData) -> u8 {
    match resume.skills.len() {
        n if n >= 15 => 100,
        n if n >= 10 => 85,
        n if n >= 7 => 70,
        n if n >= 5 => 55,
        n if n >= 3 => 40,
        n if n > 0 => 25,
        _ => 0,
    }
}
