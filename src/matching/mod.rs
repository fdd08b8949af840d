//! Keyword matching and scoring engine

pub mod detector;
pub mod engine;
pub mod extractor;
pub mod profiles;
pub mod scorer;
pub mod text;

pub use detector::{detect_seniority, IndustryDetector};
pub use engine::{GapAnalysis, MatchEngine, MatchResult};
pub use extractor::{ExtractedKeywords, KeywordCategory, KeywordExtractor};
pub use profiles::{
    get_all_industries, get_industry_profile, IndustryProfile, Seniority,
};
pub use text::{normalize, TextProcessor};
