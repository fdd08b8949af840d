//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod resume;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use matching::{
    detect_seniority, get_all_industries, get_industry_profile, GapAnalysis,
    MatchEngine, MatchResult,
};
pub use resume::ResumeData;
