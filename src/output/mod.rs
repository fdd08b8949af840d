//! Report assembly and rendering

pub mod formatter;
pub mod report;

pub use formatter::{formatter_for, OutputFormatter};
pub use report::MatchReport;
