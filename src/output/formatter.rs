//! Output formatters for match reports

use crate::config::{OutputFormat, ReportConfig};
use crate::error::Result;
use crate::output::report::MatchReport;
use colored::Colorize;

/// Trait for rendering match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a compact layout
pub struct ConsoleFormatter {
    use_colors: bool,
    report_config: ReportConfig,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saving shareable reports
pub struct MarkdownFormatter {
    report_config: ReportConfig,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, report_config: ReportConfig) -> Self {
        Self {
            use_colors,
            report_config,
        }
    }

    fn score_line(&self, label: &str, score: u8) -> String {
        let value = format!("{:3}%", score);
        let colored_value = if !self.use_colors {
            value
        } else if score >= 80 {
            value.green().to_string()
        } else if score >= 60 {
            value.cyan().to_string()
        } else if score >= 40 {
            value.yellow().to_string()
        } else {
            value.red().to_string()
        };
        format!("  {:<20} {}", label, colored_value)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        let mut out = String::new();

        let header = format!(
            "Match against {} ({} level)",
            result.detected_industry, report.seniority
        );
        if self.use_colors {
            out.push_str(&header.bold().to_string());
        } else {
            out.push_str(&header);
        }
        out.push('\n');

        out.push_str(&format!(
            "  {:<20} {:3}%  ({})\n",
            "Overall", result.overall_score, report.verdict()
        ));
        out.push_str(&self.score_line("Experience", result.experience_score));
        out.push('\n');
        out.push_str(&self.score_line("Skills", result.skills_score));
        out.push('\n');

        if self.report_config.show_salary_bands {
            if let Some(range) = report.salary_range {
                out.push_str(&format!(
                    "  {:<20} ${} - ${}\n",
                    "Typical salary", range.min, range.max
                ));
            }
        }

        out.push_str(&format!(
            "\nMatched keywords ({}):\n  {}\n",
            result.matched_keywords.len(),
            result.matched_keywords.join(", ")
        ));

        if !result.missing_keywords.is_empty() {
            let shown: Vec<String> = result
                .missing_keywords
                .iter()
                .take(self.report_config.max_missing_keywords)
                .map(|m| format!("{} ({})", m.keyword, m.category))
                .collect();
            out.push_str(&format!(
                "\nMissing keywords ({} total):\n  {}\n",
                result.missing_keywords.len(),
                shown.join(", ")
            ));
        }

        if self.report_config.include_recommendations && !result.recommendations.is_empty() {
            out.push_str("\nRecommendations:\n");
            for rec in &result.recommendations {
                let title = if self.use_colors {
                    rec.title.bold().to_string()
                } else {
                    rec.title.clone()
                };
                out.push_str(&format!(
                    "  [{:?}] {}\n      {}\n",
                    rec.priority, title, rec.description
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(report_config: ReportConfig) -> Self {
        Self { report_config }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        let mut out = String::new();

        out.push_str("# Resume Match Report\n\n");
        out.push_str(&format!(
            "Generated {} for a **{}** posting ({} level).\n\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            result.detected_industry,
            report.seniority
        ));

        out.push_str("## Scores\n\n");
        out.push_str("| Metric | Score |\n|---|---|\n");
        out.push_str(&format!(
            "| Overall | {}% ({}) |\n",
            result.overall_score,
            report.verdict()
        ));
        out.push_str(&format!("| Experience | {}% |\n", result.experience_score));
        out.push_str(&format!("| Skills | {}% |\n", result.skills_score));
        if self.report_config.show_salary_bands {
            if let Some(range) = report.salary_range {
                out.push_str(&format!(
                    "| Typical salary | ${} - ${} |\n",
                    range.min, range.max
                ));
            }
        }

        out.push_str("\n## Matched Keywords\n\n");
        for keyword in &result.matched_keywords {
            out.push_str(&format!("- {}\n", keyword));
        }

        if !result.missing_keywords.is_empty() {
            out.push_str("\n## Missing Keywords\n\n");
            for missing in result
                .missing_keywords
                .iter()
                .take(self.report_config.max_missing_keywords)
            {
                out.push_str(&format!("- {} ({})\n", missing.keyword, missing.category));
            }
        }

        if self.report_config.include_recommendations && !result.recommendations.is_empty() {
            out.push_str("\n## Recommendations\n\n");
            for rec in &result.recommendations {
                out.push_str(&format!(
                    "### {} ({:?})\n\n{}\n\n",
                    rec.title, rec.priority, rec.description
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Pick a formatter for the requested output format.
pub fn formatter_for(
    format: &OutputFormat,
    use_colors: bool,
    report_config: ReportConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, report_config)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(report_config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::profiles::Seniority;
    use crate::matching::MatchEngine;
    use crate::output::report::MatchReport;
    use crate::resume::{ResumeData, Skill};

    fn sample_report() -> MatchReport {
        let engine = MatchEngine::new().unwrap();
        let resume = ResumeData {
            skills: vec![Skill {
                name: "Python".to_string(),
                category: None,
                level: None,
            }],
            ..Default::default()
        };
        let job = "Python developer with Django, AWS and strong communication";
        let result = engine.match_resume_to_job(&resume, job).unwrap();
        MatchReport::new(result, Seniority::Mid, &resume, job)
    }

    #[test]
    fn test_console_output_without_colors() {
        let report = sample_report();
        let formatter = ConsoleFormatter::new(false, ReportConfig {
            include_recommendations: true,
            show_salary_bands: true,
            max_missing_keywords: 10,
        });
        let text = formatter.format_report(&report).unwrap();

        assert!(text.contains("Software Engineer"));
        assert!(text.contains("Overall"));
        assert!(text.contains("python"));
        assert!(text.contains("Recommendations"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let report = sample_report();
        let formatter = JsonFormatter::new(false);
        let json = formatter.format_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["result"]["detected_industry"],
            "Software Engineer"
        );
        assert!(value["result"]["overall_score"].is_number());
    }

    #[test]
    fn test_markdown_output_sections() {
        let report = sample_report();
        let formatter = MarkdownFormatter::new(ReportConfig {
            include_recommendations: false,
            show_salary_bands: false,
            max_missing_keywords: 5,
        });
        let md = formatter.format_report(&report).unwrap();

        assert!(md.starts_with("# Resume Match Report"));
        assert!(md.contains("## Scores"));
        assert!(md.contains("## Matched Keywords"));
        assert!(!md.contains("## Recommendations"));
        assert!(!md.contains("Typical salary"));
    }
}
