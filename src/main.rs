//! Resume matcher: keyword-based resume and job description matching tool

mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;
mod resume;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeMatcherError};
use input::InputManager;
use log::{error, info};
use matching::{detect_seniority, get_all_industries, get_industry_profile, MatchEngine};
use output::{formatter_for, MatchReport};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeMatcherError::InvalidInput(format!("Job description file: {}", e))
            })?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            info!("Matching {} against {}", resume.display(), job.display());

            let mut input_manager = InputManager::new();
            let resume_data = input_manager.load_resume(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let engine = MatchEngine::new()?;
            let result = engine.match_resume_to_job(&resume_data, &job_text)?;
            let seniority = detect_seniority(&job_text);

            let report = MatchReport::new(result, seniority, &resume_data, &job_text);
            let formatter = formatter_for(
                &output_format,
                config.output.color_output && save.is_none(),
                config.report.clone(),
            );
            let rendered = formatter.format_report(&report)?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, rendered).await?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Keywords { job } => {
            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeMatcherError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;

            let engine = MatchEngine::new()?;
            for keyword in engine.extract_job_keywords(&job_text) {
                println!("{}", keyword);
            }
        }

        Commands::Industries { profile } => match profile {
            Some(name) => {
                let profile = get_industry_profile(&name)
                    .ok_or(ResumeMatcherError::UnknownIndustry(name))?;
                println!("{}", serde_json::to_string_pretty(profile)?);
            }
            None => {
                for industry in get_all_industries() {
                    println!("{}", industry);
                }
            }
        },

        Commands::Gaps { resume, industry } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let input_manager = InputManager::new();
            let resume_data = input_manager.load_resume(&resume).await?;
            let skills: Vec<String> =
                resume_data.skills.iter().map(|s| s.name.clone()).collect();

            let engine = MatchEngine::new()?;
            let gaps = engine.analyze_technical_skill_gaps(&skills, &industry)?;

            println!("Matched: {}", gaps.matched.join(", "));
            println!("Missing: {}", gaps.missing.join(", "));
            if !gaps.recommendations.is_empty() {
                println!("\nRecommendations:");
                for rec in &gaps.recommendations {
                    println!("  {}", rec);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                Config::reset()?;
                println!("Configuration reset to defaults");
            }
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeMatcherError::Configuration(format!(
                        "Failed to serialize config: {}",
                        e
                    ))
                })?;
                println!("{}", content);
            }
        },
    }

    Ok(())
}
