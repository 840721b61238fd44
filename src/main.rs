//! Career pathfinder: vocational career recommendations from quiz scores

use anyhow::Context;
use career_pathfinder::analysis::AnalysisSource;
use career_pathfinder::cli::{self, Cli, Commands, ConfigAction};
use career_pathfinder::config::Config;
use career_pathfinder::engine::RecommendationEngine;
use career_pathfinder::error::PathfinderError;
use career_pathfinder::input::InputManager;
use career_pathfinder::output::{save_report_to_file, suggest_filename, RecommendationReport, ReportGenerator};
use career_pathfinder::profile::EngineeringField;
use clap::Parser;
use log::{error, info, warn};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Recommend {
            scores,
            analysis,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&scores, &["json", "toml"])
                .map_err(|e| PathfinderError::InvalidInput(format!("Score profile: {}", e)))?;
            if let Some(path) = &analysis {
                cli::validate_file_extension(path, &["txt", "md", "markdown", "json"])
                    .map_err(|e| PathfinderError::InvalidInput(format!("Analysis file: {}", e)))?;
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(PathfinderError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let engine = RecommendationEngine::from_config(&config)?;
            let mut input_manager = InputManager::new();

            info!("Loading score profile from {}", scores.display());
            let profile = input_manager
                .load_scores(&scores)
                .await
                .with_context(|| format!("Failed to read score profile {}", scores.display()))?;

            let source: Option<AnalysisSource> = match &analysis {
                Some(path) => {
                    info!("Loading analysis from {}", path.display());
                    Some(
                        input_manager
                            .load_analysis(path)
                            .await
                            .with_context(|| format!("Failed to read analysis {}", path.display()))?,
                    )
                }
                None => None,
            };

            let ranked = engine.recommend(&profile);
            let report = RecommendationReport::build(&engine, &profile, &ranked, source.as_ref()).with_files(
                Some(scores.to_string_lossy().to_string()),
                analysis.as_ref().map(|p| p.to_string_lossy().to_string()),
            );

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true, true);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &scores.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &target)?;
                    println!("💾 Report saved to {}", target.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Analyze { analysis, career } => {
            let engine = RecommendationEngine::from_config(&config)?;
            let mut input_manager = InputManager::new();
            let source = input_manager
                .load_analysis(&analysis)
                .await
                .with_context(|| format!("Failed to read analysis {}", analysis.display()))?;

            if let Err(e) = engine.resolve_career(&career) {
                warn!("{}", e);
            }

            if !engine.can_generate_analysis_for(&career, &source) {
                info!("'{}' is not mentioned in the analysis text", career);
            }

            match engine.analyze(&career, &source) {
                Some(result) => {
                    let generator = ReportGenerator::with_options(config.output.color_output, true, true, true, true);
                    println!("{}", generator.console().format_career_analysis(&career, &result));
                }
                None => println!("⚠️  No analysis can be generated for '{}'", career),
            }
        }

        Commands::Catalog { field } => {
            let engine = RecommendationEngine::from_config(&config)?;
            let field: Option<EngineeringField> = field.as_deref().map(str::parse).transpose()?;

            let careers: Vec<_> = match field {
                Some(field) => engine.catalog().by_field(field),
                None => engine.catalog().as_slice().iter().collect(),
            };

            println!("🎓 Career catalog ({} careers)\n", careers.len());
            for career in careers {
                println!("  • {} ({})", career.name, career.field.label());
                println!("    {} · {} · {}", career.institution, career.city, career.duration);
                println!("    {}", career.description);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("{}", toml::to_string_pretty(&config)?);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
