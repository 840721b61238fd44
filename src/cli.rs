//! CLI interface for the career pathfinder

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "career-pathfinder")]
#[command(about = "Vocational career recommendations from quiz scores")]
#[command(long_about = "Rank engineering careers from field and personality-trait scores and extract per-career rationale from an analysis document")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog for a score profile
    Recommend {
        /// Score profile (JSON, TOML)
        #[arg(short, long)]
        scores: PathBuf,

        /// Analysis document (TXT, MD) or backend payload (JSON)
        #[arg(short, long)]
        analysis: Option<PathBuf>,

        /// Output detailed report
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show the analysis for one career
    Analyze {
        /// Analysis document (TXT, MD) or backend payload (JSON)
        #[arg(short, long)]
        analysis: PathBuf,

        /// Career name as it appears in the catalog
        #[arg(long)]
        career: String,
    },

    /// List the career catalog
    Catalog {
        /// Only careers in this field (e.g. computerScience, "Robótica")
        #[arg(short, long)]
        field: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("html").unwrap(), OutputFormat::Html);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("perfil.JSON"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("perfil.csv"), &["json", "toml"]).is_err());
        assert!(validate_file_extension(Path::new("perfil"), &["json"]).is_err());
    }

    #[test]
    fn test_cli_parses_recommend() {
        let cli = Cli::try_parse_from([
            "career-pathfinder",
            "recommend",
            "--scores",
            "perfil.json",
            "--output",
            "json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Recommend { scores, output, .. } => {
                assert_eq!(scores, PathBuf::from("perfil.json"));
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected recommend"),
        }
    }
}
