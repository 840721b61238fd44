//! Configuration management for the career pathfinder

use crate::error::{PathfinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub ranking: RankingConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Weights applied by the career scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Multiplier on `affinity * neighbour_score` for each top field.
    pub affinity_weight: f64,
    /// Multiplier on each relevant trait score inside the trait boost.
    pub trait_weight: f64,
    /// Multiplier on the summed trait boost.
    pub trait_boost_weight: f64,
    /// How many of the user's strongest fields feed the affinity term.
    pub top_fields: usize,
    /// Weight returned for any field pair missing from the affinity graph.
    pub default_affinity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    pub max_results: usize,
    pub min_results: usize,
    /// Leading entries re-appended at the tail for continuous scrolling.
    pub padding_copies: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Markers that close a section of the raw analysis document.
    pub boundary_markers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            affinity_weight: 0.3,
            trait_weight: 0.2,
            trait_boost_weight: 0.2,
            top_fields: 3,
            default_affinity: 0.1,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: 8,
            min_results: 6,
            padding_copies: 4,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            boundary_markers: vec![
                "###".to_string(),
                "Conclusión".to_string(),
                "Oportunidades y desafíos".to_string(),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            ranking: RankingConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load the config from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| PathfinderError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PathfinderError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-pathfinder")
            .join("config.toml")
    }

    /// Reject values that would make ranking or extraction meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.ranking.min_results > self.ranking.max_results {
            return Err(PathfinderError::Configuration(format!(
                "ranking.min_results ({}) exceeds ranking.max_results ({})",
                self.ranking.min_results, self.ranking.max_results
            )));
        }
        if self.analysis.boundary_markers.iter().any(|m| m.is_empty()) {
            return Err(PathfinderError::Configuration(
                "analysis.boundary_markers must not contain empty markers".to_string(),
            ));
        }
        Ok(())
    }
}
