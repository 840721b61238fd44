//! Input manager for score profiles and analysis documents

use crate::analysis::{AnalysisResponse, AnalysisSource};
use crate::error::{PathfinderError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use crate::profile::ScoreProfile;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached_text) = self.cache.get(&path_str) {
            info!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        if !path.exists() {
            return Err(PathfinderError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match self.detect_file_type(path)? {
            FileType::Markdown => {
                info!("Reading markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Text | FileType::Json | FileType::Toml => {
                info!("Reading text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(PathfinderError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        self.cache.insert(path_str, text.clone());

        Ok(text)
    }

    /// Field and trait scores from a JSON or TOML file.
    pub async fn load_scores(&mut self, path: &Path) -> Result<ScoreProfile> {
        let file_type = self.detect_file_type(path)?;
        if !file_type.is_structured() {
            return Err(PathfinderError::UnsupportedFormat(format!(
                "Score profiles must be JSON or TOML: {}",
                path.display()
            )));
        }

        let content = self.extract_text(path).await?;
        let profile: ScoreProfile = match file_type {
            FileType::Toml => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        if profile.is_empty() {
            warn!("Score profile {} contains no scores", path.display());
        }
        Ok(profile)
    }

    /// A backend payload when the file is JSON, otherwise raw analysis text.
    pub async fn load_analysis(&mut self, path: &Path) -> Result<AnalysisSource> {
        let file_type = self.detect_file_type(path)?;
        let content = self.extract_text(path).await?;

        match file_type {
            FileType::Json => {
                let response = AnalysisResponse::from_json(&content)?;
                if !response.is_success() {
                    warn!("Analysis payload reports status '{}'", response.status);
                }
                Ok(AnalysisSource::from(response))
            }
            _ => Ok(AnalysisSource::Raw(content)),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        if path.extension().is_none() {
            return Err(PathfinderError::InvalidInput(format!(
                "File has no extension: {}",
                path.display()
            )));
        }

        Ok(FileType::from_path(path))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
