//! Item-list extraction from a document section

use crate::analysis::section::SectionExtractor;
use log::debug;
use regex::Regex;
use std::fmt;

pub const DEFAULT_SKILLS: [&str; 3] = [
    "Desarrollar habilidades técnicas relacionadas con la carrera",
    "Mejorar capacidades de comunicación y trabajo en equipo",
    "Fortalecer conocimientos en matemáticas y ciencias",
];

/// One way of turning section text into items.
pub trait ListStrategy: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Items found in `section`, in document order. Empty when nothing matched.
    fn extract(&self, section: &str) -> Vec<String>;
}

/// First capture group of every match of a single pattern.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    name: String,
    regex: Regex,
}

impl PatternStrategy {
    pub fn new(name: &str, regex: Regex) -> Self {
        Self {
            name: name.to_string(),
            regex,
        }
    }

    /// `- **Label:** description`
    pub fn bold_label() -> Self {
        Self::new(
            "bold-label",
            Regex::new(r"-\s*\*\*([^:*\n]+):\*\*").expect("Invalid bold label regex"),
        )
    }

    /// `• item`
    pub fn bullet() -> Self {
        Self::new("bullet", Regex::new(r"•\s*([^•\n]+)").expect("Invalid bullet regex"))
    }

    /// `1. item`
    pub fn numbered() -> Self {
        Self::new("numbered", Regex::new(r"\d+\.\s*([^\n]+)").expect("Invalid numbered regex"))
    }
}

impl ListStrategy for PatternStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, section: &str) -> Vec<String> {
        self.regex
            .captures_iter(section)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

/// Runs every inner strategy and concatenates their results.
#[derive(Debug)]
pub struct MergedStrategy {
    name: String,
    parts: Vec<Box<dyn ListStrategy>>,
}

impl MergedStrategy {
    pub fn new(name: &str, parts: Vec<Box<dyn ListStrategy>>) -> Self {
        Self {
            name: name.to_string(),
            parts,
        }
    }

    /// Bold-label, bullet and numbered items, merged in that order.
    pub fn markup() -> Self {
        Self::new(
            "markup",
            vec![
                Box::new(PatternStrategy::bold_label()),
                Box::new(PatternStrategy::bullet()),
                Box::new(PatternStrategy::numbered()),
            ],
        )
    }
}

impl ListStrategy for MergedStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, section: &str) -> Vec<String> {
        self.parts.iter().flat_map(|part| part.extract(section)).collect()
    }
}

/// Every non-blank line, trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStrategy;

impl ListStrategy for LineStrategy {
    fn name(&self) -> &str {
        "lines"
    }

    fn extract(&self, section: &str) -> Vec<String> {
        section
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Resolves a section and tries each strategy until one yields items.
///
/// Never returns an empty list: the fixed defaults close the cascade.
#[derive(Debug)]
pub struct ListExtractor {
    strategies: Vec<Box<dyn ListStrategy>>,
    defaults: Vec<String>,
}

impl ListExtractor {
    pub fn new() -> Self {
        Self::with_strategies(vec![Box::new(MergedStrategy::markup()), Box::new(LineStrategy)])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ListStrategy>>) -> Self {
        Self {
            strategies,
            defaults: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_defaults(mut self, defaults: Vec<String>) -> Self {
        if !defaults.is_empty() {
            self.defaults = defaults;
        }
        self
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    pub fn extract(&self, sections: &SectionExtractor, text: &str, header: &str) -> Vec<String> {
        match sections.extract(text, header) {
            Some(section) => self.items_from_section(&section),
            None => self.defaults.clone(),
        }
    }

    /// Apply the strategy cascade to already-sliced section text.
    pub fn items_from_section(&self, section: &str) -> Vec<String> {
        for strategy in &self.strategies {
            let items = strategy.extract(section);
            if !items.is_empty() {
                debug!("List strategy '{}' produced {} items", strategy.name(), items.len());
                return items;
            }
        }
        debug!("No list strategy matched, using defaults");
        self.defaults.clone()
    }
}

impl Default for ListExtractor {
    fn default() -> Self {
        Self::new()
    }
}
