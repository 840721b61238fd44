//! Career pathfinder library: career scoring, ranking and narrative extraction

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod profile;
pub mod recommend;

pub use config::Config;
pub use engine::RecommendationEngine;
pub use error::{PathfinderError, Result};
