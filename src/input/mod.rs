//! Input processing module
//! Handles file detection, text loading, and parsing of profiles and analysis payloads

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
