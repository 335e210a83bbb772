//! Configuration module for the cambly-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{AccountConfig, Config, OptionsConfig};
pub use validation::validate_config;
