//! Error types for the cambly-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Listing lessons failed: {0}")]
    List(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Invalid lesson timestamp: {0}")]
    InvalidTimestamp(i64),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// A run exits with SUCCESS even when login, listing, or individual downloads
/// failed; every failure is reported on the console instead. Only
/// configuration problems exit non-zero.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
}
