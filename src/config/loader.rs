//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Account credentials configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Cambly account email.
    #[serde(default)]
    pub email: String,

    /// Cambly account password.
    #[serde(default)]
    pub password: String,

    /// Browser user agent string sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Number of most recent lessons to fetch. Zero or negative means no
    /// limit (the server default applies).
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Destination root for downloaded recordings.
    #[serde(default)]
    pub destination_dir: Option<PathBuf>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            destination_dir: None,
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/81.0.4044.138 Safari/537.36".to_string()
}

fn default_limit() -> i64 {
    1
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective destination directory.
    pub fn destination_dir(&self) -> PathBuf {
        self.options
            .destination_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.options.limit, 1);
        assert!(config.options.destination_dir.is_none());
        assert!(config.account.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_load_from_toml() {
        let content = r#"
[account]
email = "student@example.com"
password = "secret"

[options]
limit = 10
destination_dir = "/tmp/lessons"
"#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.account.email, "student@example.com");
        assert_eq!(config.options.limit, 10);
        assert_eq!(
            config.options.destination_dir,
            Some(PathBuf::from("/tmp/lessons"))
        );
        // unspecified fields fall back to defaults
        assert!(config.account.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_destination_dir_defaults_to_cwd() {
        let config = Config::default();
        assert_eq!(
            config.destination_dir(),
            std::env::current_dir().unwrap()
        );
    }
}
