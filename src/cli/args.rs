//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Cambly lesson downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "cambly-downloader",
    version,
    about = "Download your lesson recordings from Cambly",
    long_about = "A CLI tool to download your Cambly lesson recordings.\n\n\
                  Logs in with your account, lists your most recent lessons, and saves\n\
                  each recording under <directory>/<year>/<month>/."
)]
pub struct Args {
    /// Cambly account email.
    #[arg(short, long, env = "CAMBLY_EMAIL")]
    pub email: Option<String>,

    /// Cambly account password.
    #[arg(short, long, env = "CAMBLY_PASSWORD")]
    pub password: Option<String>,

    /// Number of most recent lessons to download (0 or less for all).
    #[arg(short, long)]
    pub limit: Option<i64>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub destination_dir: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(email) = self.email {
            config.account.email = email;
        }

        if let Some(password) = self.password {
            config.account.password = password;
        }

        if let Some(limit) = self.limit {
            config.options.limit = limit;
        }

        if let Some(dir) = self.destination_dir {
            config.options.destination_dir = Some(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(email: Option<&str>, limit: Option<i64>) -> Args {
        Args {
            email: email.map(String::from),
            password: None,
            limit,
            destination_dir: None,
            config: PathBuf::from("config.toml"),
            debug: false,
        }
    }

    #[test]
    fn test_merge_overrides_config_values() {
        let mut config = Config::default();
        config.account.email = "file@example.com".to_string();
        config.options.limit = 5;

        args(Some("cli@example.com"), Some(3)).merge_into_config(&mut config);

        assert_eq!(config.account.email, "cli@example.com");
        assert_eq!(config.options.limit, 3);
    }

    #[test]
    fn test_merge_keeps_config_values_when_unset() {
        let mut config = Config::default();
        config.account.email = "file@example.com".to_string();
        config.options.limit = 5;

        args(None, None).merge_into_config(&mut config);

        assert_eq!(config.account.email, "file@example.com");
        assert_eq!(config.options.limit, 5);
    }
}
