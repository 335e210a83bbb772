//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_email(&config.account.email)?;
    validate_password(&config.account.password)?;

    Ok(())
}

/// Validate the account email.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(Error::MissingConfig("email".to_string()));
    }

    if !email.contains('@') {
        return Err(Error::ConfigValidation {
            field: "email".to_string(),
            message: format!("'{}' is not a valid email address", email),
        });
    }

    // Check for placeholder values
    let email_lower = email.to_lowercase();
    if email_lower.contains("replaceme") || email_lower.starts_with("your_email") {
        return Err(Error::ConfigValidation {
            field: "email".to_string(),
            message: "Email appears to be a placeholder. Please provide your Cambly account email."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the account password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::MissingConfig("password".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.account.email = "student@example.com".to_string();
        config.account.password = "secret".to_string();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_email() {
        let mut config = valid_config();
        config.account.email.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_invalid_email() {
        let mut config = valid_config();
        config.account.email = "not-an-email".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_placeholder_email() {
        assert!(validate_email("replaceme@example.com").is_err());
    }

    #[test]
    fn test_missing_password() {
        let mut config = valid_config();
        config.account.password.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }
}
