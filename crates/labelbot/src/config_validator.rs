//! Validation utilities.

use std::collections::HashMap;

use labelbot_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push_str(&format!("\n  - Missing env. var.: {}", name));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push_str(&format!("\n  - Invalid env. var.: {} ({})", name, reason));
    }

    let mut error = String::new();

    if config.name.is_empty() {
        _missing(&mut error, "BOT_NAME");
    }

    if config.api.driver == ApiDriver::GitHub && config.api.github.token.is_empty() {
        _missing(&mut error, "BOT_API_GITHUB_TOKEN");
    }

    if !(0.0..=1.0).contains(&config.sentry.traces_sample_rate) {
        _invalid(
            &mut error,
            "BOT_SENTRY_TRACES_SAMPLE_RATE",
            "should be between 0 and 1",
        );
    }

    let labels = [
        ("BOT_LABEL_WIP", &config.labels.wip),
        ("BOT_LABEL_APPROVED", &config.labels.approved),
        ("BOT_LABEL_CHANGES_REQUIRED", &config.labels.changes_required),
        ("BOT_LABEL_NEEDS_REVIEW", &config.labels.needs_review),
        ("BOT_LABEL_CONTRIBUTOR", &config.labels.contributor),
    ];

    // Label names are case-insensitive on GitHub.
    let mut seen: HashMap<String, &str> = HashMap::new();
    for (var_name, label) in labels {
        if label.trim().is_empty() {
            _missing(&mut error, var_name);
        } else if let Some(other) = seen.insert(label.to_lowercase(), var_name) {
            _invalid(&mut error, var_name, &format!("same label as {}", other));
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::from_defaults();
        config.api.github.token = "iamatoken".into();
        config
    }

    #[test]
    fn test_valid_configuration() {
        assert!(validate_configuration(&valid_config()).is_ok());
    }

    #[test]
    fn test_token_is_only_needed_for_github() {
        let mut config = valid_config();
        config.api.github.token = String::new();

        assert_eq!(
            validate_configuration(&config).unwrap_err().to_string(),
            "Errors on environment variables:\n\n  - Missing env. var.: BOT_API_GITHUB_TOKEN"
        );

        config.api.driver = ApiDriver::Null;
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn test_label_errors_are_aggregated() {
        let mut config = valid_config();
        config.labels.wip = " ".into();
        config.labels.needs_review = "Approved".into();
        config.sentry.traces_sample_rate = 2.0;

        assert_eq!(
            validate_configuration(&config).unwrap_err().to_string(),
            concat!(
                "Errors on environment variables:\n",
                "\n  - Invalid env. var.: BOT_SENTRY_TRACES_SAMPLE_RATE (should be between 0 and 1)",
                "\n  - Missing env. var.: BOT_LABEL_WIP",
                "\n  - Invalid env. var.: BOT_LABEL_NEEDS_REVIEW (same label as BOT_LABEL_APPROVED)",
            )
        );
    }
}
