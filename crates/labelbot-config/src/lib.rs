//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Names of the labels owned by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelsConfig {
    /// Draft pull requests.
    pub wip: String,
    /// Approved pull requests.
    pub approved: String,
    /// Pull requests with at least one change request.
    pub changes_required: String,
    /// Pull requests without actionable feedback.
    pub needs_review: String,
    /// Pull requests opened by outside contributors.
    pub contributor: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            wip: "work in progress".into(),
            approved: "approved".into(),
            changes_required: "changes required".into(),
            needs_review: "🕵️‍♀️ needs review".into(),
            contributor: "contributor".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Only count reviews from repository members and owners.
    pub trusted_reviews_only: bool,
    /// Manage the contributor label.
    pub label_contributors: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot username.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Label names.
    pub labels: LabelsConfig,
    /// Policy options.
    pub policy: PolicyConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        let default_labels = LabelsConfig::default();

        Ok(Config {
            name: env_to_str("BOT_NAME", "labelbot"),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BOT_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("BOT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("BOT_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_first_str(
                        &["BOT_API_GITHUB_TOKEN", "INPUT_GITHUB-TOKEN", "GITHUB_TOKEN"],
                        "",
                    ),
                },
            },
            labels: LabelsConfig {
                wip: env_to_str("BOT_LABEL_WIP", &default_labels.wip),
                approved: env_to_str("BOT_LABEL_APPROVED", &default_labels.approved),
                changes_required: env_to_str(
                    "BOT_LABEL_CHANGES_REQUIRED",
                    &default_labels.changes_required,
                ),
                needs_review: env_to_str("BOT_LABEL_NEEDS_REVIEW", &default_labels.needs_review),
                contributor: env_to_str("BOT_LABEL_CONTRIBUTOR", &default_labels.contributor),
            },
            policy: PolicyConfig {
                trusted_reviews_only: env_to_bool("BOT_POLICY_TRUSTED_REVIEWS_ONLY", false),
                label_contributors: env_to_bool("BOT_POLICY_LABEL_CONTRIBUTORS", false),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("BOT_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("BOT_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            version,
        })
    }

    /// Configuration with default values, without reading the environment.
    pub fn from_defaults() -> Self {
        Config {
            name: "labelbot".into(),
            api: ApiConfig {
                driver: ApiDriver::GitHub,
                github: ApiGitHubConfig {
                    connect_timeout: 5000,
                    root_url: "https://api.github.com".into(),
                    token: String::new(),
                },
            },
            labels: LabelsConfig::default(),
            policy: PolicyConfig::default(),
            logging: LoggingConfig { use_bunyan: false },
            sentry: SentryConfig {
                url: String::new(),
                traces_sample_rate: 0.0,
            },
            version: "0.0.0".into(),
        }
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

/// First non-empty variable among `names`.
fn env_to_first_str(names: &[&str], default: &str) -> String {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
