//! Log configuration.

use std::str::FromStr;

use labelbot_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_ENV_CONFIG: &str = "info,labelbot=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(
        "Could not set tracing global default subscriber,\n  caused by: {}",
        source
    )]
    TracingSetGlobalDefaultError {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
    #[error("Could not initialize tracing log tracer,\n  caused by: {}", source)]
    TracingLogTracerError {
        source: tracing::log::SetLoggerError,
    },
    #[error(
        "Wrong env filter configuration: {}\n  caused by: {}",
        configuration,
        source
    )]
    EnvFilterConfigurationError {
        source: tracing_subscriber::filter::ParseError,
        configuration: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable span tree.
    Tree,
    /// One JSON object per line.
    Bunyan,
}

impl LogFormat {
    pub fn from_config(config: &Config) -> Self {
        if config.logging.use_bunyan {
            Self::Bunyan
        } else {
            Self::Tree
        }
    }
}

fn build_env_filter(configuration: String) -> Result<EnvFilter, LoggingError> {
    EnvFilter::from_str(&configuration).map_err(|e| LoggingError::EnvFilterConfigurationError {
        source: e,
        configuration,
    })
}

/// Configure logging.
///
/// Logs go to stderr, so command output on stdout stays clean.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::TracingLogTracerError { source: e })?;

    let filter_layer = build_env_filter(
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_ENV_CONFIG.to_string()),
    )?;
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();

    let (tree_layer, json_storage_layer, bunyan_layer) = match LogFormat::from_config(config) {
        LogFormat::Tree => (
            Some(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            ),
            None,
            None,
        ),
        LogFormat::Bunyan => (
            None,
            Some(JsonStorageLayer),
            Some(BunyanFormattingLayer::new(app_name, std::io::stderr)),
        ),
    };

    let subscriber = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(tree_layer)
        .with(filter_layer)
        .with(json_storage_layer)
        .with(bunyan_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::TracingSetGlobalDefaultError { source: e })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_config() {
        let mut config = Config::from_defaults();
        assert_eq!(LogFormat::from_config(&config), LogFormat::Tree);

        config.logging.use_bunyan = true;
        assert_eq!(LogFormat::from_config(&config), LogFormat::Bunyan);
    }

    #[test]
    fn invalid_filter_is_reported() {
        assert!(build_env_filter(DEFAULT_ENV_CONFIG.into()).is_ok());

        let error = build_env_filter("labelbot=loud".into()).unwrap_err();
        assert!(error
            .to_string()
            .starts_with("Wrong env filter configuration: labelbot=loud"));
    }
}
