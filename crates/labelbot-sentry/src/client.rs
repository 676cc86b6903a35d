use std::{fmt::Display, future::Future, str::FromStr};

use labelbot_config::Config;
use sentry::{
    integrations::debug_images::DebugImagesIntegration, types::Dsn, ClientOptions, Level,
};
use tracing::{info, warn};

/// Configure Sentry integration by wrapping a function.
///
/// A failing function is reported to Sentry before its error is returned.
pub async fn with_sentry_configuration<T, Fut, R, E>(config: &Config, func: T) -> Result<R, E>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    E: Display,
{
    let guard = {
        if config.sentry.url.is_empty() {
            None
        } else {
            match Dsn::from_str(&config.sentry.url) {
                Ok(dsn) => {
                    info!("Sentry integration enabled.");

                    let mut options =
                        ClientOptions::new().add_integration(DebugImagesIntegration::default());

                    options.dsn = Some(dsn);
                    options.default_integrations = true;
                    options.in_app_exclude.push("sentry");
                    options.in_app_exclude.push("tokio");
                    options.release = Some(config.version.to_string().into());
                    options.attach_stacktrace = true;
                    options.traces_sample_rate = config.sentry.traces_sample_rate;
                    options.debug = false;

                    Some(sentry::init(options))
                }
                Err(e) => {
                    warn!(error = %e, "Invalid Sentry URL, Sentry integration disabled.");
                    None
                }
            }
        }
    };

    let result = func().await;
    if let (Some(_), Err(e)) = (&guard, &result) {
        sentry::capture_message(&e.to_string(), Level::Error);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_results_through() {
        let config = Config::from_defaults();

        let ok: Result<u32, String> = with_sentry_configuration(&config, || async { Ok(1) }).await;
        assert_eq!(ok, Ok(1));

        let err: Result<u32, String> =
            with_sentry_configuration(&config, || async { Err("boom".to_string()) }).await;
        assert_eq!(err, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn invalid_url_disables_integration() {
        let mut config = Config::from_defaults();
        config.sentry.url = "not a dsn".into();

        let ok: Result<(), String> = with_sentry_configuration(&config, || async { Ok(()) }).await;
        assert!(ok.is_ok());
    }
}
