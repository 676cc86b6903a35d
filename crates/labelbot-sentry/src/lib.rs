//! Sentry integration.

mod client;

pub use client::with_sentry_configuration;
