use std::borrow::Cow;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

const LOG_ENV: &str = "RELATIVE_DATE_DESCRIPTOR_LOG";
const SENTRY_LOG_ENV: &str = "RELATIVE_DATE_DESCRIPTOR_SENTRY_LOG";

/// Initialises tracing, and Sentry when the DSN is given.
///
/// Logs go to stderr, stdout only contains the description.
pub fn init(
    sentry_dsn: Option<String>,
    traces_sample_rate: f32,
) -> Result<Option<ClientInitGuard>> {
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(LOG_ENV, "relative_date_descriptor=warn")?);

    let (guard, sentry_layer) = match sentry_dsn {
        Some(dsn) => {
            let guard = sentry::init((
                dsn,
                ClientOptions {
                    release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
                    traces_sample_rate,
                    ..Default::default()
                },
            ));
            let layer = sentry::integrations::tracing::layer()
                .event_filter(|metadata| sentry_event_filter(metadata.level()))
                .with_filter(env_filter(SENTRY_LOG_ENV, "relative_date_descriptor=debug")?);
            (Some(guard), Some(layer))
        }
        None => (None, None),
    };

    tracing_subscriber::Registry::default()
        .with(format_layer)
        .with(sentry_layer)
        .try_init()
        .context("failed to initialise tracing")?;

    Ok(guard)
}

fn env_filter(env: &str, default_directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(env)
        .or_else(|_| EnvFilter::try_new(default_directives))
        .with_context(|| format!("invalid `{}` directives", env))
}

/// Warnings and errors are reported, the rest only accompany them.
fn sentry_event_filter(level: &Level) -> EventFilter {
    match *level {
        Level::ERROR | Level::WARN => EventFilter::Event,
        _ => EventFilter::Breadcrumb,
    }
}
