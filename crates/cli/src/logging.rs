use anyhow::Result;
use std::str::FromStr;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use crate::config::{LogFormat, LogProperties};

fn format_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // Stdout carries command output, logs go to stderr.
    let f = fmt::layer().with_writer(std::io::stderr);
    match format {
        LogFormat::Compact => f.compact().boxed(),
        LogFormat::Json => f.json().boxed(),
    }
}

/// Returns the filter directives for the given log properties.
pub(crate) fn filter_directives(log: &LogProperties) -> Result<String> {
    match &log.filter {
        // Use custom filter that is provided by user
        Some(filter) => Ok(filter.clone()),
        // Use the default filter when only verbosity level is provided
        None => {
            let level = Level::from_str(&log.level)?;
            Ok(format!(
                "wordecc={level},wordecc_cli={level},wordecc_core={level}"
            ))
        }
    }
}

pub fn init_tracing(log: &LogProperties) -> Result<()> {
    let filter_layer = EnvFilter::builder().parse(filter_directives(log)?)?;

    Registry::default()
        .with(filter_layer)
        .with(format_layer(log.format))
        .try_init()?;

    Ok(())
}
