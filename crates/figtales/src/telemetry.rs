//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,figtales=debug";

/// The filter directive to use for the given verbosity.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects `debug` for
/// everything and the default is [`DEFAULT_FILTER`].
pub fn filter_directive(verbose: bool) -> String {
    match std::env::var("RUST_LOG") {
        Ok(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "debug".to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize console logging to stderr.
///
/// # Errors
///
/// Fails when the filter is invalid or a global subscriber is already set.
pub fn init_console_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_new(filter_directive(verbose))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
