//! Process-wide `tracing` subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::LogFormat;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "techstore_commerce=debug,techstore_cli=debug,info"
    } else {
        "warn"
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Respects `RUST_LOG`; otherwise falls back to [`default_filter`]. Returns
/// an error if a subscriber is already installed.
pub fn init_tracing(
    format: LogFormat,
    verbose: bool,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Human)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("techstore_commerce=debug"));
    }

    #[test]
    fn test_second_init_reports_error() {
        let _ = init_tracing(LogFormat::Human, false);
        assert!(init_tracing(LogFormat::Json, true).is_err());
    }
}
