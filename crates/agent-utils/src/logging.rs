//! Logging and tracing utilities

use crate::config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
pub fn init_tracing() {
    init_tracing_with(&Config::default());
}

/// Initialize tracing from a [`Config`]
///
/// `RUST_LOG` wins over `config.log_filter` when it is set and valid.
/// Calling this twice is a no-op: the second global subscriber is rejected
/// and the first one stays active.
pub fn init_tracing_with(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Tracing already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_init_does_not_panic() {
        let config = Config::default();
        init_tracing_with(&config);
        init_tracing_with(&config);
    }
}
