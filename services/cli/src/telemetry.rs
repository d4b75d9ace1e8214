use std::env;
use std::fmt;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter(ParseError),
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter(err) => write!(f, "invalid tracing filter: {err}"),
            TelemetryError::Init(err) => {
                write!(f, "unable to install tracing subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter(err) => Some(err),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber for the batch run. `RUST_LOG` takes
/// precedence over the configured level; a garbled directive in either
/// is an error rather than a silent fallback.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let directives =
        env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| log_level.to_string());
    let filter = EnvFilter::try_new(directives).map_err(TelemetryError::Filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbled_filter_is_rejected_before_install() {
        env::remove_var(EnvFilter::DEFAULT_ENV);
        let err = init("not==a//filter").expect_err("bad directives must fail");
        assert!(matches!(err, TelemetryError::Filter(_)));
    }
}
