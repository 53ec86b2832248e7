//! Logging setup

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Verbosity of the `schemadoc` crates; dependencies stay silent below
/// `trace`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    /// Per-render statistics
    Debug,
    /// Every event, dependencies included
    Trace,
}

impl LogLevel {
    fn directives(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "schemadoc=error,schemadoc_core=error,off",
            LogLevel::Warn => "schemadoc=warn,schemadoc_core=warn,off",
            LogLevel::Info => "schemadoc=info,schemadoc_core=info,off",
            LogLevel::Debug => "schemadoc=debug,schemadoc_core=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides `level` when set.
pub(crate) fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directives()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_parse() {
        for level in LogLevel::value_variants() {
            assert!(EnvFilter::try_new(level.directives()).is_ok(), "{level:?}");
        }
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }
}
