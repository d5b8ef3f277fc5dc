use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modpath_core::config::{LOG_ENABLED, LOG_LEVEL};

/// `EnvFilter` directive for a logging switch and 0..=5 verbosity level.
pub fn filter_directive(enabled: bool, level: u8) -> &'static str {
    if !enabled {
        return "off";
    }
    match level {
        0 => "off",
        1 => "error",
        2 => "warn",
        3 => "info",
        4 => "debug",
        _ => "trace",
    }
}

/// Default filter from the build-time configuration.
pub fn default_filter() -> &'static str {
    filter_directive(LOG_ENABLED, LOG_LEVEL)
}

/// Colors only when the log stream is a terminal.
pub fn ansi_enabled<W: IsTerminal>(stream: &W) -> bool {
    stream.is_terminal()
}

/// Initialize logging. `RUST_LOG` overrides the build-time default.
///
/// Logs go to stderr so report output on stdout stays parseable.
pub fn init_telemetry() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter().into());

    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi_enabled(&std::io::stderr())),
        )
        .try_init();

    if result.is_err() {
        tracing::warn!("Telemetry already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false, 5), "off");
        assert_eq!(filter_directive(true, 0), "off");
        assert_eq!(filter_directive(true, 1), "error");
        assert_eq!(filter_directive(true, 3), "info");
        assert_eq!(filter_directive(true, 9), "trace");
        assert_eq!(default_filter(), "info");
    }

    #[test]
    fn test_no_ansi_when_redirected() {
        let file = tempfile::tempfile().unwrap();
        assert!(!ansi_enabled(&file));
    }
}
