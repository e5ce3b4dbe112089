//! Log output setup.
//!
//! The library only emits `tracing` events under the `bay_throughput`
//! target; binaries and tests decide where they go.

use tracing_subscriber::{fmt, EnvFilter};

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "bay_throughput=info";

/// Directives installed by [`init_test`].
pub const TEST_DIRECTIVES: &str = "bay_throughput=debug";

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_DIRECTIVES`]. Panics if a global subscriber is
/// already set.
///
/// # Example
/// ```no_run
/// bay_throughput::logging::init();
/// ```
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    fmt()
        .with_env_filter(filter(directives.as_deref(), DEFAULT_DIRECTIVES))
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Debug-level subscriber writing through the test harness.
///
/// Only the first call installs it.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(filter(None, TEST_DIRECTIVES))
        .with_test_writer()
        .try_init();
}

fn filter(directives: Option<&str>, fallback: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_prefers_given_directives() {
        let f = filter(Some("bay_throughput=trace"), DEFAULT_DIRECTIVES);
        assert_eq!(f.to_string(), "bay_throughput=trace");
    }

    #[test]
    fn test_filter_falls_back() {
        assert_eq!(filter(None, DEFAULT_DIRECTIVES).to_string(), DEFAULT_DIRECTIVES);
    }

    #[test]
    fn test_init_test_is_repeatable() {
        init_test();
        init_test();
        tracing::debug!("subscriber installed");
    }
}
