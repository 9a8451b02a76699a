//! Logging setup.
//!
//! Every binary calls [`init`] once before opening its window. The filter
//! comes from `RUST_LOG` when set, otherwise from the directive passed in.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter the subscriber will use.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(default_directive: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
