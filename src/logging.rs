//! Diagnostic logging setup
//!
//! User-facing notices are printed directly; this only wires up `tracing`
//! for the debug trail behind them.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or
/// everything from dockpin at debug level with `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "dockpin=debug" } else { "warn" }
}
