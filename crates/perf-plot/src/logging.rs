// File: crates/perf-plot/src/logging.rs
// Summary: Process-wide tracing subscriber for the binaries.

use tracing::Level;

/// Compact fmt output on stderr at INFO. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
