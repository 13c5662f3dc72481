//! Development-time tracing for debugging navigation runs.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Per-query and per-step diagnostics via
//!   `RUST_LOG`, output to stderr. Not part of navigator product output.
//!
//! - **Console observer (`io/console`)**: One line per position on stdout.
//!   Always written, unaffected by `RUST_LOG`.
//!
//! - **Trace files (`io/trace_log`)**: Optional JSON record of a run.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber for the `navigator` binary.
///
/// The filter comes from `RUST_LOG` and falls back to `warn`, which keeps only
/// observer failures visible. `info` adds run start and stop, `debug` adds one
/// event per query (candidate, bit, verdict) and per finished step, and
/// `trace` adds pacing sleeps.
///
/// # Example
/// ```bash
/// RUST_LOG=navigator::driver=debug navigator grid --signal signal.txt --pace-ms 0
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
