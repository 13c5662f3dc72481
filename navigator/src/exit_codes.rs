//! Stable exit codes for navigator CLI commands.

/// Run finished by consuming the whole signal.
pub const OK: i32 = 0;
/// Configuration, layout, signal or I/O error; no run or an aborted run.
pub const INVALID: i32 = 1;
/// Run stopped early by cancellation or a closed observer.
pub const INTERRUPTED: i32 = 2;
