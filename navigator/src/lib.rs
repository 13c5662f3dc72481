//! Signal-driven navigation through a bounded environment.
//!
//! A subject moves through a graph of named rooms or a bounded grid, steered by
//! a finite binary control signal. Each step scans the candidate moves of the
//! current position in a fixed order and spends one signal bit per candidate
//! until a "yes" is heard. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (environments, signal, decision
//!   automaton). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and layout files, signal
//!   files, console output, pacing, trace files).
//!
//! The [`driver`] module coordinates core logic with I/O to run a whole
//! navigation, and backs the `navigator` CLI.

pub mod core;
pub mod driver;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
