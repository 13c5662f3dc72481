//! Deterministic, pure logic for signal-driven navigation.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod automaton;
pub mod environment;
pub mod graph;
pub mod grid;
pub mod invariants;
pub mod layout;
pub mod signal;
pub mod types;
