//! I/O helpers for the navigator: files, console output, pacing.

pub mod config;
pub mod console;
pub mod layout;
pub mod pacing;
pub mod signal_file;
pub mod trace_log;
