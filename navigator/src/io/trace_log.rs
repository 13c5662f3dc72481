//! JSON trace files for completed (or interrupted) runs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::driver::NavigationTrace;

/// Write `trace` as pretty JSON with a trailing newline, creating parent
/// directories as needed.
pub fn write_trace<P: Serialize>(path: &Path, trace: &NavigationTrace<P>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create trace dir {}", parent.display()))?;
    }
    let mut buf = serde_json::to_string_pretty(trace).context("serialize trace")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), steps = trace.steps.len(), "trace written");
    Ok(())
}
