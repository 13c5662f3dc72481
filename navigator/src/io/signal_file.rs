//! Control signal files: `0`/`1` samples as text or as a JSON array.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::signal::ControlSignal;

/// Load a signal file.
///
/// `.json` files hold an array of integers; anything else is parsed as text
/// (see `ControlSignal::parse`). Sample values are not validated here.
pub fn load_signal(path: &Path) -> Result<ControlSignal> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let signal = if is_json {
        let samples: Vec<i64> = serde_json::from_str(&contents)
            .with_context(|| format!("parse {}", path.display()))?;
        ControlSignal::new(samples)
    } else {
        ControlSignal::parse(&contents).with_context(|| format!("parse {}", path.display()))?
    };
    debug!(path = %path.display(), len = signal.len(), "signal loaded");
    Ok(signal)
}
