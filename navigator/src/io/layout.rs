//! Room layout files (TOML, `[[rooms]]` tables).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::graph::GraphEnvironment;
use crate::core::layout::LayoutConfig;

/// Load a layout file and build the graph environment from it.
pub fn load_layout(path: &Path) -> Result<GraphEnvironment> {
    debug!(path = %path.display(), "loading layout");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let layout: LayoutConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    let env = GraphEnvironment::new(&layout).with_context(|| format!("build {}", path.display()))?;
    debug!(rooms = layout.rooms.len(), "layout loaded");
    Ok(env)
}

/// Write a layout as TOML with a trailing newline.
pub fn write_layout(path: &Path, layout: &LayoutConfig) -> Result<()> {
    let mut buf = toml::to_string_pretty(layout).context("serialize layout toml")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}
