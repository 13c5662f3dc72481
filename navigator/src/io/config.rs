//! Navigator configuration stored in `navigator.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::grid::GridBounds;
use crate::driver::{DriveOptions, FinalStep};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "navigator.toml";

/// Navigator configuration (TOML).
///
/// Missing fields default to the values the reference floor plan was tuned
/// with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Delay after each published room, in milliseconds.
    pub graph_pace_ms: u64,

    /// Delay after each published grid cell, in milliseconds.
    pub grid_pace_ms: u64,

    /// Cursor test deciding whether another step runs.
    pub final_step: FinalStep,

    pub grid: GridBounds,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            graph_pace_ms: 2_000,
            grid_pace_ms: 1_000,
            final_step: FinalStep::Inclusive,
            grid: GridBounds::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid
            .validate()
            .map_err(|err| anyhow!("grid: {err}"))?;
        Ok(())
    }

    /// Use one delay for both environments.
    pub fn set_pace_ms(&mut self, pace_ms: u64) {
        self.graph_pace_ms = pace_ms;
        self.grid_pace_ms = pace_ms;
    }

    pub fn graph_options(&self) -> DriveOptions {
        self.drive_options(self.graph_pace_ms)
    }

    pub fn grid_options(&self) -> DriveOptions {
        self.drive_options(self.grid_pace_ms)
    }

    fn drive_options(&self, pace_ms: u64) -> DriveOptions {
        DriveOptions {
            pace: Duration::from_millis(pace_ms),
            final_step: self.final_step,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `NavigatorConfig::default()`.
pub fn load_config(path: &Path) -> Result<NavigatorConfig> {
    if !path.exists() {
        let cfg = NavigatorConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: NavigatorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &NavigatorConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
