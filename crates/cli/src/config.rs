// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State directory resolution and the optional `config.toml`

use anyhow::{Context, Result};
use cw_engine::EngineConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Overrides the state directory when `--state-dir` is not given
pub const STATE_DIR_ENV: &str = "CW_STATE_DIR";
/// Log filter directives, e.g. `CW_LOG=debug`
pub const LOG_ENV: &str = "CW_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const CONFIG_FILE: &str = "config.toml";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub awarded_by: Option<String>,
    pub reward_reason: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load `config.toml` from the state directory, defaults if absent
    pub fn load(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(CONFIG_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn engine(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            awarded_by: self.awarded_by.clone().unwrap_or(defaults.awarded_by),
            reward_reason: self.reward_reason.clone().unwrap_or(defaults.reward_reason),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Files kept in the state directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub state_dir: PathBuf,
}

impl Paths {
    /// Resolve from the flag, then `CW_STATE_DIR`, then the platform data dir
    pub fn resolve(flag: Option<PathBuf>) -> Result<Self> {
        let env = std::env::var_os(STATE_DIR_ENV).map(PathBuf::from);
        let fallback = dirs::data_local_dir().map(|d| d.join("chorewheel"));
        let state_dir = pick_state_dir(flag, env, fallback)
            .context("no state directory: pass --state-dir or set CW_STATE_DIR")?;
        Ok(Self { state_dir })
    }

    pub fn wal(&self) -> PathBuf {
        self.state_dir.join("wal").join("chores.wal")
    }

    pub fn ledger(&self) -> PathBuf {
        self.state_dir.join("rewards.json")
    }
}

fn pick_state_dir(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    fallback: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.or(env.filter(|p| !p.as_os_str().is_empty()))
        .or(fallback)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
