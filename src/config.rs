// src/config.rs
//! Optional `recloc.toml` configuration.
//!
//! Absent file or unparseable content falls back to defaults; configuration
//! is a convenience layer, never a hard dependency.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "recloc.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub locator: LocatorConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    #[serde(default = "default_length")]
    pub length: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_base_count")]
    pub base_count: usize,
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            base_count: default_base_count(),
            max_multiplier: default_max_multiplier(),
            max_length: default_max_length(),
        }
    }
}

fn default_length() -> usize {
    crate::locator::DEFAULT_LENGTH
}
fn default_base_count() -> usize {
    50
}
fn default_max_multiplier() -> usize {
    4
}
fn default_max_length() -> usize {
    6
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config with local `recloc.toml` settings applied.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    pub fn load_local_config(&mut self) {
        if let Ok(content) = fs::read_to_string(Path::new(CONFIG_FILE)) {
            self.parse_toml(&content);
        }
    }

    pub fn parse_toml(&mut self, content: &str) {
        if let Ok(parsed) = toml::from_str::<Config>(content) {
            *self = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::new();
        assert_eq!(c.locator.length, 4);
        assert_eq!(c.sweep.base_count, 50);
        assert_eq!(c.sweep.max_multiplier, 4);
        assert_eq!(c.sweep.max_length, 6);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let mut c = Config::new();
        c.parse_toml("[locator]\nlength = 6\n");
        assert_eq!(c.locator.length, 6);
        assert_eq!(c.sweep.max_length, 6);
    }

    #[test]
    fn garbage_toml_is_ignored() {
        let mut c = Config::new();
        c.parse_toml("not toml at all [[[");
        assert_eq!(c.locator.length, 4);
    }
}
