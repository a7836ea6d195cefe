//! Optional TOML configuration for console hunts.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use wumpus_core::HuntRules;

/// Settings read from a configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Seed for the cave's random source; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Rules every hunt is played by.
    pub hunt: HuntRules,
}

impl Config {
    /// Reads and validates the configuration stored at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid config file at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).context("failed to parse config toml contents")?;
        config
            .hunt
            .validate()
            .context("hunt rules cannot be played")?;
        Ok(config)
    }
}
