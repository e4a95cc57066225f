//! Layered configuration: defaults, then `nadir.toml` (or `--config`), then
//! `NADIR_*` environment variables.
//!
//! Nested keys use `__` in the environment: `NADIR_DUMP__DEPTH=3`.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "nadir.toml";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `warn` or `nadir_validator=trace`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    pub depth: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            depth: nadir_dump::DEFAULT_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub dump: DumpConfig,
    /// Route map used by `nadir route` when `--routes` is not given.
    pub routes: Option<PathBuf>,
}

impl Config {
    /// Loads the layered configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => {
                anyhow::ensure!(path.is_file(), "config file {} not found", path.display());
                Toml::file(path)
            }
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        let config = Self::figment(file).extract()?;
        Ok(config)
    }

    fn figment(file: figment::providers::Data<Toml>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            // NADIR_LOG is the bare filter shorthand read by the logger.
            .merge(Env::prefixed("NADIR_").ignore(&["log"]).split("__"))
    }
}
