use crate::core::HostMatch;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "vlogkit.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host_match: HostMatch,
    pub related_limit: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_match: HostMatch::Substring,
            related_limit: 5,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads `path` if given, otherwise `vlogkit.toml` in the working
    /// directory when present. An explicit path that cannot be read is an
    /// error; a missing default file yields the defaults.
    pub async fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE)).await,
        }
    }

    /// Reads `path` when it exists. Failing to find out whether it exists,
    /// e.g. permission denied, is an error rather than a silent default.
    pub async fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check for config file {}", path.display()))?;
        if exists {
            Self::from_file(path).await
        } else {
            debug!("No {} found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub async fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
