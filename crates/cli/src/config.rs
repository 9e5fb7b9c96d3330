use anyhow::{Context as AnyhowContext, Result};
use country_resolver::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_BIND: &str = "127.0.0.1:7800";
pub const DEFAULT_INVOCATION_NAME: &str = "Country Info";

pub const ENV_API_URL: &str = "COUNTRY_INFO_API_URL";
pub const ENV_BIND: &str = "COUNTRY_INFO_BIND";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillConfig {
    /// Root of the REST country service; `/rest/v2/name/{term}` is appended.
    pub api_base_url: String,
    /// Listen address for `serve`.
    pub bind: String,
    /// Spoken skill name used in help prompts.
    pub invocation_name: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            bind: DEFAULT_BIND.to_string(),
            invocation_name: DEFAULT_INVOCATION_NAME.to_string(),
        }
    }
}

impl SkillConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(bind) = var(ENV_BIND).filter(|v| !v.trim().is_empty()) {
            self.bind = bind;
        }
    }
}
