use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fieldlens_review::ReviewOptions;

/// Per-1000-token price overrides for the cost estimate display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pricing {
    pub input_per_1k: Option<f64>,
    pub output_per_1k: Option<f64>,
}

/// Main configuration for fieldlens.
///
/// Loaded from `~/.fieldlens/config.toml` (or `--config`). The service
/// endpoint, key and prices can also come from the environment —
/// `FIELDLENS_ENDPOINT`, `FIELDLENS_API_KEY`,
/// `FIELDLENS_PRICE_PER_1K_INPUT`, `FIELDLENS_PRICE_PER_1K_OUTPUT` —
/// which takes precedence over the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extraction-service endpoint. The offline CLI only displays it; live
    /// submission belongs to the service client, not this tool.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Extraction-service API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Classifier label -> analyzer id mapping used by `classify --route`.
    #[serde(default)]
    pub analyzers: BTreeMap<String, String>,

    #[serde(default)]
    pub pricing: Pricing,
}

impl Config {
    /// Load config from an explicit path or the default location, then
    /// apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = Self::load_from(&path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load config from a specific path; a missing file is the default
    /// config, not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config file path (~/.fieldlens/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        Ok(PathBuf::from(home).join(".fieldlens").join("config.toml"))
    }

    pub fn review_options(&self) -> ReviewOptions {
        ReviewOptions {
            price_per_1k_input: self.pricing.input_per_1k,
            price_per_1k_output: self.pricing.output_per_1k,
        }
    }

    fn apply_env(&mut self) {
        if let Some(endpoint) = env_string("FIELDLENS_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Some(api_key) = env_string("FIELDLENS_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(price) = env_price("FIELDLENS_PRICE_PER_1K_INPUT") {
            self.pricing.input_per_1k = Some(price);
        }
        if let Some(price) = env_price("FIELDLENS_PRICE_PER_1K_OUTPUT") {
            self.pricing.output_per_1k = Some(price);
        }
    }
}

fn env_string(var: &str) -> Option<String> {
    let value = std::env::var(var).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn env_price(var: &str) -> Option<f64> {
    std::env::var(var).ok()?.trim().parse().ok()
}
