use crate::enums::Version;
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// Configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub current_version: u32,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config::from_lookup(|key| std::env::var(key).ok())
}

impl Config {
    /// Build from a variable lookup. A data directory takes precedence over
    /// the base URL; one of the two is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MAIMAI_BASE_URL").filter(|v| !v.is_empty());
        let token = lookup("MAIMAI_TOKEN").filter(|v| !v.is_empty());
        let data_dir = lookup("MAIMAI_DATA_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if base_url.is_none() && data_dir.is_none() {
            return Err(anyhow!("Either MAIMAI_BASE_URL or MAIMAI_DATA_DIR must be set"));
        }

        let current_version = match lookup("MAIMAI_CURRENT_VERSION") {
            Some(raw) => {
                let ordinal: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("MAIMAI_CURRENT_VERSION '{}' is not a number: {}", raw, e))?;
                Version::from_ordinal(ordinal)
                    .ok_or_else(|| anyhow!("MAIMAI_CURRENT_VERSION {} is not a known version", ordinal))?
                    .ordinal()
            }
            None => Version::latest().ordinal(),
        };

        Ok(Config {
            base_url,
            token,
            data_dir,
            current_version,
        })
    }
}
