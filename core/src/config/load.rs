use std::path::Path;

use crate::error::ConfigError;

use super::types::AppConfig;

pub const CONFIG_ENV: &str = "REELBOT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "reelbot.toml";

/// Loads `reelbot.toml` (or `$REELBOT_CONFIG`) when present, then applies env overrides.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = std::env::var(CONFIG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());
    load_from(path.as_deref())
}

/// An explicit path must exist; the default path is optional.
pub fn load_from(path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut cfg = read_file(path)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

fn read_file(path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let explicit = path.is_some();
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    if !explicit && !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }

    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

pub(crate) fn apply_env_overrides<F>(cfg: &mut AppConfig, get: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| get(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = lookup("REELBOT_CATALOG_PATH") {
        cfg.catalog.path = v;
    }
    if let Some(v) = lookup("REELBOT_API_BASE_URL") {
        cfg.telegram.api_base_url = v;
    }
    if let Some(v) = lookup("REELBOT_POLL_INTERVAL_MS") {
        cfg.polling.interval_ms = v.trim().parse::<u64>().map_err(|e| ConfigError::EnvInvalid {
            key: "REELBOT_POLL_INTERVAL_MS".to_string(),
            source: anyhow::Error::new(e),
        })?;
    }

    Ok(())
}
