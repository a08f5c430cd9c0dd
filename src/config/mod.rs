mod schema;

pub use schema::{CardSearchConfig, Config, DEFAULT_API_BASE, DEFAULT_DATA_DIR};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::scoring::validate_score_table;

const MAX_RETRIES: usize = 10;

/// Get the config directory path (~/.config/blight-kit/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("blight-kit"))
}

/// Get the default config file path (~/.config/blight-kit/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Check config values that parse but make no sense.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref timeout) = config.request_timeout {
        if let Err(e) = humantime::parse_duration(timeout) {
            errors.push(format!("request_timeout: invalid '{}' - {}", timeout, e));
        }
    }

    if let Some(retries) = config.retries {
        if retries > MAX_RETRIES {
            errors.push(format!("retries: must be at most {}, got {}", MAX_RETRIES, retries));
        }
    }

    if let Some(ref base) = config.api_base {
        if !base.starts_with("http://") && !base.starts_with("https://") {
            errors.push(format!("api_base: '{}' must start with http:// or https://", base));
        }
    }

    if let Some(ref table) = config.scoring {
        if let Err(table_errors) = validate_score_table(table) {
            errors.extend(table_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Request timeout from config, or the default.
pub fn request_timeout(config: &Config) -> Result<Duration> {
    let raw = config
        .request_timeout
        .as_deref()
        .unwrap_or(schema::DEFAULT_REQUEST_TIMEOUT);
    humantime::parse_duration(raw).with_context(|| format!("Invalid request_timeout '{}'", raw))
}
