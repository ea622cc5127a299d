use std::path::PathBuf;
use std::time::Duration;

use pokedex_client::POKEAPI_URL;
use thiserror::Error;

pub const API_URL_VAR: &str = "POKEDEX_API_URL";
pub const DATA_DIR_VAR: &str = "POKEDEX_DATA_DIR";
pub const TIMEOUT_VAR: &str = "POKEDEX_HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub timeout: Duration,
}

impl Config {
    /// Read the environment, after loading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = match lookup(API_URL_VAR) {
            Some(url) => {
                validate_url(&url).map_err(|reason| ConfigError::InvalidEnvValue {
                    var: API_URL_VAR.to_string(),
                    reason,
                })?;
                url
            }
            None => POKEAPI_URL.to_string(),
        };

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: TIMEOUT_VAR.to_string(),
                        reason: format!("expected a positive number of seconds, got {:?}", raw),
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            data_dir,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = api_url {
            validate_url(&url).map_err(|reason| ConfigError::InvalidEnvValue {
                var: "--api-url".to_string(),
                reason,
            })?;
            self.api_url = url;
        }
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        Ok(self)
    }
}

fn validate_url(url: &str) -> Result<(), String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("expected an http(s) URL, got {:?}", url))
    }
}
