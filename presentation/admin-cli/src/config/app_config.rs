use std::env;
use std::path::PathBuf;

use super::api_config::ApiConfig;
use super::errors::ConfigError;

pub const DEFAULT_TOKEN_DIR: &str = ".inventory-admin";
pub const DEFAULT_PAGE_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub token_dir: PathBuf,
    pub page_size: u32,
    /// Keep the token in memory only; nothing is written to disk.
    pub ephemeral: bool,
}

/// Values given on the command line. They win over the environment.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub token_dir: Option<PathBuf>,
    pub ephemeral: bool,
}

impl AppConfig {
    /// Environment variables:
    /// - INVENTORY_API_URL: see [`ApiConfig::from_env`]
    /// - INVENTORY_TOKEN_DIR: directory holding `token.json` (default: ".inventory-admin")
    /// - INVENTORY_PAGE_SIZE: products per dashboard page (default: 5)
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let api = match overrides.api_url.as_deref() {
            Some(url) => ApiConfig::parse(Some(url))?,
            None => ApiConfig::from_env()?,
        };
        let token_dir = overrides.token_dir.unwrap_or_else(|| {
            env::var("INVENTORY_TOKEN_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_DIR))
        });
        let page_size = parse_page_size(env::var("INVENTORY_PAGE_SIZE").ok().as_deref())?;

        Ok(Self {
            api,
            token_dir,
            page_size,
            ephemeral: overrides.ephemeral,
        })
    }
}

fn parse_page_size(raw: Option<&str>) -> Result<u32, ConfigError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ConfigError::InvalidPageSize(value.to_string())),
    }
}
