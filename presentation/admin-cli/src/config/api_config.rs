use std::env;

use url::Url;

use super::errors::ConfigError;

pub const DEFAULT_API_URL: &str = "https://in-meta-back.vercel.app";

/// Location of the inventory REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - INVENTORY_API_URL: API base URL (default: "https://in-meta-back.vercel.app")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(env::var("INVENTORY_API_URL").ok().as_deref())
    }

    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        let base_url =
            Url::parse(raw).map_err(|e| ConfigError::InvalidApiUrl(format!("{}: {}", raw, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl(raw.to_string()));
        }

        Ok(Self { base_url })
    }

    /// Base URL without a trailing slash, ready for endpoint paths.
    pub fn base_url(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}
