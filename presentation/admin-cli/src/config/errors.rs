#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_api_url: {0}")]
    InvalidApiUrl(String),
    #[error("config.invalid_page_size: {0}")]
    InvalidPageSize(String),
}
