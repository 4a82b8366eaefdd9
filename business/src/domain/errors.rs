/// Errors raised while talking to the inventory API.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("api.network_error")]
    Network(String),
    #[error("api.non_json_response")]
    NonJsonResponse,
    #[error("api.request_failed")]
    Api { status: u16, message: String },
    #[error("api.unexpected_shape")]
    UnexpectedShape(String),
    #[error("api.storage")]
    Storage(#[from] StorageError),
    #[error("api.unknown_error")]
    Unknown,
}

/// Message shown when the server rejects a request without saying why.
pub const DEFAULT_REQUEST_FAILURE: &str = "The request failed";

impl ClientError {
    pub fn network(detail: impl Into<String>) -> Self {
        ClientError::Network(detail.into())
    }
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
        }
    }
    pub fn unexpected_shape(detail: impl Into<String>) -> Self {
        ClientError::UnexpectedShape(detail.into())
    }

    /// Human readable text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ClientError::NonJsonResponse => {
                "The server returned a response in an invalid format. Please try again."
                    .to_string()
            }
            ClientError::Api { message, .. } => message.clone(),
            ClientError::UnexpectedShape(_) => {
                "The server response did not contain the expected data.".to_string()
            }
            ClientError::Storage(e) => e.user_message().to_string(),
            ClientError::Unknown => "An unknown error occurred.".to_string(),
        }
    }
}

/// Errors raised by the durable token store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failed")]
    Read,
    #[error("storage.write_failed")]
    Write,
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::Read => "Could not read the stored session.",
            StorageError::Write => "Could not save the session.",
        }
    }
}
