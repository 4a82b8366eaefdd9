use crate::domain::errors::ClientError;
use crate::domain::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.validation_failed")]
    Validation(ValidationErrors),
    #[error("auth.incomplete_response")]
    IncompleteResponse,
    #[error("auth.auto_login_failed")]
    AutoLoginFailed,
    #[error("auth.operation_in_progress")]
    OperationInProgress,
    #[error("api.request_failed")]
    Client(#[from] ClientError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation(errors) => errors.user_message(),
            AuthError::IncompleteResponse => {
                "The server response did not contain the expected user or token.".to_string()
            }
            AuthError::AutoLoginFailed => {
                "Registered, but could not log in automatically".to_string()
            }
            AuthError::OperationInProgress => {
                "Another sign-in request is still in progress".to_string()
            }
            AuthError::Client(e) => e.user_message(),
        }
    }
}
