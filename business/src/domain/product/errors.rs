use crate::domain::errors::ClientError;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation_failed")]
    Validation(ValidationErrors),
    #[error("product.not_found")]
    NotFound,
    #[error("product.missing_record")]
    MissingRecord,
    #[error("product.missing_products")]
    MissingProducts,
    #[error("product.operation_in_progress")]
    OperationInProgress(ProductId),
    #[error("api.request_failed")]
    Client(#[from] ClientError),
}

impl ProductError {
    pub fn user_message(&self) -> String {
        match self {
            ProductError::Validation(errors) => errors.user_message(),
            ProductError::NotFound => "Product not found".to_string(),
            ProductError::MissingRecord => {
                "The server response did not contain the product".to_string()
            }
            ProductError::MissingProducts => "No products found in the response".to_string(),
            ProductError::OperationInProgress(id) => {
                format!("Another change to product {} is still in progress", id)
            }
            ProductError::Client(e) => e.user_message(),
        }
    }
}
