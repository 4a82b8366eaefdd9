use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::errors::ProductError;
use super::model::{Product, ProductDraft, ProductPage, ProductPatch};
use super::value_objects::ProductQuery;

/// Port to the product endpoints. Implementations normalize every response
/// into the canonical domain shape before returning.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self, query: &ProductQuery) -> Result<ProductPage, ProductError>;
    async fn get(&self, id: &ProductId) -> Result<Product, ProductError>;
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductError>;
    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, ProductError>;
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
