use std::sync::Arc;

use async_trait::async_trait;
use serde::de::IgnoredAny;

use business::domain::errors::ClientError;
use business::domain::product::errors::ProductError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::{Product, ProductDraft, ProductPage, ProductPatch};
use business::domain::product::value_objects::ProductQuery;
use business::domain::shared::value_objects::ProductId;

use crate::client::{ApiClient, item_endpoint};
use crate::dto::{ProductBody, ProductDto, ProductPatchBody, ProductQueryParams, ProductsResponseDto};
use crate::payload::Payload;

pub struct ProductServiceHttp {
    client: Arc<ApiClient>,
}

impl ProductServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn product_endpoint(id: &ProductId) -> String {
        item_endpoint("products", id.as_str())
    }
}

#[async_trait]
impl ProductGateway for ProductServiceHttp {
    async fn list(&self, query: &ProductQuery) -> Result<ProductPage, ProductError> {
        let params = serde_urlencoded::to_string(ProductQueryParams::from(query))
            .map_err(|_| ClientError::Unknown)?;
        let payload: Payload<ProductsResponseDto> =
            self.client.get(&format!("/products?{}", params)).await?;

        payload
            .into_record()
            .map(|response| response.into_page(query))
            .ok_or(ProductError::MissingProducts)
    }

    async fn get(&self, id: &ProductId) -> Result<Product, ProductError> {
        let payload: Payload<ProductDto> = self.client.get(&Self::product_endpoint(id)).await?;

        payload
            .into_record()
            .map(ProductDto::into_domain)
            .ok_or(ProductError::NotFound)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductError> {
        let payload: Payload<ProductDto> = self
            .client
            .post("/products", &ProductBody::from(draft))
            .await?;

        payload
            .into_record()
            .map(ProductDto::into_domain)
            .ok_or(ProductError::MissingRecord)
    }

    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, ProductError> {
        let payload: Payload<ProductDto> = self
            .client
            .patch(&Self::product_endpoint(id), &ProductPatchBody::from(patch))
            .await?;

        payload
            .into_record()
            .map(ProductDto::into_domain)
            .ok_or(ProductError::MissingRecord)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let _: IgnoredAny = self.client.delete(&Self::product_endpoint(id)).await?;
        Ok(())
    }
}
