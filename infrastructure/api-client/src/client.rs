use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use business::domain::auth::token_store::TokenStore;
use business::domain::errors::{ClientError, DEFAULT_REQUEST_FAILURE};

/// Endpoint path for one record of a collection, e.g. `/products/{id}`.
/// The id is percent-encoded so it can never leave its path segment; dot
/// segments are encoded as well since URL normalization would resolve them.
pub fn item_endpoint(collection: &str, id: &str) -> String {
    let segment = match id {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => urlencoding::encode(id).into_owned(),
    };
    format!("/{}/{}", collection, segment)
}

/// Shared HTTP client for the inventory REST API.
///
/// Every call goes through [`ApiClient::request`], which attaches the stored
/// bearer token and turns transport and server failures into [`ClientError`].
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token_store: Arc<dyn TokenStore>) -> Self {
        let client = Client::builder().build().unwrap_or_default();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            token_store,
        }
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    /// Returns the absolute URL for an endpoint path such as `/products`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        self.request(Method::GET, endpoint, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_value(body).map_err(|_| ClientError::Unknown)?;
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_value(body).map_err(|_| ClientError::Unknown)?;
        self.request(Method::PATCH, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        self.request(Method::DELETE, endpoint, None).await
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(%method, %url, "Sending API request");

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.stored_token().await {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "API request could not be sent");
            ClientError::network(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(Value::Null)
                .map_err(|e| ClientError::unexpected_shape(e.to_string()));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::network(e.to_string()))?;

        if !is_json {
            tracing::error!(%method, %url, status = status.as_u16(), body = %text, "API answered with a non-JSON body");
            return Err(ClientError::NonJsonResponse);
        }

        let payload: Value = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(%method, %url, error = %e, "API answered with malformed JSON");
            ClientError::NonJsonResponse
        })?;

        if !status.is_success() {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_REQUEST_FAILURE);
            tracing::warn!(%method, %url, status = status.as_u16(), reason = message, "API request failed");
            return Err(ClientError::api(status.as_u16(), message));
        }

        serde_json::from_value(payload).map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "API response did not match the expected shape");
            ClientError::unexpected_shape(e.to_string())
        })
    }

    /// A token that cannot be read is treated as absent.
    async fn stored_token(&self) -> Option<String> {
        match self.token_store.load().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Stored token could not be read");
                None
            }
        }
    }
}
