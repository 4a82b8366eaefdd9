use std::sync::Arc;

use async_trait::async_trait;
use serde::de::IgnoredAny;

use business::domain::auth::model::User;
use business::domain::errors::ClientError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::gateway::UserGateway;
use business::domain::user::model::UserPatch;

use crate::client::{ApiClient, item_endpoint};
use crate::dto::{UserDto, UserPatchBody};
use crate::payload::Envelope;

pub struct UserServiceHttp {
    client: Arc<ApiClient>,
}

impl UserServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn missing_user() -> ClientError {
    ClientError::unexpected_shape("response carried no user")
}

#[async_trait]
impl UserGateway for UserServiceHttp {
    async fn list(&self) -> Result<Vec<User>, ClientError> {
        let envelope: Envelope<Vec<UserDto>> = self.client.get("/users").await?;
        Ok(envelope
            .into_data()
            .unwrap_or_default()
            .into_iter()
            .map(UserDto::into_domain)
            .collect())
    }

    async fn get(&self, id: &UserId) -> Result<User, ClientError> {
        let envelope: Envelope<UserDto> = self
            .client
            .get(&item_endpoint("users", id.as_str()))
            .await?;
        envelope
            .into_data()
            .map(UserDto::into_domain)
            .ok_or_else(missing_user)
    }

    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ClientError> {
        let envelope: Envelope<UserDto> = self
            .client
            .patch(&item_endpoint("users", id.as_str()), &UserPatchBody::from(patch))
            .await?;
        envelope
            .into_data()
            .map(UserDto::into_domain)
            .ok_or_else(missing_user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), ClientError> {
        let _: IgnoredAny = self
            .client
            .delete(&item_endpoint("users", id.as_str()))
            .await?;
        Ok(())
    }
}
