use async_trait::async_trait;

use crate::domain::auth::model::User;
use crate::domain::errors::ClientError;
use crate::domain::shared::value_objects::UserId;

use super::model::UserPatch;

/// Port to the user administration endpoints.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ClientError>;
    async fn get(&self, id: &UserId) -> Result<User, ClientError>;
    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ClientError>;
    async fn delete(&self, id: &UserId) -> Result<(), ClientError>;
}
