use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Durable storage for the single bearer token that survives restarts.
///
/// The token is read at call time without locking; concurrent writers race
/// and the last one wins.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, StorageError>;
    async fn save(&self, token: &str) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
