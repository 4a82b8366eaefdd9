use async_trait::async_trait;

use super::errors::AuthError;
use super::model::{LoginCredentials, LoginSession, RegisterCredentials, User};

/// Port to the authentication endpoints of the inventory API.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a session. Implementations persist the token
    /// to the token store before returning.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, AuthError>;
    /// Creates an account without logging it in.
    async fn register(&self, credentials: &RegisterCredentials) -> Result<User, AuthError>;
    /// Resolves the identity bound to the stored token.
    async fn current_user(&self) -> Result<User, AuthError>;
    /// Forgets the stored token. No network call.
    async fn logout(&self) -> Result<(), AuthError>;
}
