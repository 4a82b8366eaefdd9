use std::sync::Arc;

use async_trait::async_trait;

use business::domain::auth::errors::AuthError;
use business::domain::auth::gateway::AuthGateway;
use business::domain::auth::model::{LoginCredentials, LoginSession, RegisterCredentials, User};
use business::domain::errors::ClientError;

use crate::client::ApiClient;
use crate::dto::{LoginBody, LoginDataDto, RegisterBody, UserDto};
use crate::payload::Envelope;

pub struct AuthServiceHttp {
    client: Arc<ApiClient>,
}

impl AuthServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthServiceHttp {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, AuthError> {
        let envelope: Envelope<LoginDataDto> = self
            .client
            .post("/auth/login", &LoginBody::from(credentials))
            .await?;

        let data = envelope.into_data().ok_or(AuthError::IncompleteResponse)?;
        let (Some(user), Some(token)) = (data.user, data.access_token) else {
            return Err(AuthError::IncompleteResponse);
        };
        if token.is_empty() {
            return Err(AuthError::IncompleteResponse);
        }

        self.client
            .token_store()
            .save(&token)
            .await
            .map_err(ClientError::from)?;

        Ok(LoginSession {
            user: user.into_domain(),
            token,
        })
    }

    async fn register(&self, credentials: &RegisterCredentials) -> Result<User, AuthError> {
        let envelope: Envelope<UserDto> = self
            .client
            .post("/auth/register", &RegisterBody::from(credentials))
            .await?;

        envelope
            .into_data()
            .map(UserDto::into_domain)
            .ok_or(AuthError::IncompleteResponse)
    }

    async fn current_user(&self) -> Result<User, AuthError> {
        // Unlike the auth endpoints, /users/me answers with the bare user.
        let user: UserDto = self.client.get("/users/me").await?;
        Ok(user.into_domain())
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.client
            .token_store()
            .clear()
            .await
            .map_err(ClientError::from)?;
        Ok(())
    }
}
