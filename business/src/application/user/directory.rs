use std::sync::Arc;

use crate::domain::auth::model::User;
use crate::domain::errors::ClientError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::gateway::UserGateway;
use crate::domain::user::model::UserPatch;

/// Staff user administration. Unlike the state managers this keeps no state
/// and hands errors back to the caller.
pub struct UserDirectory {
    pub gateway: Arc<dyn UserGateway>,
    pub logger: Arc<dyn Logger>,
}

impl UserDirectory {
    pub async fn list(&self) -> Result<Vec<User>, ClientError> {
        self.logger.info("Fetching all users");
        let users = self.gateway.list().await?;
        self.logger.info(&format!("Found {} users", users.len()));
        Ok(users)
    }

    pub async fn get(&self, id: &UserId) -> Result<User, ClientError> {
        self.logger.info(&format!("Fetching user: {}", id));
        self.gateway.get(id).await
    }

    pub async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ClientError> {
        if patch.is_empty() {
            self.logger
                .debug(&format!("Empty patch for user {}, fetching instead", id));
            return self.gateway.get(id).await;
        }
        self.logger.info(&format!("Updating user: {}", id));
        let user = self.gateway.update(id, patch).await?;
        self.logger.info(&format!("User updated: {}", user.id));
        Ok(user)
    }

    pub async fn delete(&self, id: &UserId) -> Result<(), ClientError> {
        self.logger.info(&format!("Deleting user: {}", id));
        self.gateway.delete(id).await?;
        self.logger.info(&format!("User deleted: {}", id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub UserApi {}

        #[async_trait]
        impl UserGateway for UserApi {
            async fn list(&self) -> Result<Vec<User>, ClientError>;
            async fn get(&self, id: &UserId) -> Result<User, ClientError>;
            async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ClientError>;
            async fn delete(&self, id: &UserId) -> Result<(), ClientError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{}@example.com", id),
        }
    }

    #[tokio::test]
    async fn should_list_users() {
        let mut gateway = MockUserApi::new();
        gateway
            .expect_list()
            .returning(|| Ok(vec![user("ana", "Ana"), user("bruno", "Bruno")]));
        let directory = UserDirectory {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let users = directory.list().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Bruno");
    }

    #[tokio::test]
    async fn should_skip_update_call_when_patch_is_empty() {
        let mut gateway = MockUserApi::new();
        gateway.expect_update().never();
        gateway.expect_get().returning(|id| Ok(user(id.as_str(), "Ana")));
        let directory = UserDirectory {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = directory
            .update(&UserId::new("ana"), &UserPatch::default())
            .await;

        assert_eq!(result.map(|u| u.name), Ok("Ana".to_string()));
    }

    #[tokio::test]
    async fn should_propagate_api_error_on_delete() {
        let mut gateway = MockUserApi::new();
        gateway
            .expect_delete()
            .returning(|_| Err(ClientError::api(404, "User not found")));
        let directory = UserDirectory {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = directory.delete(&UserId::new("ghost")).await;

        assert_eq!(result, Err(ClientError::api(404, "User not found")));
    }
}
