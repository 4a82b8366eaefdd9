use std::sync::Arc;

use api_client::{ApiClient, AuthServiceHttp, ProductServiceHttp, UserServiceHttp};
use business::application::product::manager::ProductCollectionManager;
use business::application::session::manager::SessionManager;
use business::application::user::directory::UserDirectory;
use business::domain::auth::token_store::TokenStore;
use logger::TracingLogger;
use storage::{FileTokenStore, InMemoryTokenStore, TokenStoreConfig};

use crate::config::app_config::AppConfig;
use crate::console::navigator::ConsoleNavigator;

pub struct DependencyContainer {
    pub session: Arc<SessionManager>,
    pub products: Arc<ProductCollectionManager>,
    pub users: UserDirectory,
    pub page_size: u32,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let token_store: Arc<dyn TokenStore> = if config.ephemeral {
            Arc::new(InMemoryTokenStore::new())
        } else {
            let store = FileTokenStore::new(&TokenStoreConfig::new(config.token_dir.clone()));
            tracing::debug!(path = %store.path().display(), "Using file token store");
            Arc::new(store)
        };
        let client = Arc::new(ApiClient::new(config.api.base_url(), token_store.clone()));

        let auth_service = Arc::new(AuthServiceHttp::new(client.clone()));
        let product_service = Arc::new(ProductServiceHttp::new(client.clone()));
        let user_service = Arc::new(UserServiceHttp::new(client));

        // State managers
        let session = Arc::new(SessionManager::new(
            auth_service,
            token_store,
            Arc::new(ConsoleNavigator),
            logger.clone(),
        ));
        let products = Arc::new(ProductCollectionManager::new(
            product_service,
            logger.clone(),
        ));
        let users = UserDirectory {
            gateway: user_service,
            logger,
        };

        Self {
            session,
            products,
            users,
            page_size: config.page_size,
        }
    }
}
