use std::sync::{Arc, PoisonError, RwLock};

use crate::application::locks::OperationLocks;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::model::{LoginCredentials, RegisterCredentials};
use crate::domain::auth::navigator::Navigator;
use crate::domain::auth::token_store::TokenStore;
use crate::domain::logger::Logger;

use super::state::{SessionState, SessionStatus};

const SESSION_SCOPE: &str = "session";

/// Owns the authenticated identity of the running front-end.
///
/// Every public operation captures its failures into [`SessionState::error`]
/// and reports success as a `bool`; nothing is returned as an `Err`.
/// The state lock is never held across an `.await`.
pub struct SessionManager {
    gateway: Arc<dyn AuthGateway>,
    token_store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    logger: Arc<dyn Logger>,
    state: RwLock<SessionState>,
    locks: OperationLocks<&'static str>,
}

impl SessionManager {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        token_store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            gateway,
            token_store,
            navigator,
            logger,
            state: RwLock::new(SessionState::default()),
            locks: OperationLocks::new(),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Pure read of the current state. Never touches the network.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Restores the session from the token store, if a token was saved.
    ///
    /// The user is always re-derived from the token. A token the server
    /// rejects is purged.
    pub async fn initialize(&self) {
        let stored = match self.token_store.load().await {
            Ok(token) => token,
            Err(e) => {
                self.logger
                    .warn(&format!("Could not read stored token: {}", e));
                None
            }
        };

        let Some(token) = stored else {
            self.logger.debug("No stored token, session is anonymous");
            self.update(|s| *s = SessionState::anonymous(None));
            return;
        };

        let resolving_token = token.clone();
        self.update(move |s| {
            s.status = SessionStatus::Resolving;
            s.token = Some(resolving_token);
            s.is_loading = true;
            s.error = None;
        });

        match self.gateway.current_user().await {
            Ok(user) => {
                self.logger
                    .info(&format!("Session restored for user: {}", user.id));
                self.update(move |s| *s = SessionState::authenticated(user, token));
            }
            Err(e) => {
                self.logger
                    .error(&format!("Could not restore session: {}", e));
                if let Err(clear_error) = self.token_store.clear().await {
                    self.logger
                        .warn(&format!("Could not purge stored token: {}", clear_error));
                }
                let message = e.user_message();
                self.update(move |s| *s = SessionState::anonymous(Some(message)));
            }
        }
    }

    pub async fn login(&self, credentials: LoginCredentials) -> bool {
        if let Err(errors) = credentials.validate() {
            self.reject(&AuthError::Validation(errors));
            return false;
        }
        let Some(_guard) = self.locks.try_acquire(SESSION_SCOPE) else {
            self.reject(&AuthError::OperationInProgress);
            return false;
        };

        self.begin();
        self.logger
            .info(&format!("Logging in: {}", credentials.email));

        match self.authenticate(&credentials).await {
            Ok(()) => true,
            Err(e) => {
                self.fail("Login failed", &e).await;
                false
            }
        }
    }

    /// Creates the account and then logs in with the same email and password.
    ///
    /// Succeeds only when both steps succeed. A failed automatic login is
    /// reported as [`AuthError::AutoLoginFailed`], distinct from a failed
    /// registration.
    pub async fn register(&self, credentials: RegisterCredentials) -> bool {
        if let Err(errors) = credentials.validate() {
            self.reject(&AuthError::Validation(errors));
            return false;
        }
        let Some(_guard) = self.locks.try_acquire(SESSION_SCOPE) else {
            self.reject(&AuthError::OperationInProgress);
            return false;
        };

        self.begin();
        self.logger
            .info(&format!("Registering account: {}", credentials.email));

        if let Err(e) = self.gateway.register(&credentials).await {
            self.fail("Registration failed", &e).await;
            return false;
        }

        match self.authenticate(&credentials.to_login()).await {
            Ok(()) => true,
            Err(e) => {
                self.logger.warn(&format!(
                    "Registered {} but automatic login failed: {}",
                    credentials.email, e
                ));
                self.fail("Automatic login failed", &AuthError::AutoLoginFailed)
                    .await;
                false
            }
        }
    }

    pub async fn logout(&self) {
        if let Err(e) = self.gateway.logout().await {
            self.logger
                .warn(&format!("Could not clear stored token: {}", e));
        }
        self.update(|s| *s = SessionState::anonymous(None));
        self.logger.info("Logged out");
        self.navigator.to_login();
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        let session = self.gateway.login(credentials).await?;
        self.logger
            .info(&format!("Logged in as user: {}", session.user.id));
        self.update(move |s| *s = SessionState::authenticated(session.user, session.token));
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
    }

    fn begin(&self) {
        self.update(|s| {
            s.is_loading = true;
            s.error = None;
        });
    }

    /// Drops back to anonymous. Any token saved by an earlier session is
    /// purged too, so the store never outlives the in-memory identity.
    async fn fail(&self, context: &str, error: &AuthError) {
        self.logger.error(&format!("{}: {}", context, error));
        if let Err(clear_error) = self.token_store.clear().await {
            self.logger
                .warn(&format!("Could not purge stored token: {}", clear_error));
        }
        let message = error.user_message();
        self.update(move |s| *s = SessionState::anonymous(Some(message)));
    }

    /// Records an error without touching the rest of the state. Used when the
    /// request never started.
    fn reject(&self, error: &AuthError) {
        self.logger
            .warn(&format!("Auth request rejected: {}", error));
        let message = error.user_message();
        self.update(move |s| s.error = Some(message));
    }
}
