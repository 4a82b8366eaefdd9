use crate::domain::auth::model::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing has been read from the token store yet.
    Uninitialized,
    /// A stored token is being exchanged for the current user.
    Resolving,
    Authenticated,
    Anonymous,
}

/// Snapshot of the session held by [`super::manager::SessionManager`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub status: SessionStatus,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            status: SessionStatus::Authenticated,
            is_loading: false,
            error: None,
        }
    }

    pub fn anonymous(error: Option<String>) -> Self {
        Self {
            user: None,
            token: None,
            status: SessionStatus::Anonymous,
            is_loading: false,
            error,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated && self.user.is_some() && self.token.is_some()
    }
}

impl Default for SessionState {
    /// Loading until the token store has been checked, so front-ends can
    /// hold off redirecting to the login page.
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            status: SessionStatus::Uninitialized,
            is_loading: true,
            error: None,
        }
    }
}
