use std::sync::LazyLock;

use regex::Regex;

use crate::domain::shared::value_objects::UserId;
use crate::domain::validation::ValidationErrors;

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// Identity record resolved from the bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// User and bearer token returned by a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub user: User,
    pub token: String,
}

#[derive(Clone, PartialEq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result()
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, PartialEq)]
pub struct RegisterCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterCredentials {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !is_email_shaped(&self.email) {
            errors.add("email", "Email is invalid");
        }

        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add("password", "Password must be at least 6 characters");
        }

        errors.into_result()
    }

    /// Credentials for the login chained after a successful registration.
    pub fn to_login(&self) -> LoginCredentials {
        LoginCredentials::new(self.email.clone(), self.password.clone())
    }
}

impl std::fmt::Debug for RegisterCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterCredentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_complete_registration() {
        let credentials = RegisterCredentials::new("Ana", "ana@example.com", "secret1");
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn should_reject_registration_when_fields_missing() {
        let errors = RegisterCredentials::new(" ", "", "")
            .validate()
            .unwrap_err();

        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn should_reject_email_without_domain() {
        let errors = RegisterCredentials::new("Ana", "ana@example", "secret1")
            .validate()
            .unwrap_err();

        assert_eq!(errors.get("email"), Some("Email is invalid"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn should_reject_short_password() {
        let errors = RegisterCredentials::new("Ana", "ana@example.com", "12345")
            .validate()
            .unwrap_err();

        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn should_reject_login_without_password() {
        let errors = LoginCredentials::new("ana@example.com", "")
            .validate()
            .unwrap_err();

        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn should_not_leak_password_in_debug_output() {
        let credentials = LoginCredentials::new("ana@example.com", "hunter22");
        let rendered = format!("{:?}", credentials);

        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("ana@example.com"));
    }

    #[test]
    fn should_reuse_email_and_password_for_login_after_register() {
        let credentials = RegisterCredentials::new("Ana", "ana@example.com", "secret1");
        assert_eq!(
            credentials.to_login(),
            LoginCredentials::new("ana@example.com", "secret1")
        );
    }
}
