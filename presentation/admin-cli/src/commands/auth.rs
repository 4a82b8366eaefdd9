use anyhow::bail;
use clap::Args;

use business::domain::auth::model::{LoginCredentials, RegisterCredentials, User};

use crate::console::render;
use crate::setup::dependency_injection::DependencyContainer;

use super::products::failure_message;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    /// At least 6 characters
    #[arg(long)]
    password: String,
}

impl LoginArgs {
    pub async fn run(self, container: &DependencyContainer) -> anyhow::Result<()> {
        let credentials = LoginCredentials::new(self.email, self.password);
        if let Err(errors) = credentials.validate() {
            render::validation_errors(&errors);
            bail!("Invalid login details");
        }

        if !container.session.login(credentials).await {
            bail!(session_error(container));
        }
        if let Some(user) = container.session.snapshot().user {
            print!("Logged in as ");
            render::user(&user);
        }
        Ok(())
    }
}

impl RegisterArgs {
    pub async fn run(self, container: &DependencyContainer) -> anyhow::Result<()> {
        let credentials = RegisterCredentials::new(self.name, self.email, self.password);
        if let Err(errors) = credentials.validate() {
            render::validation_errors(&errors);
            bail!("Invalid registration details");
        }

        if !container.session.register(credentials).await {
            bail!(session_error(container));
        }
        if let Some(user) = container.session.snapshot().user {
            print!("Registered and logged in as ");
            render::user(&user);
        }
        Ok(())
    }
}

pub async fn logout(container: &DependencyContainer) -> anyhow::Result<()> {
    container.session.logout().await;
    Ok(())
}

pub async fn whoami(container: &DependencyContainer) -> anyhow::Result<()> {
    let user = require_session(container).await?;
    render::user(&user);
    Ok(())
}

/// Restores the stored session and fails when nobody is logged in.
pub async fn require_session(container: &DependencyContainer) -> anyhow::Result<User> {
    container.session.initialize().await;

    let state = container.session.snapshot();
    match state.user {
        Some(user) if state.is_authenticated() => Ok(user),
        _ => match state.error {
            Some(error) => bail!("{}. Log in again.", error),
            None => bail!("Not logged in. Run `inventory-admin login` first."),
        },
    }
}

fn session_error(container: &DependencyContainer) -> String {
    failure_message(container.session.snapshot().error)
}
