use anyhow::bail;
use clap::Subcommand;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::UserPatch;

use crate::console::render;
use crate::setup::dependency_injection::DependencyContainer;

use super::auth::require_session;

#[derive(Subcommand)]
pub enum UserCommand {
    /// List registered users
    List,
    /// Show a single user
    Show { id: String },
    /// Change a user's name or email
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

impl UserCommand {
    pub async fn run(self, container: &DependencyContainer) -> anyhow::Result<()> {
        require_session(container).await?;
        let users = &container.users;

        match self {
            UserCommand::List => {
                let listed = users.list().await.map_err(|e| anyhow::anyhow!(e.user_message()))?;
                render::users(&listed);
            }
            UserCommand::Show { id } => {
                let user = users
                    .get(&UserId::new(id))
                    .await
                    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
                render::user(&user);
            }
            UserCommand::Update { id, name, email } => {
                let patch = UserPatch { name, email };
                if patch.is_empty() {
                    bail!("Nothing to update. Pass --name or --email.");
                }
                let user = users
                    .update(&UserId::new(id), &patch)
                    .await
                    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
                print!("Updated ");
                render::user(&user);
            }
            UserCommand::Delete { id, yes } => {
                if !yes {
                    bail!("Deleting user {} cannot be undone. Pass --yes to confirm.", id);
                }
                users
                    .delete(&UserId::new(id.clone()))
                    .await
                    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
                println!("Deleted user {}", id);
            }
        }
        Ok(())
    }
}
