use anyhow::bail;
use clap::{Args, Subcommand};

use business::domain::errors::DEFAULT_REQUEST_FAILURE;
use business::domain::product::model::{ProductDraft, ProductPatch};
use business::domain::product::value_objects::{CATEGORIES, ProductQuery, SortOrder};
use business::domain::shared::value_objects::ProductId;

use crate::console::render;
use crate::setup::dependency_injection::DependencyContainer;

use super::auth::require_session;

fn categories_help() -> String {
    format!("Suggested categories: {}", CATEGORIES.join(", "))
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List one page of products
    List(ListArgs),
    /// Show a single product
    Show { id: String },
    /// Create a product
    #[command(after_help = categories_help())]
    Create(CreateArgs),
    /// Change selected fields of a product
    #[command(after_help = categories_help())]
    Update(UpdateArgs),
    /// Delete a product
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Products per page (default: INVENTORY_PAGE_SIZE)
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Field to sort by, e.g. `price` or `createdAt`
    #[arg(long)]
    sort_by: Option<String>,
    /// `asc` or `desc`
    #[arg(long, requires = "sort_by")]
    sort_order: Option<SortOrder>,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    price: f64,
    #[arg(long, default_value_t = 0)]
    stock: u32,
    #[arg(long, default_value = "")]
    category: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    stock: Option<u32>,
    #[arg(long)]
    category: Option<String>,
}

impl ListArgs {
    fn into_query(self, default_limit: u32) -> ProductQuery {
        let mut query = ProductQuery::page(self.page, self.limit.unwrap_or(default_limit));
        query.search = self.search;
        query.category = self.category;
        query.sort_by = self.sort_by;
        query.sort_order = self.sort_order;
        query
    }
}

impl From<CreateArgs> for ProductDraft {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            price: args.price,
            stock: args.stock,
            category: args.category,
        }
    }
}

impl From<UpdateArgs> for ProductPatch {
    fn from(args: UpdateArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            price: args.price,
            stock: args.stock,
            category: args.category,
        }
    }
}

impl ProductCommand {
    pub async fn run(self, container: &DependencyContainer) -> anyhow::Result<()> {
        require_session(container).await?;
        let products = &container.products;

        match self {
            ProductCommand::List(args) => {
                if !products
                    .fetch_products(args.into_query(container.page_size))
                    .await
                {
                    bail!(last_error(container));
                }
                render::product_page(&products.snapshot());
            }
            ProductCommand::Show { id } => {
                let Some(product) = products.fetch_product_by_id(&ProductId::new(id)).await else {
                    bail!(last_error(container));
                };
                render::product(&product);
            }
            ProductCommand::Create(args) => {
                let draft = ProductDraft::from(args);
                if let Err(errors) = draft.validate() {
                    render::validation_errors(&errors);
                    bail!("Invalid product details");
                }
                let Some(product) = products.create_product(draft).await else {
                    bail!(last_error(container));
                };
                println!("Created product {}", product.id);
                render::product(&product);
            }
            ProductCommand::Update(args) => {
                let id = ProductId::new(args.id.clone());
                let patch = ProductPatch::from(args);
                if patch.is_empty() {
                    bail!("Nothing to update. Pass at least one field to change.");
                }
                if let Err(errors) = patch.validate() {
                    render::validation_errors(&errors);
                    bail!("Invalid product details");
                }
                let Some(product) = products.update_product(&id, patch).await else {
                    bail!(last_error(container));
                };
                println!("Updated product {}", product.id);
                render::product(&product);
            }
            ProductCommand::Delete { id, yes } => {
                if !yes {
                    bail!("Deleting {} cannot be undone. Pass --yes to confirm.", id);
                }
                let id = ProductId::new(id);
                if !products.delete_product(&id).await {
                    bail!(last_error(container));
                }
                println!("Deleted product {}", id);
            }
        }
        Ok(())
    }
}

/// Error recorded by the last product operation, with a fallback so a
/// failure never exits silently.
pub(super) fn last_error(container: &DependencyContainer) -> String {
    failure_message(container.products.snapshot().error)
}

pub(super) fn failure_message(error: Option<String>) -> String {
    error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REQUEST_FAILURE.to_string())
}
