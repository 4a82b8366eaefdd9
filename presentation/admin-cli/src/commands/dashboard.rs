use anyhow::bail;
use clap::Args;

use business::domain::product::metrics::DashboardMetrics;
use business::domain::product::value_objects::ProductQuery;

use crate::console::render;
use crate::setup::dependency_injection::DependencyContainer;

use super::auth::require_session;
use super::products::last_error;

#[derive(Args)]
pub struct DashboardArgs {
    /// Page to show once the first page is loaded
    #[arg(long, default_value_t = 1)]
    page: u32,
}

impl DashboardArgs {
    pub async fn run(self, container: &DependencyContainer) -> anyhow::Result<()> {
        let user = require_session(container).await?;
        let products = &container.products;

        if !products
            .fetch_products(ProductQuery::page(1, container.page_size))
            .await
        {
            bail!(last_error(container));
        }
        if self.page != 1 && !products.change_page(self.page).await {
            match products.snapshot().error {
                Some(error) => bail!(error),
                None => bail!(
                    "Page {} does not exist (1..={})",
                    self.page,
                    products.snapshot().total_pages
                ),
            }
        }

        let state = products.snapshot();
        println!("Welcome back, {}", user.name);
        println!();
        render::metrics(&DashboardMetrics::from_products(&state.products));
        println!();
        render::product_page(&state);
        Ok(())
    }
}
