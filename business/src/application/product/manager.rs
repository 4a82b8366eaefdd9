use std::sync::{Arc, PoisonError, RwLock};

use crate::application::locks::OperationLocks;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{Product, ProductDraft, ProductPatch};
use crate::domain::product::value_objects::ProductQuery;
use crate::domain::shared::value_objects::ProductId;

use super::state::ProductCollectionState;

/// Owns the paginated product list, the selected product and the
/// loading/error flags.
///
/// Each operation sets loading and clears the error, awaits the gateway, then
/// either patches the relevant slice of state or records the error message.
/// A failure never blanks out data loaded earlier. Mutations of the same
/// product id are serialized: a second one fails fast while the first is in
/// flight.
pub struct ProductCollectionManager {
    gateway: Arc<dyn ProductGateway>,
    logger: Arc<dyn Logger>,
    state: RwLock<ProductCollectionState>,
    locks: OperationLocks<ProductId>,
}

impl ProductCollectionManager {
    pub fn new(gateway: Arc<dyn ProductGateway>, logger: Arc<dyn Logger>) -> Self {
        Self {
            gateway,
            logger,
            state: RwLock::new(ProductCollectionState::default()),
            locks: OperationLocks::new(),
        }
    }

    pub fn snapshot(&self) -> ProductCollectionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub async fn fetch_products(&self, query: ProductQuery) -> bool {
        self.begin();
        self.logger.info(&format!(
            "Fetching products: page {} (limit {})",
            query.page, query.limit
        ));

        match self.gateway.list(&query).await {
            Ok(page) => {
                self.logger.info(&format!(
                    "Loaded {} products ({} total, {} pages)",
                    page.products.len(),
                    page.total_items,
                    page.total_pages
                ));
                self.succeed(|s| s.replace_page(page));
                true
            }
            Err(e) => {
                self.fail("Could not fetch products", &e);
                false
            }
        }
    }

    /// Fetches another page with the current page size. Pages outside
    /// `1..=total_pages` are ignored once a page count is known.
    pub async fn change_page(&self, page: u32) -> bool {
        let (limit, total_pages) = {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            (state.items_per_page, state.total_pages)
        };

        if page == 0 || (total_pages > 0 && page > total_pages) {
            self.logger.warn(&format!(
                "Ignoring page {} outside 1..={}",
                page, total_pages
            ));
            return false;
        }

        self.fetch_products(ProductQuery::page(page, limit)).await
    }

    pub async fn fetch_product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.begin();
        self.logger.info(&format!("Fetching product: {}", id));

        match self.gateway.get(id).await {
            Ok(product) => {
                let selected = product.clone();
                self.succeed(move |s| s.current_product = Some(selected));
                Some(product)
            }
            Err(e) => {
                self.fail(&format!("Could not fetch product {}", id), &e);
                None
            }
        }
    }

    /// Prepends the created record to the loaded page. Pagination counters
    /// are left as they were.
    pub async fn create_product(&self, draft: ProductDraft) -> Option<Product> {
        if let Err(errors) = draft.validate() {
            self.reject(&ProductError::Validation(errors));
            return None;
        }

        self.begin();
        self.logger
            .info(&format!("Creating product: {}", draft.name));

        match self.gateway.create(&draft).await {
            Ok(product) => {
                self.logger
                    .info(&format!("Product created with id: {}", product.id));
                let created = product.clone();
                self.succeed(move |s| s.prepend(created));
                Some(product)
            }
            Err(e) => {
                self.fail("Could not create product", &e);
                None
            }
        }
    }

    /// Replaces the record in place and selects it. When the id is not on the
    /// loaded page only the selection changes.
    pub async fn update_product(&self, id: &ProductId, patch: ProductPatch) -> Option<Product> {
        if let Err(errors) = patch.validate() {
            self.reject(&ProductError::Validation(errors));
            return None;
        }
        let Some(_guard) = self.locks.try_acquire(id.clone()) else {
            self.reject(&ProductError::OperationInProgress(id.clone()));
            return None;
        };

        self.begin();
        self.logger.info(&format!("Updating product: {}", id));

        match self.gateway.update(id, &patch).await {
            Ok(product) => {
                self.logger
                    .info(&format!("Product updated: {}", product.id));
                let updated = product.clone();
                self.succeed(move |s| {
                    s.replace(&updated);
                    s.current_product = Some(updated);
                });
                Some(product)
            }
            Err(e) => {
                self.fail(&format!("Could not update product {}", id), &e);
                None
            }
        }
    }

    /// Removes the record from the loaded page. Totals are not adjusted.
    pub async fn delete_product(&self, id: &ProductId) -> bool {
        let Some(_guard) = self.locks.try_acquire(id.clone()) else {
            self.reject(&ProductError::OperationInProgress(id.clone()));
            return false;
        };

        self.begin();
        self.logger.info(&format!("Deleting product: {}", id));

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.logger.info(&format!("Product deleted: {}", id));
                self.succeed(|s| s.remove(id));
                true
            }
            Err(e) => {
                self.fail(&format!("Could not delete product {}", id), &e);
                false
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut ProductCollectionState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
    }

    fn begin(&self) {
        self.update(|s| {
            s.is_loading = true;
            s.error = None;
        });
    }

    fn succeed(&self, apply: impl FnOnce(&mut ProductCollectionState)) {
        self.update(|s| {
            apply(s);
            s.is_loading = false;
            s.error = None;
        });
    }

    fn fail(&self, context: &str, error: &ProductError) {
        self.logger.error(&format!("{}: {}", context, error));
        let message = error.user_message();
        self.update(move |s| {
            s.is_loading = false;
            s.error = Some(message);
        });
    }

    /// Records an error for a request that never started; loading is left to
    /// whichever request is still in flight.
    fn reject(&self, error: &ProductError) {
        self.logger
            .warn(&format!("Product request rejected: {}", error));
        let message = error.user_message();
        self.update(move |s| s.error = Some(message));
    }
}
