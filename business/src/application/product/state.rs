use crate::domain::product::model::{Product, ProductPage};
use crate::domain::product::value_objects::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE};
use crate::domain::shared::value_objects::ProductId;

/// A single page-window view over the server's product set.
///
/// `products` holds exactly the last page fetched, possibly patched by local
/// create/update/delete results. It is never merged with other pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCollectionState {
    pub products: Vec<Product>,
    pub current_product: Option<Product>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub items_per_page: u32,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ProductCollectionState {
    /// Replaces the page wholesale and drops the selected product.
    pub(crate) fn replace_page(&mut self, page: ProductPage) {
        self.products = page.products;
        self.current_product = None;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages;
        self.current_page = page.current_page;
        self.items_per_page = page.items_per_page;
    }

    pub(crate) fn prepend(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Swaps the record with the same id in place. Absent ids leave the page
    /// unchanged.
    pub(crate) fn replace(&mut self, product: &Product) {
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
            *slot = product.clone();
        }
    }

    pub(crate) fn remove(&mut self, id: &ProductId) {
        self.products.retain(|p| &p.id != id);
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

impl Default for ProductCollectionState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            current_product: None,
            total_items: 0,
            total_pages: 0,
            current_page: DEFAULT_PAGE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            is_loading: false,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            description: "Test".to_string(),
            price: 10.0,
            stock: 1,
            category: "Other".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ids(state: &ProductCollectionState) -> Vec<String> {
        state.products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn should_start_with_first_page_of_ten() {
        let state = ProductCollectionState::default();
        assert!(state.products.is_empty());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.items_per_page, 10);
        assert_eq!(state.total_pages, 0);
    }

    #[test]
    fn should_replace_matching_record_in_place() {
        let mut state = ProductCollectionState {
            products: vec![product("a"), product("b"), product("c")],
            ..ProductCollectionState::default()
        };
        let mut updated = product("b");
        updated.name = "Renamed".to_string();

        state.replace(&updated);

        assert_eq!(ids(&state), vec!["a", "b", "c"]);
        assert_eq!(state.products[1].name, "Renamed");
    }

    #[test]
    fn should_ignore_replace_for_unknown_id() {
        let mut state = ProductCollectionState {
            products: vec![product("a"), product("b")],
            ..ProductCollectionState::default()
        };
        let before = state.products.clone();

        state.replace(&product("zzz"));

        assert_eq!(state.products, before);
    }

    proptest! {
        #[test]
        fn should_remove_only_target_and_preserve_order(count in 1usize..20, pick in 0usize..20) {
            let target = pick % count;
            let mut state = ProductCollectionState {
                products: (0..count).map(|i| product(&format!("p{}", i))).collect(),
                ..ProductCollectionState::default()
            };
            let target_id = ProductId::new(format!("p{}", target));

            state.remove(&target_id);

            let expected: Vec<String> = (0..count)
                .filter(|i| *i != target)
                .map(|i| format!("p{}", i))
                .collect();
            prop_assert_eq!(ids(&state), expected);
        }
    }
}
