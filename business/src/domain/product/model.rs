use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::ProductId;
use crate::domain::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload submitted by the product form when creating a record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, &self.name);
        check_description(&mut errors, &self.description);
        check_price(&mut errors, self.price);
        check_category(&mut errors, &self.category);
        errors.into_result()
    }
}

/// Partial update. Unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub category: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category.is_none()
    }

    /// Only the fields being changed are checked.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            check_name(&mut errors, name);
        }
        if let Some(description) = &self.description {
            check_description(&mut errors, description);
        }
        if let Some(price) = self.price {
            check_price(&mut errors, price);
        }
        if let Some(category) = &self.category {
            check_category(&mut errors, category);
        }
        errors.into_result()
    }
}

impl From<ProductDraft> for ProductPatch {
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            stock: Some(draft.stock),
            category: Some(draft.category),
        }
    }
}

/// One page of the server's product set, after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub items_per_page: u32,
}

fn check_name(errors: &mut ValidationErrors, name: &str) {
    if name.trim().is_empty() {
        errors.add("name", "Name is required");
    }
}

fn check_description(errors: &mut ValidationErrors, description: &str) {
    if description.trim().is_empty() {
        errors.add("description", "Description is required");
    }
}

// Stock needs no check: `u32` cannot go negative.
fn check_price(errors: &mut ValidationErrors, price: f64) {
    if !price.is_finite() || price <= 0.0 {
        errors.add("price", "Price must be greater than zero");
    }
}

fn check_category(errors: &mut ValidationErrors, category: &str) {
    if category.trim().is_empty() {
        errors.add("category", "Category is required");
    }
}
