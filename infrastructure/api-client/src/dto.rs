use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::auth::model::{LoginCredentials, RegisterCredentials, User};
use business::domain::product::model::{Product, ProductDraft, ProductPage, ProductPatch};
use business::domain::product::value_objects::{ProductQuery, SortOrder};
use business::domain::shared::value_objects::{ProductId, UserId};
use business::domain::user::model::UserPatch;

#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserDto {
    pub fn into_domain(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
        }
    }
}

/// `data` of the login envelope. Both fields are optional on the wire so a
/// partial answer can be reported instead of failing to decode.
#[derive(Debug, Deserialize)]
pub struct LoginDataDto {
    pub user: Option<UserDto>,
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponseDto {
    pub products: Vec<ProductDto>,
    pub total_items: Option<u64>,
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
    pub items_per_page: Option<u32>,
}

impl ProductsResponseDto {
    /// Counters the server leaves out (or sends as zero) fall back to the
    /// requested window; an unknown page count is treated as one page.
    pub fn into_page(self, query: &ProductQuery) -> ProductPage {
        ProductPage {
            products: self
                .products
                .into_iter()
                .map(ProductDto::into_domain)
                .collect(),
            total_items: self.total_items.unwrap_or(0),
            total_pages: self.total_pages.filter(|n| *n > 0).unwrap_or(1),
            current_page: self.current_page.filter(|n| *n > 0).unwrap_or(query.page),
            items_per_page: self
                .items_per_page
                .filter(|n| *n > 0)
                .unwrap_or(query.limit),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a LoginCredentials> for LoginBody<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a RegisterCredentials> for RegisterBody<'a> {
    fn from(credentials: &'a RegisterCredentials) -> Self {
        Self {
            name: &credentials.name,
            email: &credentials.email,
            password: &credentials.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub stock: u32,
    pub category: &'a str,
}

impl<'a> From<&'a ProductDraft> for ProductBody<'a> {
    fn from(draft: &'a ProductDraft) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
            price: draft.price,
            stock: draft.stock,
            category: &draft.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductPatchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
}

impl<'a> From<&'a ProductPatch> for ProductPatchBody<'a> {
    fn from(patch: &'a ProductPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            description: patch.description.as_deref(),
            price: patch.price,
            stock: patch.stock,
            category: patch.category.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserPatchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

impl<'a> From<&'a UserPatch> for UserPatchBody<'a> {
    fn from(patch: &'a UserPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            email: patch.email.as_deref(),
        }
    }
}

/// Query string for `GET /products`. Unset filters are left out entirely.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams<'a> {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl<'a> From<&'a ProductQuery> for ProductQueryParams<'a> {
    fn from(query: &'a ProductQuery) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            search: query.search.as_deref(),
            category: query.category.as_deref(),
            sort_by: query.sort_by.as_deref(),
            sort_order: query.sort_order,
        }
    }
}
