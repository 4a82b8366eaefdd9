pub mod auth_service;
pub mod client;
pub mod dto;
pub mod payload;
pub mod product_service;
pub mod user_service;

pub use auth_service::AuthServiceHttp;
pub use client::ApiClient;
pub use product_service::ProductServiceHttp;
pub use user_service::UserServiceHttp;
