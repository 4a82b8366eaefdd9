pub mod file_token_store;
pub mod in_memory;

pub use file_token_store::{FileTokenStore, TokenStoreConfig};
pub use in_memory::InMemoryTokenStore;
