//! Infrastructure layer: catalog storage and fixture loading.

pub mod error;
pub mod fixtures;
pub mod store;

pub use error::StoreError;
pub use fixtures::Fixtures;
pub use store::{CatalogStore, InMemoryCatalogStore};
