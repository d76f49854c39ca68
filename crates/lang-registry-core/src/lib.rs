#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod document;
pub mod error;
pub mod item;
pub mod language;
pub mod loader;

// Re-export the key types for easy top-level access.
pub use catalog::{Catalog, ItemTable};
pub use document::CatalogDocument;
pub use error::{KeyScope, LoadError, ValidationError};
pub use item::CatalogItem;
pub use language::LanguageDescriptor;
pub use loader::{ConsistencyMode, Loader, load};
