#![doc = include_str!("../README.md")]

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{LanguageRegistry, Selection};

pub use lang_registry_core::{
    Catalog, CatalogDocument, CatalogItem, ConsistencyMode, ItemTable, KeyScope,
    LanguageDescriptor, LoadError, Loader, ValidationError,
};
pub use lang_registry_toml::{
    DocumentError, DocumentProvider, EmbeddedDocument, RegistryConfig, RegistryConfigError,
    TomlFileDocument, TomlStrDocument,
};
