use lang_registry_core::LoadError;
use lang_registry_toml::{DocumentError, RegistryConfigError};
use thiserror::Error;

/// An error that prevents a [`crate::LanguageRegistry`] from being built.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Config(#[from] RegistryConfigError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// The document was read but failed validation.
    #[error("Invalid catalog document '{source_name}': {source}")]
    Load {
        source_name: String,
        #[source]
        source: LoadError,
    },
}

impl RegistryError {
    /// The validation failure, if the document itself was rejected.
    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            RegistryError::Load { source, .. } => Some(source),
            _ => None,
        }
    }
}
