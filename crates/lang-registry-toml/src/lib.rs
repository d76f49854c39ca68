#![doc = include_str!("../README.md")]

use lang_registry_core::ConsistencyMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod provider;

pub use provider::{
    DocumentError, DocumentProvider, EmbeddedDocument, TomlFileDocument, TomlStrDocument,
    document_to_string, parse_document,
};

/// The name of the configuration file looked up in a manifest directory.
pub const CONFIG_FILE_NAME: &str = "registry.toml";

#[derive(Debug, Error)]
pub enum RegistryConfigError {
    /// Configuration file not found.
    #[error("registry.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The configuration for `lang-registry`.
///
/// ```toml
/// document = "i18n/catalog.toml"
/// consistency = "permissive"
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct RegistryConfig {
    /// Path to the catalog document, relative to the directory holding the
    /// configuration file.
    pub document: PathBuf,
    /// How to treat item tables without a declared language.
    /// Defaults to `strict`.
    #[serde(default)]
    pub consistency: ConsistencyMode,
}

impl RegistryConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, RegistryConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RegistryConfigError::NotFound);
        }

        let content = fs_err::read_to_string(path)?;

        let config: RegistryConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Reads the configuration from the manifest directory.
    pub fn read_from_manifest_dir() -> Result<Self, RegistryConfigError> {
        let manifest_dir =
            env::var("CARGO_MANIFEST_DIR").map_err(|_| RegistryConfigError::NotFound)?;

        Self::from_manifest_dir(Path::new(&manifest_dir))
    }

    /// Reads `registry.toml` from the given directory.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, RegistryConfigError> {
        Self::read_from_path(manifest_dir.join(CONFIG_FILE_NAME))
    }

    /// Returns the document path resolved against a base directory.
    /// If `base_dir` is `None`, uses `CARGO_MANIFEST_DIR` environment variable.
    pub fn document_path_from_base(
        &self,
        base_dir: Option<&Path>,
    ) -> Result<PathBuf, RegistryConfigError> {
        let base = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => {
                let manifest_dir =
                    env::var("CARGO_MANIFEST_DIR").map_err(|_| RegistryConfigError::NotFound)?;
                PathBuf::from(manifest_dir)
            },
        };

        Ok(base.join(&self.document))
    }

    /// Returns a provider reading the configured document.
    pub fn document_provider(
        &self,
        base_dir: Option<&Path>,
    ) -> Result<TomlFileDocument, RegistryConfigError> {
        Ok(TomlFileDocument::new(self.document_path_from_base(base_dir)?))
    }
}
