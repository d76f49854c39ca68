//! This module provides the sources a [`CatalogDocument`] can be read from.

use lang_registry_core::CatalogDocument;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document does not exist at its source.
    #[error("Catalog document '{0}' not found")]
    NotFound(String),
    /// The document could not be read.
    #[error("Failed to read catalog document: {0}")]
    ReadError(#[from] std::io::Error),
    /// The document is not valid UTF-8.
    #[error("Catalog document '{source_name}' is not valid UTF-8")]
    InvalidUtf8 {
        source_name: String,
        #[source]
        source: std::str::Utf8Error,
    },
    /// The document is not valid TOML or does not match the document tree.
    #[error("Failed to parse catalog document '{source_name}': {source}")]
    ParseError {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },
    /// The document tree could not be written as TOML.
    #[error("Failed to serialize catalog document: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// A source of parsed catalog documents.
pub trait DocumentProvider {
    /// Reads and parses the document.
    fn load_document(&self) -> Result<CatalogDocument, DocumentError>;

    /// A human-readable name of the source, used in diagnostics.
    fn source_name(&self) -> String;
}

/// An already-parsed document provides itself.
impl DocumentProvider for CatalogDocument {
    fn load_document(&self) -> Result<CatalogDocument, DocumentError> {
        Ok(self.clone())
    }

    fn source_name(&self) -> String {
        "<in-memory document>".to_string()
    }
}

/// Parses a TOML catalog document.
///
/// `source_name` only labels errors.
pub fn parse_document(content: &str, source_name: &str) -> Result<CatalogDocument, DocumentError> {
    toml::from_str(content).map_err(|source| DocumentError::ParseError {
        source_name: source_name.to_string(),
        source,
    })
}

/// Writes a catalog document as TOML.
pub fn document_to_string(document: &CatalogDocument) -> Result<String, DocumentError> {
    Ok(toml::to_string(document)?)
}

/// A TOML document on the filesystem.
#[derive(Clone, Debug)]
pub struct TomlFileDocument {
    path: PathBuf,
}

impl TomlFileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentProvider for TomlFileDocument {
    fn load_document(&self) -> Result<CatalogDocument, DocumentError> {
        if !self.path.exists() {
            return Err(DocumentError::NotFound(self.source_name()));
        }

        let content = fs_err::read_to_string(&self.path)?;
        tracing::debug!("Read catalog document from '{}'", self.path.display());
        parse_document(&content, &self.source_name())
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// A TOML document held in memory, typically from `include_str!`.
#[derive(Clone, Debug)]
pub struct TomlStrDocument<'a> {
    content: Cow<'a, str>,
}

impl<'a> TomlStrDocument<'a> {
    pub fn new(content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DocumentProvider for TomlStrDocument<'_> {
    fn load_document(&self) -> Result<CatalogDocument, DocumentError> {
        parse_document(&self.content, &self.source_name())
    }

    fn source_name(&self) -> String {
        "<inline toml>".to_string()
    }
}

/// A TOML document embedded into the binary with `rust-embed`.
///
/// `file` is the path of the document inside the embedded folder.
#[derive(Debug)]
pub struct EmbeddedDocument<A: RustEmbed> {
    file: Cow<'static, str>,
    _assets: PhantomData<fn() -> A>,
}

impl<A: RustEmbed> EmbeddedDocument<A> {
    pub fn new(file: impl Into<Cow<'static, str>>) -> Self {
        Self {
            file: file.into(),
            _assets: PhantomData,
        }
    }

    /// Lists the embedded files that look like TOML documents.
    pub fn discover() -> Vec<String> {
        let mut files: Vec<String> = A::iter()
            .filter(|path| path.ends_with(".toml"))
            .map(|path| path.into_owned())
            .collect();
        files.sort();
        files
    }
}

impl<A: RustEmbed> DocumentProvider for EmbeddedDocument<A> {
    fn load_document(&self) -> Result<CatalogDocument, DocumentError> {
        let file = A::get(&self.file).ok_or_else(|| DocumentError::NotFound(self.source_name()))?;

        let content =
            std::str::from_utf8(&file.data).map_err(|source| DocumentError::InvalidUtf8 {
                source_name: self.source_name(),
                source,
            })?;

        parse_document(content, &self.source_name())
    }

    fn source_name(&self) -> String {
        format!("embedded:{}", self.file)
    }
}
