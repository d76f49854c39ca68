//! This module provides the [`CatalogItem`] value type.

use crate::error::ValidationError;

/// A single localized string, keyed by an id within its language's table.
///
/// The id may be empty; the content may be empty or absent altogether.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogItem {
    id: String,
    content: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, content: Option<String>) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// Creates an item from optional document attributes.
    ///
    /// Only the id is required.
    pub fn from_attributes(
        id: Option<&str>,
        content: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let id = id.ok_or(ValidationError::Missing {
            entity: "item",
            field: "id",
        })?;
        Ok(Self::new(id, content.map(str::to_owned)))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}
