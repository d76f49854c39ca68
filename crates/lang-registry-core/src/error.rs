//! This module provides the error types for `lang-registry-core`.

use std::fmt;
use thiserror::Error;

/// A constructed entity violates a field constraint.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required attribute is absent.
    #[error("{entity} attribute '{field}' is missing")]
    Missing {
        entity: &'static str,
        field: &'static str,
    },
    /// A required attribute is empty or whitespace-only.
    #[error("{entity} attribute '{field}' must not be empty or whitespace")]
    Blank {
        entity: &'static str,
        field: &'static str,
    },
}

/// The keyspace a duplicated key was found in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyScope {
    /// A language abbreviation in the `LanguageSupport` section.
    Language,
    /// The language tag of an item list in the `ItemDetails` section.
    ItemList,
    /// An item id within one language's item table.
    Item { language: String },
}

impl fmt::Display for KeyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyScope::Language => f.write_str("language abbreviation"),
            KeyScope::ItemList => f.write_str("item list for language"),
            KeyScope::Item { language } => write!(f, "item id in language '{}'", language),
        }
    }
}

/// An error raised while loading a catalog document.
///
/// Every variant is fatal: no catalog is produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// An entry failed entity validation.
    ///
    /// `index` is the entry within the section; `item` is the item within an
    /// `ItemDetails` list, when the item itself is at fault.
    #[error("{}: {source}", entry_fmt(.section, .index, .item))]
    Validation {
        section: &'static str,
        index: usize,
        item: Option<usize>,
        #[source]
        source: ValidationError,
    },

    /// A key repeats where it must be unique.
    #[error("Duplicate {scope} '{key}'")]
    DuplicateKey { scope: KeyScope, key: String },

    /// The declared languages and the item tables do not line up.
    #[error("{}", consistency_fmt(.missing_item_tables, .orphan_item_tables))]
    CatalogConsistency {
        /// Languages declared without an item table.
        missing_item_tables: Vec<String>,
        /// Item tables whose language is not declared.
        orphan_item_tables: Vec<String>,
    },

    /// The configured default language is not registered.
    #[error("Default language '{0}' is not a registered language")]
    DefaultLanguageNotFound(String),

    /// The `Settings` section does not name a default language.
    #[error("Settings section does not name a default language")]
    MissingDefaultLanguage,
}

fn entry_fmt(section: &str, index: &usize, item: &Option<usize>) -> String {
    match item {
        Some(item) => format!(
            "Invalid item #{} of entry #{} in section '{}'",
            item, index, section
        ),
        None => format!("Invalid entry #{} in section '{}'", index, section),
    }
}

fn consistency_fmt(missing: &[String], orphans: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!(
            "languages without an item table: {}",
            missing.join(", ")
        ));
    }
    if !orphans.is_empty() {
        parts.push(format!(
            "item tables without a declared language: {}",
            orphans.join(", ")
        ));
    }
    format!("Catalog is inconsistent ({})", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_message_names_every_abbreviation() {
        let err = LoadError::CatalogConsistency {
            missing_item_tables: vec!["de".to_string(), "it".to_string()],
            orphan_item_tables: vec!["xx".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Catalog is inconsistent (languages without an item table: de, it; \
             item tables without a declared language: xx)"
        );
    }

    #[test]
    fn duplicate_item_message_names_language() {
        let err = LoadError::DuplicateKey {
            scope: KeyScope::Item {
                language: "en".to_string(),
            },
            key: "greet".to_string(),
        };

        assert_eq!(err.to_string(), "Duplicate item id in language 'en' 'greet'");
    }

    #[test]
    fn validation_message_wraps_source() {
        let err = LoadError::Validation {
            section: "LanguageSupport",
            index: 2,
            item: None,
            source: ValidationError::Blank {
                entity: "language",
                field: "name",
            },
        };

        assert_eq!(
            err.to_string(),
            "Invalid entry #2 in section 'LanguageSupport': \
             language attribute 'name' must not be empty or whitespace"
        );
    }

    #[test]
    fn validation_message_names_item_position() {
        let err = LoadError::Validation {
            section: "ItemDetails",
            index: 0,
            item: Some(2),
            source: ValidationError::Missing {
                entity: "item",
                field: "id",
            },
        };

        assert_eq!(
            err.to_string(),
            "Invalid item #2 of entry #0 in section 'ItemDetails': \
             item attribute 'id' is missing"
        );
    }
}
