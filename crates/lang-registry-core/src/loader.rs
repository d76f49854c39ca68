//! Builds a [`Catalog`] from a [`CatalogDocument`] and checks its invariants.

use crate::catalog::{Catalog, ItemTable};
use crate::document::{CatalogDocument, ItemDetails, LanguageSupport};
use crate::error::{KeyScope, LoadError, ValidationError};
use crate::item::CatalogItem;
use crate::language::LanguageDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const LANGUAGE_SUPPORT: &str = "LanguageSupport";
const ITEM_DETAILS: &str = "ItemDetails";

/// How to treat item tables whose language is not declared.
///
/// Languages without an item table are rejected in every mode.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyMode {
    /// Reject the document.
    #[default]
    Strict,
    /// Keep the table, reachable only through [`Catalog::item_table`].
    Permissive,
}

/// Loads catalog documents under a [`ConsistencyMode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Loader {
    mode: ConsistencyMode,
}

impl Loader {
    pub fn new(mode: ConsistencyMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ConsistencyMode {
        self.mode
    }

    /// Parses, validates and assembles the catalog.
    pub fn load(&self, document: &CatalogDocument) -> Result<Catalog, LoadError> {
        let languages = parse_languages(&document.language_support)?;
        let tables = parse_item_details(&document.item_details)?;
        self.check_consistency(&languages, &tables)?;

        let default_abbreviation = document
            .default_language()
            .ok_or(LoadError::MissingDefaultLanguage)?;
        let Some((default_language, default_items)) = languages
            .get(default_abbreviation)
            .zip(tables.get(default_abbreviation))
        else {
            return Err(LoadError::DefaultLanguageNotFound(
                default_abbreviation.to_owned(),
            ));
        };
        let default_language = default_language.clone();
        let default_items = Arc::clone(default_items);

        tracing::info!(
            "Loaded catalog with {} languages, default '{}'",
            languages.len(),
            default_abbreviation
        );

        Ok(Catalog::from_parts(
            languages,
            tables,
            default_language,
            default_items,
        ))
    }

    fn check_consistency(
        &self,
        languages: &IndexMap<String, LanguageDescriptor>,
        tables: &IndexMap<String, Arc<ItemTable>>,
    ) -> Result<(), LoadError> {
        let missing_item_tables: Vec<String> = languages
            .keys()
            .filter(|abbreviation| !tables.contains_key(*abbreviation))
            .cloned()
            .collect();
        let orphans: Vec<String> = tables
            .keys()
            .filter(|abbreviation| !languages.contains_key(*abbreviation))
            .cloned()
            .collect();

        let orphan_item_tables = match self.mode {
            ConsistencyMode::Strict => orphans,
            ConsistencyMode::Permissive => {
                for abbreviation in &orphans {
                    tracing::warn!(
                        "Keeping item table '{}' that has no declared language",
                        abbreviation
                    );
                }
                Vec::new()
            },
        };

        if missing_item_tables.is_empty() && orphan_item_tables.is_empty() {
            return Ok(());
        }

        Err(LoadError::CatalogConsistency {
            missing_item_tables,
            orphan_item_tables,
        })
    }
}

/// Loads `document` in [`ConsistencyMode::Strict`].
pub fn load(document: &CatalogDocument) -> Result<Catalog, LoadError> {
    Loader::default().load(document)
}

fn parse_languages(
    section: &LanguageSupport,
) -> Result<IndexMap<String, LanguageDescriptor>, LoadError> {
    let mut languages = IndexMap::with_capacity(section.languages.len());

    for (index, entry) in section.languages.iter().enumerate() {
        let language = LanguageDescriptor::from_attributes(
            entry.abbreviation.as_deref(),
            entry.name.as_deref(),
        )
        .map_err(|source| LoadError::Validation {
            section: LANGUAGE_SUPPORT,
            index,
            item: None,
            source,
        })?;

        if languages.contains_key(language.abbreviation()) {
            return Err(LoadError::DuplicateKey {
                scope: KeyScope::Language,
                key: language.abbreviation().to_owned(),
            });
        }
        languages.insert(language.abbreviation().to_owned(), language);
    }

    Ok(languages)
}

fn parse_item_details(
    section: &ItemDetails,
) -> Result<IndexMap<String, Arc<ItemTable>>, LoadError> {
    let mut tables = IndexMap::with_capacity(section.lists.len());

    for (index, list) in section.lists.iter().enumerate() {
        let language = list
            .language
            .as_deref()
            .ok_or(ValidationError::Missing {
                entity: "item list",
                field: "language",
            })
            .and_then(|language| {
                if language.trim().is_empty() {
                    Err(ValidationError::Blank {
                        entity: "item list",
                        field: "language",
                    })
                } else {
                    Ok(language)
                }
            })
            .map_err(|source| LoadError::Validation {
                section: ITEM_DETAILS,
                index,
                item: None,
                source,
            })?;

        if tables.contains_key(language) {
            return Err(LoadError::DuplicateKey {
                scope: KeyScope::ItemList,
                key: language.to_owned(),
            });
        }

        let mut table = ItemTable::new();
        for (position, entry) in list.items.iter().enumerate() {
            let item = CatalogItem::from_attributes(entry.id.as_deref(), entry.content.as_deref())
                .map_err(|source| LoadError::Validation {
                    section: ITEM_DETAILS,
                    index,
                    item: Some(position),
                    source,
                })?;
            table
                .try_insert(item)
                .map_err(|item| LoadError::DuplicateKey {
                    scope: KeyScope::Item {
                        language: language.to_owned(),
                    },
                    key: item.id().to_owned(),
                })?;
        }

        tracing::debug!("Parsed {} items for language '{}'", table.len(), language);
        tables.insert(language.to_owned(), Arc::new(table));
    }

    Ok(tables)
}
