//! The loaded catalog: supported languages and their item tables.
//!
//! # Invariants
//!
//! 1. Every registered language has exactly one item table.
//! 2. The default language is registered, and its table is present.
//! 3. Nothing is mutated after [`crate::loader::Loader::load`] returns, so the
//!    catalog is `Send + Sync` without locking.

use crate::item::CatalogItem;
use crate::language::LanguageDescriptor;
use indexmap::IndexMap;
use std::ops::Index;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// The items of one language, keyed by item id in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemTable {
    items: IndexMap<String, CatalogItem>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, handing it back if its id is already taken.
    pub(crate) fn try_insert(&mut self, item: CatalogItem) -> Result<(), CatalogItem> {
        if self.items.contains_key(item.id()) {
            return Err(item);
        }
        self.items.insert(item.id().to_owned(), item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.values()
    }
}

impl Index<&str> for ItemTable {
    type Output = CatalogItem;

    /// # Panics
    ///
    /// Panics if the table has no item with this id.
    fn index(&self, id: &str) -> &CatalogItem {
        self.items
            .get(id)
            .unwrap_or_else(|| panic!("no item with id '{}'", id))
    }
}

impl<'a> IntoIterator for &'a ItemTable {
    type Item = &'a CatalogItem;
    type IntoIter = indexmap::map::Values<'a, String, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

impl FromIterator<CatalogItem> for ItemTable {
    /// Later items with a repeated id replace earlier ones.
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|item| (item.id().to_owned(), item))
                .collect(),
        }
    }
}

/// The full, immutable set of languages and item tables.
#[derive(Clone, Debug)]
pub struct Catalog {
    languages: IndexMap<String, LanguageDescriptor>,
    tables: IndexMap<String, Arc<ItemTable>>,
    default_language: LanguageDescriptor,
    default_items: Arc<ItemTable>,
}

impl Catalog {
    /// Assembles a catalog whose invariants were checked by the loader.
    pub(crate) fn from_parts(
        languages: IndexMap<String, LanguageDescriptor>,
        tables: IndexMap<String, Arc<ItemTable>>,
        default_language: LanguageDescriptor,
        default_items: Arc<ItemTable>,
    ) -> Self {
        Self {
            languages,
            tables,
            default_language,
            default_items,
        }
    }

    /// Returns a snapshot of every registered language, in document order.
    pub fn list_languages(&self) -> Vec<LanguageDescriptor> {
        self.languages.values().cloned().collect()
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.values()
    }

    pub fn language(&self, abbreviation: &str) -> Option<&LanguageDescriptor> {
        self.languages.get(abbreviation)
    }

    pub fn contains_language(&self, abbreviation: &str) -> bool {
        self.languages.contains_key(abbreviation)
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Returns the item table for `abbreviation`, or `None` if there is none.
    pub fn item_table(&self, abbreviation: &str) -> Option<Arc<ItemTable>> {
        self.tables.get(abbreviation).cloned()
    }

    /// Abbreviations of every item table, including any kept without a
    /// declared language.
    pub fn item_table_abbreviations(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn default_language(&self) -> &LanguageDescriptor {
        &self.default_language
    }

    pub fn default_abbreviation(&self) -> &str {
        self.default_language.abbreviation()
    }

    pub fn default_item_table(&self) -> Arc<ItemTable> {
        Arc::clone(&self.default_items)
    }

    /// Picks the registered language that best serves `requested`.
    ///
    /// Tries the abbreviation verbatim, then its canonical BCP 47 form, then
    /// the primary language subtag (`en-US` falls back to `en`).
    pub fn negotiate(&self, requested: &str) -> Option<&LanguageDescriptor> {
        if let Some(language) = self.language(requested) {
            return Some(language);
        }

        let requested = requested.parse::<LanguageIdentifier>().ok()?;
        if let Some(language) = self.language(&requested.to_string()) {
            return Some(language);
        }

        let has_subtags = requested.script.is_some()
            || requested.region.is_some()
            || requested.variants().next().is_some();
        if has_subtags {
            return self.language(requested.language.as_str());
        }

        None
    }
}
