//! The language selection service.
//!
//! The selected language and its item table live together in one immutable
//! [`Selection`] behind an [`ArcSwap`]. Changing the language swaps the whole
//! snapshot, so a reader can never pair one language with another's items.

use crate::error::RegistryError;
use arc_swap::ArcSwap;
use lang_registry_core::{
    Catalog, CatalogDocument, CatalogItem, ConsistencyMode, ItemTable, LanguageDescriptor,
    LoadError, Loader,
};
use lang_registry_toml::{DocumentProvider, RegistryConfig};
use std::path::Path;
use std::sync::Arc;

/// A language paired with its item table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    language: LanguageDescriptor,
    items: Arc<ItemTable>,
}

impl Selection {
    pub fn language(&self) -> &LanguageDescriptor {
        &self.language
    }

    pub fn items(&self) -> &Arc<ItemTable> {
        &self.items
    }
}

/// The loaded catalog plus the currently selected language.
///
/// Construct one at startup and share it (e.g. behind an `Arc`); every method
/// takes `&self` and is safe to call from any number of threads.
#[derive(Debug)]
pub struct LanguageRegistry {
    catalog: Catalog,
    selection: ArcSwap<Selection>,
}

impl LanguageRegistry {
    /// Wraps a loaded catalog, selecting its default language.
    pub fn new(catalog: Catalog) -> Self {
        let selection = Selection {
            language: catalog.default_language().clone(),
            items: catalog.default_item_table(),
        };

        Self {
            catalog,
            selection: ArcSwap::from_pointee(selection),
        }
    }

    /// Loads `document` in strict mode.
    pub fn load(document: &CatalogDocument) -> Result<Self, LoadError> {
        Loader::default().load(document).map(Self::new)
    }

    /// Reads a document from `provider` and loads it.
    pub fn from_provider<P>(provider: &P, mode: ConsistencyMode) -> Result<Self, RegistryError>
    where
        P: DocumentProvider + ?Sized,
    {
        let document = provider.load_document()?;
        let catalog = Loader::new(mode).load(&document).map_err(|source| {
            RegistryError::Load {
                source_name: provider.source_name(),
                source,
            }
        })?;
        tracing::info!(
            "Language registry initialized from {}",
            provider.source_name()
        );
        Ok(Self::new(catalog))
    }

    /// Reads the document named by `config`, relative to `base_dir`.
    ///
    /// If `base_dir` is `None`, uses `CARGO_MANIFEST_DIR`.
    pub fn from_config(
        config: &RegistryConfig,
        base_dir: Option<&Path>,
    ) -> Result<Self, RegistryError> {
        let provider = config.document_provider(base_dir)?;
        Self::from_provider(&provider, config.consistency)
    }

    /// Reads `registry.toml` from `manifest_dir` and the document it names.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, RegistryError> {
        let config = RegistryConfig::from_manifest_dir(manifest_dir)?;
        Self::from_config(&config, Some(manifest_dir))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the current language and item table as one consistent pair.
    pub fn selection(&self) -> Arc<Selection> {
        self.selection.load_full()
    }

    pub fn current_language(&self) -> LanguageDescriptor {
        self.selection.load().language.clone()
    }

    pub fn current_item_table(&self) -> Arc<ItemTable> {
        Arc::clone(&self.selection.load().items)
    }

    /// Selects the language registered under `abbreviation`.
    ///
    /// Returns `false` and leaves the selection untouched if no such language
    /// is registered.
    pub fn set_language(&self, abbreviation: &str) -> bool {
        let Some(selection) = self.selection_for(abbreviation) else {
            tracing::debug!("Language '{}' is not registered", abbreviation);
            return false;
        };

        self.selection.store(Arc::new(selection));
        tracing::debug!("Selected language '{}'", abbreviation);
        true
    }

    /// Selects the registered language that best serves `requested`,
    /// falling back from e.g. `en-US` to `en`.
    ///
    /// Returns the selected language, or `None` with the selection untouched.
    pub fn select_best(&self, requested: &str) -> Option<LanguageDescriptor> {
        let language = self.catalog.negotiate(requested)?.clone();
        self.set_language(language.abbreviation()).then_some(language)
    }

    pub fn default_language(&self) -> &LanguageDescriptor {
        self.catalog.default_language()
    }

    pub fn default_item_table(&self) -> Arc<ItemTable> {
        self.catalog.default_item_table()
    }

    /// Looks `id` up in the current item table, then in the default one.
    pub fn item(&self, id: &str) -> Option<CatalogItem> {
        let selection = self.selection.load();
        if let Some(item) = selection.items.get(id) {
            return Some(item.clone());
        }

        let item = self.catalog.default_item_table().get(id).cloned();
        if item.is_some() {
            tracing::debug!(
                "Item '{}' missing in '{}', using default language",
                id,
                selection.language.abbreviation()
            );
        }
        item
    }

    fn selection_for(&self, abbreviation: &str) -> Option<Selection> {
        let language = self.catalog.language(abbreviation)?.clone();
        let items = self.catalog.item_table(abbreviation)?;
        Some(Selection { language, items })
    }
}
