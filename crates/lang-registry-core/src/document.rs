//! The parsed catalog document tree.
//!
//! The tree mirrors the source document verbatim: every attribute is optional
//! here, and the loader decides what is required. Section and entry names use
//! the document's own spelling, so a TOML document reads:
//!
//! ```toml
//! [[LanguageSupport.Language]]
//! abbreviation = "en"
//! name = "English"
//!
//! [[ItemDetails.Items]]
//! language = "en"
//!
//! [[ItemDetails.Items.Item]]
//! id = "greet"
//! content = "Hello"
//!
//! [Settings.Default]
//! language = "en"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogDocument {
    #[serde(default)]
    pub language_support: LanguageSupport,
    #[serde(default)]
    pub item_details: ItemDetails,
    #[serde(default)]
    pub settings: Settings,
}

/// The `LanguageSupport` section.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct LanguageSupport {
    #[serde(rename = "Language", default)]
    pub languages: Vec<LanguageEntry>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The `ItemDetails` section.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ItemDetails {
    #[serde(rename = "Items", default)]
    pub lists: Vec<ItemList>,
}

/// The items of one language, tagged with its abbreviation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ItemList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "Item", default)]
    pub items: Vec<ItemEntry>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ItemEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// The `Settings` section.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultEntry>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct DefaultEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CatalogDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `LanguageSupport` entry.
    pub fn with_language(mut self, abbreviation: &str, name: &str) -> Self {
        self.language_support.languages.push(LanguageEntry {
            abbreviation: Some(abbreviation.to_owned()),
            name: Some(name.to_owned()),
        });
        self
    }

    /// Appends an `ItemDetails` list for `language`.
    pub fn with_items<'a>(
        mut self,
        language: &str,
        items: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.item_details.lists.push(ItemList {
            language: Some(language.to_owned()),
            items: items
                .into_iter()
                .map(|(id, content)| ItemEntry {
                    id: Some(id.to_owned()),
                    content: Some(content.to_owned()),
                })
                .collect(),
        });
        self
    }

    /// Sets `Settings.Default.language`.
    pub fn with_default(mut self, language: &str) -> Self {
        self.settings.default = Some(DefaultEntry {
            language: Some(language.to_owned()),
        });
        self
    }

    /// The default abbreviation named by `Settings.Default`, if any.
    pub fn default_language(&self) -> Option<&str> {
        self.settings
            .default
            .as_ref()
            .and_then(|entry| entry.language.as_deref())
    }
}
