use lang_registry_core::{CatalogDocument, ConsistencyMode, LoadError, Loader, load};
use rstest::rstest;
use std::collections::BTreeSet;

fn document(languages: &[&str], tables: &[&str]) -> CatalogDocument {
    let mut document = CatalogDocument::new();
    for abbreviation in languages {
        document = document.with_language(abbreviation, &abbreviation.to_uppercase());
    }
    for abbreviation in tables {
        document = document.with_items(abbreviation, [("greet", *abbreviation)]);
    }
    document.with_default(languages.first().copied().unwrap_or("en"))
}

#[rstest]
#[case(&["en"], &["en"], true)]
#[case(&["en", "fr"], &["fr", "en"], true)]
#[case(&["en", "fr"], &["en"], false)]
#[case(&["en", "fr", "de"], &["de"], false)]
fn load_succeeds_iff_every_language_has_a_table(
    #[case] languages: &[&str],
    #[case] tables: &[&str],
    #[case] succeeds: bool,
) {
    let result = load(&document(languages, tables));

    assert_eq!(result.is_ok(), succeeds, "{:?}", result.as_ref().err());
    if !succeeds {
        assert!(matches!(
            result,
            Err(LoadError::CatalogConsistency { .. })
        ));
    }
}

#[test]
fn consistency_error_names_every_uncovered_language() {
    let err = load(&document(&["en", "fr", "de"], &["en"])).unwrap_err();

    assert_eq!(
        err,
        LoadError::CatalogConsistency {
            missing_item_tables: vec!["fr".to_string(), "de".to_string()],
            orphan_item_tables: Vec::new(),
        }
    );
}

#[test]
fn item_table_key_set_matches_declared_ids() {
    let document = CatalogDocument::new()
        .with_language("en", "English")
        .with_language("fr", "Français")
        .with_items("en", [("greet", "Hello"), ("bye", "Goodbye"), ("", "")])
        .with_items("fr", [("greet", "Bonjour")])
        .with_default("fr");

    let catalog = load(&document).unwrap();

    for list in &document.item_details.lists {
        let abbreviation = list.language.as_deref().unwrap();
        let declared: BTreeSet<&str> = list.items.iter().filter_map(|i| i.id.as_deref()).collect();
        let table = catalog.item_table(abbreviation).unwrap();
        let loaded: BTreeSet<&str> = table.ids().collect();

        assert_eq!(declared, loaded);
    }
}

#[test]
fn example_document_loads_with_english_default() {
    let document = CatalogDocument::new()
        .with_language("en", "English")
        .with_language("fr", "Français")
        .with_items("en", [("greet", "Hello")])
        .with_items("fr", [("greet", "Bonjour")])
        .with_default("en");

    let catalog = load(&document).unwrap();

    assert_eq!(catalog.default_language().abbreviation(), "en");
    assert_eq!(catalog.default_item_table()["greet"].content(), Some("Hello"));
}

#[test]
fn undeclared_default_is_rejected() {
    let document = CatalogDocument::new()
        .with_language("en", "English")
        .with_items("en", [("greet", "Hello")])
        .with_default("jp");

    assert_eq!(
        load(&document).unwrap_err(),
        LoadError::DefaultLanguageNotFound("jp".to_string())
    );
}

#[test]
fn permissive_loader_reports_its_mode() {
    let loader = Loader::new(ConsistencyMode::Permissive);
    let catalog = loader
        .load(&document(&["en"], &["en", "xx"]))
        .unwrap();

    assert_eq!(loader.mode(), ConsistencyMode::Permissive);
    let tables: Vec<&str> = catalog.item_table_abbreviations().collect();
    assert_eq!(tables, vec!["en", "xx"]);
}
