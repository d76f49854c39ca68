use lang_registry_toml::{DocumentError, DocumentProvider, EmbeddedDocument};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "tests/fixtures/"]
struct Fixtures;

#[test]
fn embedded_document_is_parsed() {
    let provider = EmbeddedDocument::<Fixtures>::new("catalog.toml");
    let document = provider.load_document().unwrap();

    assert_eq!(provider.source_name(), "embedded:catalog.toml");
    assert_eq!(document.language_support.languages.len(), 2);
    assert_eq!(document.item_details.lists[1].language.as_deref(), Some("fr"));
    assert_eq!(document.default_language(), Some("en"));
}

#[test]
fn missing_embedded_file_is_not_found() {
    let provider = EmbeddedDocument::<Fixtures>::new("absent.toml");

    assert!(matches!(
        provider.load_document(),
        Err(DocumentError::NotFound(name)) if name == "embedded:absent.toml"
    ));
}

#[test]
fn non_utf8_embedded_file_is_rejected() {
    let provider = EmbeddedDocument::<Fixtures>::new("broken.toml");

    assert!(matches!(
        provider.load_document(),
        Err(DocumentError::InvalidUtf8 { .. })
    ));
}

#[test]
fn discover_lists_toml_files() {
    assert_eq!(
        EmbeddedDocument::<Fixtures>::discover(),
        vec!["broken.toml".to_string(), "catalog.toml".to_string()]
    );
}
