//! Loading the relation store from JSON mapping files.

mod common;

use common::{fixture_dir, write};
use lexgraph_core::{
    LexicalNode, Lexicon, LexiconConfig, LoadError, NodeIdError, RelationStore,
};
use serde_json::json;

#[test]
fn test_load_fixture() {
    let (_dir, config) = fixture_dir();
    let store = RelationStore::load(&config).unwrap();

    assert_eq!(store.word_count(), 4);
    assert_eq!(store.languages_of("cat"), ["eng", "fra"]);
    assert_eq!(
        store.meanings_of("eng", "cat"),
        [LexicalNode::new("eng", "feline"), LexicalNode::new("fra", "chat")]
    );
    assert_eq!(
        store.parent_edges_of(&LexicalNode::new("eng", "cat")),
        [LexicalNode::new("lat", "cattus")]
    );
    assert_eq!(
        store
            .child_edges_of(&LexicalNode::new("lat", "cattus"))
            .len(),
        2
    );
    assert_eq!(store.samples_of("lat"), ["Cattus in horto est."]);
    assert_eq!(store.relation_samples_of("eng", "lat"), ["cat < cattus"]);
    assert!(store.relation_samples_of("lat", "eng").is_empty());
    assert_eq!(store.display_name_of("fra"), Some("French"));
}

#[test]
fn test_load_language_network() {
    let (_dir, config) = fixture_dir();
    let store = RelationStore::load(&config).unwrap();

    let from = store.language_network_from("eng");
    let order: Vec<&str> = from.iter().map(|l| l.language.as_str()).collect();
    assert_eq!(order, ["lat", "fra"]);
    assert_eq!(from[0].proportion, 0.75);

    let to = store.language_network_to("lat");
    assert_eq!(to[0].language, "fra");
    assert_eq!(to[0].count, 140);
}

#[test]
fn test_network_file_is_optional() {
    let (dir, config) = fixture_dir();
    std::fs::remove_file(dir.path().join("lang_network.json")).unwrap();

    let store = RelationStore::load(&config).unwrap();
    assert!(store.language_network_from("eng").is_empty());
    assert_eq!(store.languages_of("cat"), ["eng", "fra"]);
}

#[test]
fn test_missing_required_file() {
    let (dir, config) = fixture_dir();
    std::fs::remove_file(dir.path().join("word_children.json")).unwrap();

    let err = RelationStore::load(&config).unwrap_err();
    match err {
        LoadError::Io { path, .. } => assert!(path.ends_with("word_children.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_invalid_json() {
    let (dir, config) = fixture_dir();
    std::fs::write(dir.path().join("langs.json"), "{ not json").unwrap();

    let err = RelationStore::load(&config).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_malformed_key_fails_load() {
    let (dir, config) = fixture_dir();
    write(dir.path(), "word_parents.json", &json!({ "engcat": ["lat:cattus"] }));

    let err = RelationStore::load(&config).unwrap_err();
    match err {
        LoadError::MalformedIdentifier { file, id, source } => {
            assert_eq!(file, "word_parents.json");
            assert_eq!(id, "engcat");
            assert_eq!(source, NodeIdError::MissingSeparator("engcat".to_string()));
        }
        other => panic!("expected MalformedIdentifier, got {other:?}"),
    }
}

#[test]
fn test_malformed_value_fails_load() {
    let (dir, config) = fixture_dir();
    write(dir.path(), "word_meanings.json", &json!({ "eng:cat": ["fra:"] }));

    let err = RelationStore::load(&config).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MalformedIdentifier {
            source: NodeIdError::EmptyWord(_),
            ..
        }
    ));
    assert!(err.to_string().contains("word_meanings.json"));
}

#[test]
fn test_lexicon_from_config() {
    let (dir, _) = fixture_dir();
    let yaml = format!(
        "data:\n  dir: {:?}\ntraversal:\n  max_depth: 8\n",
        dir.path().display().to_string()
    );
    let config = LexiconConfig::from_yaml(&yaml).unwrap();
    let lexicon = Lexicon::from_config(&config).unwrap();

    let found = lexicon.word_in_language("eng", "cat").unwrap();
    assert_eq!(found.translations, vec![LexicalNode::new("fra", "chat")]);
    assert_eq!(found.ancestry.len(), 2);
    assert!(!found.ancestry.truncated);

    let info = lexicon.language_info("eng").unwrap();
    assert_eq!(info.name.as_deref(), Some("English"));
    assert_eq!(info.borrows_from.len(), 2);
}
