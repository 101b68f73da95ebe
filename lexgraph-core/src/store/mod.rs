//! Relation Store - the immutable lexical graph
//!
//! Holds every precomputed mapping the queries read from:
//!
//! ```text
//! word              -> [language]
//! (language, word)  -> [(language, word)]   meanings (synonyms + translations)
//! (language, word)  -> [(language, word)]   parents
//! (language, word)  -> [(language, word)]   children
//! language          -> [sentence]
//! (language, lang.) -> [sentence]           relation samples
//! language          -> metadata (display name)
//! language          -> [NetworkLink]        contact network, from / to
//! ```
//!
//! A store is constructed once, either with [`RelationStoreBuilder`] or by
//! [`RelationStore::load`], and never mutated afterwards. Share it behind an
//! `Arc`; all accessors take `&self` and return borrowed data. Unknown keys
//! yield empty slices or `None`, never an error.

mod builder;
mod loader;
mod network;

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::node_id::LexicalNode;

pub use builder::RelationStoreBuilder;
pub use network::NetworkLink;

/// Metadata about a language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMeta {
    /// Human-readable name (e.g. "English")
    pub name: String,
}

/// In-memory lexical relation index
#[derive(Debug, Default)]
pub struct RelationStore {
    /// Ordered so prefix scans are a range walk
    word_languages: BTreeMap<String, Vec<String>>,
    meanings: HashMap<LexicalNode, Vec<LexicalNode>>,
    parents: HashMap<LexicalNode, Vec<LexicalNode>>,
    children: HashMap<LexicalNode, Vec<LexicalNode>>,
    language_samples: HashMap<String, Vec<String>>,
    /// Keyed by source code immediately followed by target code
    relation_samples: HashMap<String, Vec<String>>,
    /// Ordered so language listings come out sorted by code
    languages: BTreeMap<String, LanguageMeta>,
    network_from: HashMap<String, Vec<NetworkLink>>,
    network_to: HashMap<String, Vec<NetworkLink>>,
}

/// Key of the relation-samples mapping for an ordered language pair.
fn relation_key(source: &str, target: &str) -> String {
    format!("{source}{target}")
}

impl RelationStore {
    /// Start building a store programmatically
    pub fn builder() -> RelationStoreBuilder {
        RelationStoreBuilder::new()
    }

    /// Languages containing `word` (exact match, no normalization)
    pub fn languages_of(&self, word: &str) -> &[String] {
        self.word_languages
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Words starting with `prefix`, in lexicographic order
    pub fn words_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.word_languages
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(word, _)| word.starts_with(prefix))
            .map(|(word, languages)| (word.as_str(), languages.as_slice()))
    }

    /// Raw meaning pairs of a word in a language
    pub fn meanings_of(&self, language: &str, word: &str) -> &[LexicalNode] {
        Self::edges(&self.meanings, &LexicalNode::new(language, word))
    }

    /// Direct parents of a node, no recursion
    pub fn parent_edges_of(&self, node: &LexicalNode) -> &[LexicalNode] {
        Self::edges(&self.parents, node)
    }

    /// Direct children of a node, no recursion
    pub fn child_edges_of(&self, node: &LexicalNode) -> &[LexicalNode] {
        Self::edges(&self.children, node)
    }

    /// Example sentences for a language
    pub fn samples_of(&self, language: &str) -> &[String] {
        self.language_samples
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Example sentences for an ordered `source -> target` language pair
    pub fn relation_samples_of(&self, source: &str, target: &str) -> &[String] {
        self.relation_samples
            .get(&relation_key(source, target))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Display name of a language
    pub fn display_name_of(&self, language: &str) -> Option<&str> {
        self.languages.get(language).map(|meta| meta.name.as_str())
    }

    /// All languages with metadata, ordered by code
    pub fn languages(&self) -> impl Iterator<Item = (&str, &LanguageMeta)> {
        self.languages
            .iter()
            .map(|(code, meta)| (code.as_str(), meta))
    }

    /// Whether the store knows anything about a language code
    pub fn knows_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
            || self.language_samples.contains_key(language)
            || self.network_from.contains_key(language)
            || self.network_to.contains_key(language)
    }

    /// Languages `language` draws words from, strongest first
    pub fn language_network_from(&self, language: &str) -> &[NetworkLink] {
        self.network_from
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Languages `language` lends words to, strongest first
    pub fn language_network_to(&self, language: &str) -> &[NetworkLink] {
        self.network_to
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct words known
    pub fn word_count(&self) -> usize {
        self.word_languages.len()
    }

    fn edges<'a>(
        map: &'a HashMap<LexicalNode, Vec<LexicalNode>>,
        node: &LexicalNode,
    ) -> &'a [LexicalNode] {
        map.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}
