//! Programmatic construction of a [`RelationStore`].
//!
//! The loader feeds file contents through the same builder, so there is one
//! construction path. Repeated calls for the same key append.

use std::collections::HashMap;

use super::network::normalize_links;
use super::{relation_key, LanguageMeta, RelationStore};
use crate::node_id::LexicalNode;

/// Accumulates mappings, then freezes them into a [`RelationStore`]
#[derive(Debug, Default)]
pub struct RelationStoreBuilder {
    store: RelationStore,
    raw_from: HashMap<String, Vec<(String, u64)>>,
    raw_to: HashMap<String, Vec<(String, u64)>>,
}

impl RelationStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word_languages<I>(mut self, word: impl Into<String>, languages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.store
            .word_languages
            .entry(word.into())
            .or_default()
            .extend(languages.into_iter().map(Into::into));
        self
    }

    pub fn with_meanings<I>(mut self, node: impl Into<LexicalNode>, meanings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LexicalNode>,
    {
        extend_edges(&mut self.store.meanings, node.into(), meanings);
        self
    }

    pub fn with_parents<I>(mut self, node: impl Into<LexicalNode>, parents: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LexicalNode>,
    {
        extend_edges(&mut self.store.parents, node.into(), parents);
        self
    }

    pub fn with_children<I>(mut self, node: impl Into<LexicalNode>, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LexicalNode>,
    {
        extend_edges(&mut self.store.children, node.into(), children);
        self
    }

    pub fn with_language_samples<I>(mut self, language: impl Into<String>, samples: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.store
            .language_samples
            .entry(language.into())
            .or_default()
            .extend(samples.into_iter().map(Into::into));
        self
    }

    /// Samples for the ordered pair `source -> target`
    pub fn with_relation_samples<I>(mut self, source: &str, target: &str, samples: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.store
            .relation_samples
            .entry(relation_key(source, target))
            .or_default()
            .extend(samples.into_iter().map(Into::into));
        self
    }

    /// Samples already keyed the way the source file keys them
    pub(crate) fn with_relation_samples_raw(mut self, key: String, samples: Vec<String>) -> Self {
        self.store
            .relation_samples
            .entry(key)
            .or_default()
            .extend(samples);
        self
    }

    pub fn with_language(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.store
            .languages
            .insert(code.into(), LanguageMeta { name: name.into() });
        self
    }

    /// Word counts `language` draws from other languages
    pub fn with_network_from<I, L>(mut self, language: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = (L, u64)>,
        L: Into<String>,
    {
        self.raw_from
            .entry(language.into())
            .or_default()
            .extend(links.into_iter().map(|(l, count)| (l.into(), count)));
        self
    }

    /// Word counts `language` lends to other languages
    pub fn with_network_to<I, L>(mut self, language: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = (L, u64)>,
        L: Into<String>,
    {
        self.raw_to
            .entry(language.into())
            .or_default()
            .extend(links.into_iter().map(|(l, count)| (l.into(), count)));
        self
    }

    /// Freeze into an immutable store
    pub fn build(self) -> RelationStore {
        let mut store = self.store;
        store.network_from = self
            .raw_from
            .into_iter()
            .map(|(lang, links)| {
                let normalized = normalize_links(&lang, links);
                (lang, normalized)
            })
            .collect();
        store.network_to = self
            .raw_to
            .into_iter()
            .map(|(lang, links)| {
                let normalized = normalize_links(&lang, links);
                (lang, normalized)
            })
            .collect();
        store
    }
}

fn extend_edges<I>(map: &mut HashMap<LexicalNode, Vec<LexicalNode>>, node: LexicalNode, edges: I)
where
    I: IntoIterator,
    I::Item: Into<LexicalNode>,
{
    map.entry(node)
        .or_default()
        .extend(edges.into_iter().map(Into::into));
}
