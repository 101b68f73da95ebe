//! Query Façade - the public read API
//!
//! Every operation is a pure read of the shared [`RelationStore`]. Unknown
//! words, languages or language pairs produce empty results; the only
//! "not found" signal is `None` from [`Lexicon::language_info`] and
//! [`Lexicon::word_in_language`], which callers map to their own notion of
//! absence.

use std::sync::Arc;

use tracing::debug;

use crate::config::{LexiconConfig, SearchConfig};
use crate::error::LoadError;
use crate::model::{
    LanguageInfo, LanguageMatch, LanguagePairInfo, MeaningSplit, SearchResults, WordInLanguage,
    WordInfo,
};
use crate::node_id::LexicalNode;
use crate::store::RelationStore;
use crate::traversal::{RelationTree, TraversalEngine, TraversalLimits};

/// Read-only query service over a relation store
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct Lexicon {
    store: Arc<RelationStore>,
    engine: TraversalEngine,
    max_word_matches: usize,
}

/// Trim and lowercase a word before lookup
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

impl Lexicon {
    pub fn new(store: Arc<RelationStore>, limits: TraversalLimits) -> Self {
        let engine = TraversalEngine::new(Arc::clone(&store), limits);
        Self {
            store,
            engine,
            max_word_matches: SearchConfig::default().max_word_matches,
        }
    }

    /// Cap the number of word hits returned by [`Lexicon::search`]
    pub fn with_max_word_matches(mut self, max: usize) -> Self {
        self.max_word_matches = max;
        self
    }

    /// Load the store described by `config` and wrap it
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LoadError> {
        let store = RelationStore::load(&config.data)?;
        Ok(Self::new(Arc::new(store), config.traversal)
            .with_max_word_matches(config.search.max_word_matches))
    }

    pub fn store(&self) -> &RelationStore {
        &self.store
    }

    /// Languages containing `word`; empty for unknown words
    pub fn languages_for(&self, word: &str) -> &[String] {
        self.store.languages_of(&normalize_word(word))
    }

    /// Raw meaning pairs, unclassified
    pub fn meanings_for(&self, language: &str, word: &str) -> &[LexicalNode] {
        self.store.meanings_of(language, &normalize_word(word))
    }

    /// Split meanings into same-language synonyms and cross-language
    /// translations
    ///
    /// Every meaning lands in exactly one list. A meaning spelled like the
    /// query word but in another language counts as a translation.
    pub fn translations_and_synonyms(&self, language: &str, word: &str) -> MeaningSplit {
        let (synonyms, translations): (Vec<_>, Vec<_>) = self
            .meanings_for(language, word)
            .iter()
            .cloned()
            .partition(|meaning| meaning.language == language);

        MeaningSplit {
            synonyms,
            translations,
        }
    }

    pub fn ancestry_for(&self, language: &str, word: &str) -> RelationTree {
        self.engine
            .ancestors(&LexicalNode::new(language, normalize_word(word)))
    }

    pub fn descendants_for(&self, language: &str, word: &str) -> RelationTree {
        self.engine
            .descendants(&LexicalNode::new(language, normalize_word(word)))
    }

    pub fn samples_for(&self, language: &str) -> &[String] {
        self.store.samples_of(language)
    }

    /// Samples for the ordered pair `source -> target`
    pub fn relation_samples_for(&self, source: &str, target: &str) -> &[String] {
        self.store.relation_samples_of(source, target)
    }

    pub fn display_name(&self, language: &str) -> Option<&str> {
        self.store.display_name_of(language)
    }

    /// Find words starting with `term` in every language that has them, and
    /// languages whose code or display name starts with `term`
    ///
    /// Matching is on the lowercased term; display names are lowercased
    /// before the prefix test. The exact word, if present, comes first and is
    /// never dropped; the remaining word hits follow in lexicographic order
    /// while the configured cap allows.
    pub fn search(&self, term: &str) -> SearchResults {
        let term = normalize_word(term);
        if term.is_empty() {
            return SearchResults::default();
        }

        let mut words: Vec<LexicalNode> = self
            .store
            .languages_of(&term)
            .iter()
            .map(|language| LexicalNode::new(language.as_str(), term.as_str()))
            .collect();
        let remaining = self.max_word_matches.saturating_sub(words.len());
        let longer = self
            .store
            .words_with_prefix(&term)
            .filter(|(word, _)| *word != term)
            .flat_map(|(word, languages)| {
                languages
                    .iter()
                    .map(move |language| LexicalNode::new(language.as_str(), word))
            });
        words.extend(longer.take(remaining));

        let languages = self
            .store
            .languages()
            .filter(|(code, meta)| {
                code.starts_with(&term) || meta.name.to_lowercase().starts_with(&term)
            })
            .map(|(code, meta)| LanguageMatch {
                code: code.to_string(),
                name: Some(meta.name.clone()),
            })
            .collect();

        let results = SearchResults {
            term,
            words,
            languages,
        };
        debug!(
            term = %results.term,
            words = results.words.len(),
            languages = results.languages.len(),
            "Search"
        );
        results
    }

    /// Name, samples and contact network of a language; `None` if the code
    /// is unknown
    pub fn language_info(&self, language: &str) -> Option<LanguageInfo> {
        if !self.store.knows_language(language) {
            return None;
        }

        Some(LanguageInfo {
            code: language.to_string(),
            name: self.display_name(language).map(str::to_string),
            samples: self.samples_for(language).to_vec(),
            borrows_from: self.store.language_network_from(language).to_vec(),
            lends_to: self.store.language_network_to(language).to_vec(),
        })
    }

    pub fn language_pair_info(&self, source: &str, target: &str) -> LanguagePairInfo {
        LanguagePairInfo {
            source: source.to_string(),
            source_name: self.display_name(source).map(str::to_string),
            target: target.to_string(),
            target_name: self.display_name(target).map(str::to_string),
            samples: self.relation_samples_for(source, target).to_vec(),
        }
    }

    pub fn word_info(&self, word: &str) -> WordInfo {
        let word = normalize_word(word);
        WordInfo {
            languages: self.store.languages_of(&word).to_vec(),
            word,
        }
    }

    /// Meanings and etymology of `word` in `language`
    ///
    /// Returns `None` when `language` is not among the word's languages.
    pub fn word_in_language(&self, language: &str, word: &str) -> Option<WordInLanguage> {
        let word = normalize_word(word);
        if !self.store.languages_of(&word).iter().any(|l| l == language) {
            debug!(%language, %word, "Word not present in language");
            return None;
        }

        let MeaningSplit {
            synonyms,
            translations,
        } = self.translations_and_synonyms(language, &word);

        Some(WordInLanguage {
            ancestry: self.ancestry_for(language, &word),
            descendants: self.descendants_for(language, &word),
            language: language.to_string(),
            word,
            synonyms,
            translations,
        })
    }
}
