//! Query result types
//!
//! Owned, serializable views assembled by the [`Lexicon`](crate::Lexicon)
//! from store lookups. These are the shapes the HTTP layer returns.

use serde::{Deserialize, Serialize};

use crate::node_id::LexicalNode;
use crate::store::NetworkLink;
use crate::traversal::RelationTree;

/// Meanings of a word split by language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningSplit {
    /// Meanings in the query language
    pub synonyms: Vec<LexicalNode>,
    /// Meanings in any other language
    pub translations: Vec<LexicalNode>,
}

/// A word found verbatim in a language
pub type WordMatch = LexicalNode;

/// A language whose code or display name matched a search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMatch {
    pub code: String,
    pub name: Option<String>,
}

/// Search hits, labeled by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub term: String,
    pub words: Vec<WordMatch>,
    pub languages: Vec<LanguageMatch>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.languages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: Option<String>,
    pub samples: Vec<String>,
    /// Languages this one draws words from
    pub borrows_from: Vec<NetworkLink>,
    /// Languages this one lends words to
    pub lends_to: Vec<NetworkLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePairInfo {
    pub source: String,
    pub source_name: Option<String>,
    pub target: String,
    pub target_name: Option<String>,
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub languages: Vec<String>,
}

/// Everything known about one word in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInLanguage {
    pub language: String,
    pub word: String,
    pub synonyms: Vec<LexicalNode>,
    pub translations: Vec<LexicalNode>,
    pub ancestry: RelationTree,
    pub descendants: RelationTree,
}
