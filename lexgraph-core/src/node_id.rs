//! LexicalNode - the `(language, word)` identity used throughout the graph.
//!
//! Source mappings key meanings and relations by a composite string
//! `"<language>:<word>"`. This module is the only place that string form is
//! built or taken apart; everything past the loader works with the typed
//! [`LexicalNode`].
//!
//! Serializes as: `{ "language": "eng", "word": "cat" }`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between language code and word in a composite identifier.
pub const SEPARATOR: char = ':';

/// Errors produced when decoding a composite identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeIdError {
    /// No `:` between language and word.
    #[error("missing ':' separator in node id '{0}'")]
    MissingSeparator(String),

    /// Language part before the separator is empty.
    #[error("empty language in node id '{0}'")]
    EmptyLanguage(String),

    /// Word part after the separator is empty.
    #[error("empty word in node id '{0}'")]
    EmptyWord(String),

    /// The word itself contains a separator.
    #[error("word contains ':' in node id '{0}'")]
    AmbiguousSeparator(String),
}

/// A word within a specific language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LexicalNode {
    pub language: String,
    pub word: String,
}

impl LexicalNode {
    pub fn new(language: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            word: word.into(),
        }
    }

    /// Build the composite `"language:word"` form.
    pub fn encode(language: &str, word: &str) -> String {
        format!("{language}{SEPARATOR}{word}")
    }

    /// Split a composite identifier on its first `:`.
    ///
    /// # Errors
    /// Returns [`NodeIdError`] if the separator is missing, either side is
    /// empty, or the word contains another separator. Upstream data never
    /// legitimately produces any of these.
    pub fn decode(id: &str) -> Result<Self, NodeIdError> {
        let (language, word) = id
            .split_once(SEPARATOR)
            .ok_or_else(|| NodeIdError::MissingSeparator(id.to_string()))?;

        if language.is_empty() {
            return Err(NodeIdError::EmptyLanguage(id.to_string()));
        }
        if word.is_empty() {
            return Err(NodeIdError::EmptyWord(id.to_string()));
        }
        if word.contains(SEPARATOR) {
            return Err(NodeIdError::AmbiguousSeparator(id.to_string()));
        }

        Ok(Self::new(language, word))
    }

    /// The composite identifier for this node.
    pub fn id(&self) -> String {
        Self::encode(&self.language, &self.word)
    }
}

impl fmt::Display for LexicalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.language, SEPARATOR, self.word)
    }
}

impl<L: Into<String>, W: Into<String>> From<(L, W)> for LexicalNode {
    fn from((language, word): (L, W)) -> Self {
        Self::new(language, word)
    }
}

impl FromStr for LexicalNode {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
