//! lexgraph-core - read-only lexical relation index
//!
//! Answers lexical-relation queries over a precomputed graph: which languages
//! contain a word, what it means in a language (synonyms and translations),
//! and which words are its etymological ancestors or descendants.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Consumers: HTTP router (lexgraph-server), tools, tests          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Lexicon (query façade)                      │
//! │   languages / meanings / search / language + word views         │
//! └─────────────────────────────────────────────────────────────────┘
//!                │                                   │
//!                ▼                                   ▼
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │       TraversalEngine        │──▶│        RelationStore         │
//! │  ancestry / descendant trees │   │  immutable, loaded once      │
//! └──────────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use lexgraph_core::{Lexicon, RelationStore, TraversalLimits};
//!
//! let store = RelationStore::builder()
//!     .with_word_languages("cat", ["eng", "fra"])
//!     .with_meanings(("eng", "cat"), [("eng", "feline"), ("fra", "chat")])
//!     .with_parents(("eng", "cat"), [("lat", "cattus")])
//!     .build();
//!
//! let lexicon = Lexicon::new(Arc::new(store), TraversalLimits::default());
//!
//! let split = lexicon.translations_and_synonyms("eng", "cat");
//! assert_eq!(split.synonyms[0].word, "feline");
//! assert_eq!(split.translations[0].word, "chat");
//!
//! let ancestry = lexicon.ancestry_for("eng", "cat");
//! assert_eq!(ancestry.branches[0].node.word, "cattus");
//! ```

pub mod config;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod node_id;
pub mod store;
pub mod traversal;

// Re-export main types
pub use config::{DataConfig, LexiconConfig, SearchConfig, ServerConfig};
pub use error::{ConfigError, LoadError};
pub use lexicon::{normalize_word, Lexicon};
pub use model::{
    LanguageInfo, LanguageMatch, LanguagePairInfo, MeaningSplit, SearchResults, WordInLanguage,
    WordInfo, WordMatch,
};
pub use node_id::{LexicalNode, NodeIdError};
pub use store::{LanguageMeta, NetworkLink, RelationStore, RelationStoreBuilder};
pub use traversal::{
    RelationBranch, RelationTree, TraversalDirection, TraversalEngine, TraversalLimits,
    MAX_DEPTH_CEILING,
};
