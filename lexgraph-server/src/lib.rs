//! lexgraph-server - HTTP front for the lexical relation index
//!
//! A thin dispatcher: each endpoint maps onto one [`Lexicon`] query and
//! returns its result as JSON. Paths that match no endpoint fall through to
//! the static front-end build.
//!
//! ## Endpoints
//!
//! - `GET /api/health`             - liveness
//! - `GET /search/:term`           - word and language matches
//! - `GET /lang/:iso`              - language name, samples, contact network
//! - `GET /relation/:iso1/:iso2`   - samples for a language pair
//! - `GET /word/:word`             - languages containing a word
//! - `GET /word/:word/:lang`       - synonyms, translations, ancestry, descendants
//!
//! [`Lexicon`]: lexgraph_core::Lexicon

pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
