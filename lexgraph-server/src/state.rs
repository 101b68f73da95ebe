//! Shared application state
//!
//! The lexicon is immutable after startup, so handlers share it without
//! locking.

use lexgraph_core::Lexicon;

#[derive(Clone)]
pub struct AppState {
    pub lexicon: Lexicon,
}

impl AppState {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}
