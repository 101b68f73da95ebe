//! Word endpoints
//!
//! - `GET /word/:word` - languages containing the word (empty if unknown)
//! - `GET /word/:word/:lang` - meanings and etymology of the word in a
//!   language; 404 when the word does not belong to that language

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lexgraph_core::{WordInLanguage, WordInfo};

use crate::state::AppState;

pub async fn word_info(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Json<WordInfo> {
    Json(state.lexicon.word_info(&word))
}

pub async fn word_in_language(
    State(state): State<AppState>,
    Path((word, lang)): Path<(String, String)>,
) -> Result<Json<WordInLanguage>, (StatusCode, String)> {
    state
        .lexicon
        .word_in_language(&lang, &word)
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Word '{word}' not found in language '{lang}'"),
            )
        })
}
