//! GET /search/:term - words and languages matching a term.

use axum::{
    extract::{Path, State},
    Json,
};
use lexgraph_core::SearchResults;

use crate::state::AppState;

pub async fn search(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Json<SearchResults> {
    Json(state.lexicon.search(&term))
}
