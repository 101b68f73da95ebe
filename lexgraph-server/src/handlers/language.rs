//! Language endpoints
//!
//! - `GET /lang/:iso` - name, samples and contact network of a language
//! - `GET /relation/:iso1/:iso2` - samples for an ordered language pair

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lexgraph_core::{LanguageInfo, LanguagePairInfo};

use crate::state::AppState;

pub async fn language_info(
    State(state): State<AppState>,
    Path(iso): Path<String>,
) -> Result<Json<LanguageInfo>, (StatusCode, String)> {
    state
        .lexicon
        .language_info(&iso)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown language: {iso}")))
}

pub async fn language_pair_info(
    State(state): State<AppState>,
    Path((iso1, iso2)): Path<(String, String)>,
) -> Json<LanguagePairInfo> {
    Json(state.lexicon.language_pair_info(&iso1, &iso2))
}
