//! /dictionary

use super::prelude::*;

// handlers

#[instrument]
pub async fn stats(
    State(state): State<TongyinState>,
) -> TongyinResult<Json<res::DictionaryStats>> {
    let stats = state
        .dictionary
        .load()
        .await
        .wrap_err("Failed to load the dictionary")?;
    Ok(Json(res::DictionaryStats {
        pinyin_count: stats.class_count,
        char_count: stats.total_char_count,
    }))
}
