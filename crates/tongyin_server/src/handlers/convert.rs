//! /convert

use super::prelude::*;

// handlers

#[instrument]
pub async fn convert(
    State(state): State<TongyinState>,
    Json(convert): Json<req::Convert<'static>>,
) -> TongyinResult<Json<res::Converted>> {
    let text = state
        .dictionary
        .convert(&convert.text)
        .await
        .wrap_err("Failed to convert text")?;
    Ok(Json(res::Converted { text }))
}
