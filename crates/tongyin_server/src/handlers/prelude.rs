//! Frequently used imports for handlers.

pub use crate::{error::TongyinResult, TongyinState};
pub use axum::{extract::State, Json};
pub use eyre::WrapErr;
pub use tongyin_api::{request as req, response as res};
pub use tracing::instrument;
