//! tongyin server error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tongyin::DictionaryError;
use tongyin_api::response as res;

pub type TongyinResult<T> = Result<T, TongyinError>;

pub struct TongyinError(eyre::Report);

impl<E> From<E> for TongyinError
where
    E: Into<eyre::Report>,
{
    fn from(value: E) -> Self {
        Self(value.into())
    }
}

impl TongyinError {
    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<DictionaryError>().is_some() {
            // the dictionary may become available later
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for TongyinError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!("{:?}", self.0);
        let err = res::Error {
            message: format!("{:#}", self.0),
        };
        (status, Json(err)).into_response()
    }
}
