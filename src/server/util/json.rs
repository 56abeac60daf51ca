use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::AppError;

/// JSON body extractor whose rejection is an [`AppError::BadRequest`].
///
/// Malformed JSON, a wrong content type or an unknown enumeration code all answer
/// 400 `{ "message": ... }` instead of axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
