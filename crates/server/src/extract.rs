use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use service::directory::Validate;

use crate::errors::ApiError;
use crate::observability::REJECTED_TOTAL;

/// JSON body that must deserialize and pass `Validate` before the handler runs.
/// Malformed or invalid bodies become a 422 with a `detail` message.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            REJECTED_TOTAL.with_label_values(&["malformed_body"]).inc();
            ApiError::from(rejection)
        })?;
        value.validate().map_err(|e| {
            REJECTED_TOTAL.with_label_values(&["invalid_body"]).inc();
            ApiError::from(e)
        })?;
        Ok(Self(value))
    }
}

/// The `{phone}` path segment, taken verbatim.
pub struct PhonePath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for PhonePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(phone) = Path::<String>::from_request_parts(parts, state).await.map_err(|rejection| {
            REJECTED_TOTAL.with_label_values(&["bad_path"]).inc();
            ApiError::from(rejection)
        })?;
        Ok(Self(phone))
    }
}
