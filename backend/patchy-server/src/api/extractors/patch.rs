//! Axum extractors that run a request body through the patch pipeline

use crate::ApiError;

use patchy_core::{FieldPresence, PatchResolver, Patched, Resolution};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRef, FromRequest, Request},
    http::{HeaderValue, StatusCode, header},
};
use bytes::Bytes;
use error_location::ErrorLocation;

/// A validated partial update.
///
/// Rejects with the filtered field errors when any remain, so handlers only
/// ever see an update whose supplied fields all passed their rules.
pub struct Patch<T>(pub Patched<T>);

/// A partial update plus whatever errors survived filtering.
///
/// Only decode and construction failures reject; rule failures are left to
/// the handler (dry runs, previews).
pub struct PatchWithErrors<T>(pub Resolution<T>);

impl<T, S> FromRequest<S> for Patch<T>
where
    T: Send + Sync + 'static,
    S: Send + Sync,
    PatchResolver: FromRef<S>,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let resolver = PatchResolver::from_ref(state);
            let body = read_json_body(req, state).await?;

            let resolution = resolver.resolve::<T>(&body)?;
            log::debug!(
                "Accepted patch for {} ({} field(s) supplied)",
                std::any::type_name::<T>(),
                resolution.target().presence().len()
            );

            Ok(Patch(resolution.into_target()))
        }
    }
}

impl<T, S> FromRequest<S> for PatchWithErrors<T>
where
    T: Send + Sync + 'static,
    S: Send + Sync,
    PatchResolver: FromRef<S>,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let resolver = PatchResolver::from_ref(state);
            let body = read_json_body(req, state).await?;

            Ok(PatchWithErrors(resolver.resolve_collecting::<T>(&body)?))
        }
    }
}

/// Buffer the body, refusing non-JSON content types.
///
/// A missing `Content-Type` is allowed: an empty PATCH is a valid request.
async fn read_json_body<S: Send + Sync>(req: Request, state: &S) -> Result<Bytes, ApiError> {
    if let Some(content_type) = req.headers().get(header::CONTENT_TYPE)
        && !is_json_content_type(content_type)
    {
        return Err(ApiError::UnsupportedMediaType {
            message: format!(
                "Expected application/json, got {}",
                content_type.to_str().unwrap_or("<binary>")
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Bytes::from_request(req, state).await.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::BadRequest {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    })
}

pub(crate) fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
