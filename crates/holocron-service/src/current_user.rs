//! Current-user resolution.
//!
//! There is no authentication yet. The acting user is taken from the
//! optional `user_id` query parameter, falling back to `DEFAULT_USER_ID`
//! when absent. Resolution happens per request through an extractor so the
//! choice is never process-global; swapping this for a real auth layer later
//! only touches this module.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use holocron_core::DEFAULT_USER_ID;

use crate::error::ApiError;

/// The acting user for a request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// The resolved user id.
    pub user_id: i64,
}

/// Query parameters recognized by the extractor.
#[derive(Debug, Deserialize)]
struct CurrentUserParams {
    user_id: Option<i64>,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 S,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Self, Self::Rejection>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            // A non-integer user_id is a malformed request, not "user absent".
            let Query(params) = Query::<CurrentUserParams>::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;

            Ok(CurrentUser {
                user_id: params.user_id.unwrap_or(DEFAULT_USER_ID),
            })
        })
    }
}
