use crate::error::AppError;
use crate::params::{KEYWORD_REQUIRED, KeywordParams};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

/// The trimmed, non-empty `keyword` query parameter.
///
/// Rejects with a 400 before the handler runs, so no store access happens
/// for a blank keyword.
#[derive(Debug)]
pub struct Keyword(pub String);

impl<S> FromRequestParts<S> for Keyword
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<KeywordParams>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::bad_request(KEYWORD_REQUIRED).with_debug(e.to_string()))?;

        Ok(Keyword(params.keyword()?.to_string()))
    }
}
