// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::controllers::articles::ArticleListParams;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::HttpError;

impl<S> FromRequestParts<S> for ArticleListParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) =
            Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(format!(
                    "invalid query string: {}",
                    rejection.body_text()
                )))
            })?;

        Ok(first_values(pairs))
    }
}

/// Keep the first value of each known key; later repeats and unknown keys
/// are ignored.
fn first_values(pairs: Vec<(String, String)>) -> ArticleListParams {
    let mut params = ArticleListParams::default();
    for (key, value) in pairs {
        let slot = match key.as_str() {
            "author_id" => &mut params.author_id,
            "cursor" => &mut params.cursor,
            "limit" => &mut params.limit,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
    params
}
