// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleDto, CursorPage},
    error::ApplicationError,
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderMap, HeaderName, HeaderValue},
};
use utoipa::IntoParams;

/// Response header carrying the token for the next page.
pub const NEXT_CURSOR_HEADER: &str = "x-cursor";

/// Query parameters are kept as raw strings so that a malformed `limit`
/// produces the service's own JSON validation error. Extraction lives in
/// [`extractors`](crate::presentation::http::extractors).
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Only return articles written by this author.
    pub author_id: Option<String>,
    /// Continuation token taken from a previous `X-Cursor` header.
    pub cursor: Option<String>,
    /// Page size, 1 to 100. Defaults to 20.
    pub limit: Option<String>,
}

impl From<ArticleListParams> for ListArticlesQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            author_id: params.author_id,
            cursor: params.cursor,
            limit: params.limit,
        }
    }
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles with resolved authors.", body = [ArticleDto],
            headers(("X-Cursor" = String, description = "Token for the next page, present only when more articles exist"))),
        (status = 400, description = "Malformed limit or cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Store or author lookup failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
/// `GET /articles`
///
/// # Errors
///
/// 400 for a malformed `limit` or cursor, 500 for store and author lookup
/// failures. Both carry an [`ErrorResponse`](crate::presentation::http::error::ErrorResponse) body.
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: ArticleListParams,
) -> HttpResult<(HeaderMap, Json<Vec<ArticleDto>>)> {
    let page = state
        .services
        .article_queries
        .list_articles(params.into())
        .await
        .into_http()?;

    into_response_parts(page)
}

fn into_response_parts(
    page: CursorPage<ArticleDto>,
) -> HttpResult<(HeaderMap, Json<Vec<ArticleDto>>)> {
    let mut headers = HeaderMap::new();
    if let Some(token) = page.next_cursor {
        let value = HeaderValue::from_str(&token).map_err(|err| {
            HttpError::from_error(ApplicationError::infrastructure(format!(
                "cursor is not a valid header value: {err}"
            )))
        })?;
        headers.insert(HeaderName::from_static(NEXT_CURSOR_HEADER), value);
    }
    Ok((headers, Json(page.items)))
}
