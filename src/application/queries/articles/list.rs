use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListCursor, ArticleListQuery, ArticlePage, PageLimit},
        author::AuthorId,
        errors::DomainError,
    },
};

/// Raw listing parameters as received from the caller. Blank values are
/// treated as absent.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub author_id: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<String>,
}

impl ArticleQueryService {
    /// List one page of articles with their authors resolved.
    ///
    /// # Errors
    ///
    /// Validation errors for a malformed `limit` or cursor; store and
    /// author lookup failures otherwise.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let criteria = normalize_listing(query)?;

        let ArticlePage {
            mut articles,
            next_cursor,
        } = self
            .read_repo
            .list_page(&criteria)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "article listing query failed"))?;

        tracing::debug!(
            count = articles.len(),
            limit = criteria.limit.get(),
            author_id = criteria.author_id.as_ref().map(AuthorId::as_str),
            has_more = next_cursor.is_some(),
            "fetched article page"
        );

        self.enricher
            .enrich(&mut articles)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "author enrichment failed"))?;

        let items = articles.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}

fn normalize_listing(query: ListArticlesQuery) -> ApplicationResult<ArticleListQuery> {
    let limit = PageLimit::parse(query.limit.as_deref())?;
    let mut criteria = ArticleListQuery::new(limit);

    if let Some(author_id) = non_blank(query.author_id) {
        criteria = criteria.with_author(AuthorId::new(author_id));
    }
    if let Some(cursor) = decode_cursor(non_blank(query.cursor).as_deref())? {
        criteria = criteria.with_cursor(cursor);
    }

    Ok(criteria)
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<ArticleListCursor>> {
    token
        .map(|value| {
            ArticleListCursor::decode(value).map_err(|err| match err {
                DomainError::Validation(msg) => ApplicationError::validation(msg),
                other => ApplicationError::from(other),
            })
        })
        .transpose()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
